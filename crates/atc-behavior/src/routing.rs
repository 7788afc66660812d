//! Direct routing toward the destination when no other aircraft is near.
//!
//! The destination's quadrant relative to the aircraft (by the signs of
//! `dx`, `dy`, zero counted as non-negative) fixes the two useful headings.
//! An aircraft already flying one of them keeps going; one flying a
//! perpendicular heading that points away from the quadrant turns onto the
//! useful heading on that same axis pair, never reversing.  Otherwise the
//! longer axis wins, and ties go to North/South.

use atc_agent::{AgentResult, Aircraft};
use atc_core::{Direction, GridPos};

/// Heading that makes progress toward the aircraft's destination.
///
/// # Errors
/// `AgentError::HeadingUnset` if the aircraft has no heading yet.
pub fn route_toward_destination(aircraft: &Aircraft) -> AgentResult<Direction> {
    Ok(route(aircraft.position(), aircraft.destination(), aircraft.heading()?))
}

/// Pure kernel of [`route_toward_destination`].
pub fn route(position: GridPos, destination: GridPos, heading: Direction) -> Direction {
    use Direction::*;

    let (dx, dy) = position.offset_to(destination);

    match (dx >= 0, dy >= 0) {
        // North-east.
        (true, true) => match heading {
            South => East,
            West => North,
            _ if dx > dy => East,
            _ => North,
        },
        // South-east.
        (true, false) => match heading {
            West => South,
            North => East,
            _ if dx > dy.abs() => East,
            _ => South,
        },
        // North-west.
        (false, true) => match heading {
            East => North,
            South => West,
            _ if dx.abs() > dy => West,
            _ => North,
        },
        // South-west.
        (false, false) => match heading {
            North => West,
            East => South,
            _ if dx.abs() > dy.abs() => West,
            _ => South,
        },
    }
}

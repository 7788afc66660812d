//! Paired collision avoidance for two aircraft in communication range.
//!
//! # Search
//!
//! [`CANDIDATE_PAIRS`] lists seven maneuver pairs in a fixed order.  Each
//! candidate is applied to both aircraft's *current* headings (candidates do
//! not build on each other), both tentative next cells are computed from the
//! pre-tick positions, and the first candidate that keeps the two cells out
//! of collision range wins.
//!
//! Same-direction pairs `(L, L)` and `(R, R)` are never tried, and a
//! candidate that would take either aircraft off the `i32` grid is skipped.
//!
//! If every candidate still collides the search returns the last candidate's
//! headings with [`Resolution::resolved`] set to `false`.  Callers must treat
//! that as a degraded outcome, not a clear path.

use std::fmt;

use atc_agent::{AgentResult, Aircraft};
use atc_core::{COLLISION_RADIUS, Direction, Turn, in_square_range};

// ── TurnPair ──────────────────────────────────────────────────────────────────

/// One maneuver for each aircraft: `first` for the first aircraft, `second`
/// for the other.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TurnPair {
    pub first:  Turn,
    pub second: Turn,
}

impl TurnPair {
    pub const fn new(first: Turn, second: Turn) -> Self {
        Self { first, second }
    }

    /// Headings produced by applying this pair to `(first, second)`.
    #[inline]
    pub fn apply(self, first: Direction, second: Direction) -> [Direction; 2] {
        [first.apply(self.first), second.apply(self.second)]
    }
}

impl fmt::Display for TurnPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.first, self.second)
    }
}

/// Search order for [`resolve_pair`].  First aircraft turns left first,
/// then holds, then turns right.
pub const CANDIDATE_PAIRS: [TurnPair; 7] = [
    TurnPair::new(Turn::Left,    Turn::Forward),
    TurnPair::new(Turn::Left,    Turn::Right),
    TurnPair::new(Turn::Forward, Turn::Left),
    TurnPair::new(Turn::Forward, Turn::Forward),
    TurnPair::new(Turn::Forward, Turn::Right),
    TurnPair::new(Turn::Right,   Turn::Left),
    TurnPair::new(Turn::Right,   Turn::Forward),
];

// ── Resolution ────────────────────────────────────────────────────────────────

/// Outcome of one avoidance search.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Resolution {
    /// New headings, indexed like the aircraft passed to the search.
    pub headings:  [Direction; 2],
    /// The candidate that produced `headings`.
    pub pair:      TurnPair,
    /// Index of `pair` in [`CANDIDATE_PAIRS`].
    pub candidate: usize,
    /// `false` when all seven candidates collide and `headings` is the
    /// exhausted-search fallback.
    pub resolved:  bool,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> [{}, {}]{}",
            self.pair,
            self.headings[0],
            self.headings[1],
            if self.resolved { "" } else { " (unresolved)" },
        )
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Find headings for both aircraft whose next cells are not within
/// [`COLLISION_RADIUS`] of each other.
///
/// # Errors
/// `AgentError::HeadingUnset` if either aircraft has no heading.
pub fn resolve_pair(first: &Aircraft, second: &Aircraft) -> AgentResult<Resolution> {
    resolve_pair_within(first, second, COLLISION_RADIUS)
}

/// [`resolve_pair`] with an explicit collision radius.
pub fn resolve_pair_within(
    first:            &Aircraft,
    second:           &Aircraft,
    collision_radius: u32,
) -> AgentResult<Resolution> {
    let current = [first.heading()?, second.heading()?];

    for (candidate, &pair) in CANDIDATE_PAIRS.iter().enumerate() {
        let headings = pair.apply(current[0], current[1]);

        // A candidate that steps off the grid is never clear.
        let (Some(next_first), Some(next_second)) = (
            first.tentative_position(headings[0]),
            second.tentative_position(headings[1]),
        ) else {
            continue;
        };

        if !in_square_range(next_first, next_second, collision_radius) {
            return Ok(Resolution { headings, pair, candidate, resolved: true });
        }
    }

    let candidate = CANDIDATE_PAIRS.len() - 1;
    let pair = CANDIDATE_PAIRS[candidate];
    Ok(Resolution {
        headings: pair.apply(current[0], current[1]),
        pair,
        candidate,
        resolved: false,
    })
}

//! Integer grid positions and proximity tests.
//!
//! The plane is unbounded; one grid unit is one tick of travel.  Proximity is
//! Chebyshev distance, so the "range" around an aircraft is a square of side
//! `2 * radius + 1` cells, not a circle.

use std::fmt;

use crate::Direction;

/// Square radius within which two aircraft can exchange intentions.
pub const COMM_RADIUS: u32 = 2;

/// Square radius within which two aircraft are considered to have collided.
pub const COLLISION_RADIUS: u32 = 1;

/// A cell on the integer grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one unit away along `heading`.
    ///
    /// Exactly one coordinate changes, by exactly one.
    ///
    /// # Panics
    /// Panics in debug mode if the step leaves the `i32` grid; use
    /// [`checked_step`](Self::checked_step) near the edge.
    #[inline]
    pub fn step(self, heading: Direction) -> GridPos {
        let (dx, dy) = heading.delta();
        GridPos {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// [`step`](Self::step), or `None` if the next cell is off the grid.
    #[inline]
    pub fn checked_step(self, heading: Direction) -> Option<GridPos> {
        let (dx, dy) = heading.delta();
        Some(GridPos {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Signed offset `(target - self)` per axis, widened to `i64`.
    #[inline]
    pub fn offset_to(self, target: GridPos) -> (i64, i64) {
        (
            target.x as i64 - self.x as i64,
            target.y as i64 - self.y as i64,
        )
    }

    /// Chebyshev distance to `other`.
    #[inline]
    pub fn chebyshev(self, other: GridPos) -> u64 {
        let (dx, dy) = self.offset_to(other);
        dx.unsigned_abs().max(dy.unsigned_abs())
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPos {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        GridPos { x, y }
    }
}

/// Free-function form of [`GridPos::step`].
#[inline]
pub fn step(pos: GridPos, heading: Direction) -> GridPos {
    pos.step(heading)
}

/// `true` iff `a` and `b` are within `radius` cells of each other on *both*
/// axes.  Symmetric in `a` and `b`.
///
/// Use [`COMM_RADIUS`] for the communication check and [`COLLISION_RADIUS`]
/// for the collision check.
#[inline]
pub fn in_square_range(a: GridPos, b: GridPos, radius: u32) -> bool {
    a.chebyshev(b) <= radius as u64
}

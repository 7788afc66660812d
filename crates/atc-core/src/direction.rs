//! Cardinal headings and the turn transforms between them.
//!
//! A heading is always one of the four cardinal values.  There is no
//! diagonal and no "none" state; an aircraft whose heading has not been
//! assigned yet carries `Option<Direction>::None` in `atc-agent` instead.

use std::fmt;
use std::str::FromStr;

use crate::AtcError;

// ── Direction ────────────────────────────────────────────────────────────────

/// One of the four cardinal travel directions on the grid.
///
/// North is `+y`, East is `+x`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[cfg_attr(feature = "serde", serde(rename = "N", alias = "north", alias = "North"))]
    North,
    #[cfg_attr(feature = "serde", serde(rename = "S", alias = "south", alias = "South"))]
    South,
    #[cfg_attr(feature = "serde", serde(rename = "E", alias = "east", alias = "East"))]
    East,
    #[cfg_attr(feature = "serde", serde(rename = "W", alias = "west", alias = "West"))]
    West,
}

impl Direction {
    /// Every heading, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The heading a quarter turn counter-clockwise from `self`.
    ///
    /// West → South → East → North → West.
    #[inline]
    pub fn turn_left(self) -> Direction {
        match self {
            Direction::West  => Direction::South,
            Direction::South => Direction::East,
            Direction::East  => Direction::North,
            Direction::North => Direction::West,
        }
    }

    /// The heading a quarter turn clockwise from `self`.  Exact inverse of
    /// [`turn_left`](Self::turn_left).
    #[inline]
    pub fn turn_right(self) -> Direction {
        match self {
            Direction::West  => Direction::North,
            Direction::North => Direction::East,
            Direction::East  => Direction::South,
            Direction::South => Direction::West,
        }
    }

    /// Apply a relative [`Turn`] to this heading.
    #[inline]
    pub fn apply(self, turn: Turn) -> Direction {
        match turn {
            Turn::Left    => self.turn_left(),
            Turn::Forward => self,
            Turn::Right   => self.turn_right(),
        }
    }

    /// Unit displacement `(dx, dy)` for one step along this heading.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::West  => (-1, 0),
            Direction::East  => (1, 0),
            Direction::South => (0, -1),
            Direction::North => (0, 1),
        }
    }

    /// Single-letter label, used in traces and CSV columns.
    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East  => 'E',
            Direction::West  => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Direction {
    type Err = AtcError;

    /// Accepts the single-letter form (`N`) or the full name (`north`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east"  => Ok(Direction::East),
            "w" | "west"  => Ok(Direction::West),
            other => Err(AtcError::Parse(format!("unknown direction {other:?}"))),
        }
    }
}

// ── Turn ─────────────────────────────────────────────────────────────────────

/// A relative maneuver applied to a heading for one tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Left,
    Forward,
    Right,
}

impl Turn {
    pub fn as_char(self) -> char {
        match self {
            Turn::Left    => 'L',
            Turn::Forward => 'F',
            Turn::Right   => 'R',
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

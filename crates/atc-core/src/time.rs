//! Simulation time model and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick moves every
//! en-route aircraft exactly one grid cell, so there is no wall-clock mapping:
//! tick counts are the unit of both time and distance.

use std::fmt;

use crate::{AtcError, AtcResult, COLLISION_RADIUS, COMM_RADIUS};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick of a run.
///
/// Tick 0 is the initial state; the first move happens while the clock reads
/// tick 0 and is reported as tick 1, matching "after N ticks".
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    /// Number of ticks completed so far.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self { current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick and return the new value.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.current_tick
    }

    /// `true` once `current_tick` has reached `limit` (if any).
    #[inline]
    pub fn reached(&self, limit: Option<u64>) -> bool {
        limit.is_some_and(|max| self.current_tick.0 >= max)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically embedded in a scenario JSON file; every field has a default so
/// an empty `"config": {}` object is valid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Square radius for the communication check.  Default: [`COMM_RADIUS`].
    pub comm_radius: u32,

    /// Square radius for the collision check, both inside the avoidance
    /// search and after each move.  Default: [`COLLISION_RADIUS`].
    pub collision_radius: u32,

    /// Stop after this many ticks even if an aircraft is still en route.
    /// `None` runs until both have arrived, however long that takes.
    pub max_ticks: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            comm_radius:      COMM_RADIUS,
            collision_radius: COLLISION_RADIUS,
            max_ticks:        None,
        }
    }
}

impl SimConfig {
    /// Reject radius combinations the driver cannot honor.
    ///
    /// The collision square must not be larger than the communication square.
    pub fn validate(&self) -> AtcResult<()> {
        if self.collision_radius > self.comm_radius {
            return Err(AtcError::Config(format!(
                "collision_radius {} exceeds comm_radius {}",
                self.collision_radius, self.comm_radius
            )));
        }
        if self.max_ticks == Some(0) {
            return Err(AtcError::Config("max_ticks must be at least 1".into()));
        }
        Ok(())
    }
}

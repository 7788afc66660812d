//! Plain data describing what happened during a tick and a run.

use atc_behavior::Resolution;
use atc_core::{Direction, GridPos, Tick};

/// How headings were chosen for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickMode {
    /// Both aircraft were en route and in communication range; headings came
    /// from the paired avoidance search.
    Avoidance(Resolution),

    /// Each en-route aircraft was routed independently.  `None` marks an
    /// aircraft that had already arrived and did not move.
    Direct { headings: [Option<Direction>; 2] },
}

impl TickMode {
    /// The avoidance result, if this tick used the paired search.
    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            TickMode::Avoidance(r) => Some(r),
            TickMode::Direct { .. } => None,
        }
    }

    pub fn is_avoidance(&self) -> bool {
        matches!(self, TickMode::Avoidance(_))
    }
}

/// Two en-route aircraft ended a tick within collision range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent {
    pub tick:      Tick,
    pub positions: [GridPos; 2],
}

/// Everything the driver did in one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// The tick just completed (first move of a run is tick 1).
    pub tick:      Tick,
    pub mode:      TickMode,
    /// Positions after the move.
    pub positions: [GridPos; 2],
    pub collision: Option<CollisionEvent>,
    /// Indices of aircraft that reached their destination this tick.
    pub arrivals:  Vec<usize>,
}

/// Summary returned by [`Sim::run`][crate::Sim::run].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimOutcome {
    /// Last tick executed.
    pub final_tick:      Tick,
    /// `true` if both aircraft arrived; `false` if `max_ticks` cut the run.
    pub completed:       bool,
    /// Collision events reported.
    pub collisions:      u64,
    /// Avoidance searches that exhausted every candidate.
    pub unresolved:      u64,
    /// Ticks that ran the paired avoidance search.
    pub avoidance_ticks: u64,
    /// Tick at which each aircraft arrived; `Tick(0)` if it started there.
    pub arrivals:        [Option<Tick>; 2],
}

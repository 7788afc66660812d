//! Read-only simulation state passed to every behavior callback.

use atc_core::{SimConfig, Tick};

/// A read-only snapshot of the run passed to every
/// [`BehaviorModel`][crate::BehaviorModel] callback.
///
/// Built by `atc-sim` once per tick, before any aircraft moves.
pub struct SimContext<'a> {
    /// The tick being computed (the first move of a run is tick 1).
    pub tick: Tick,

    /// Run configuration, including the communication and collision radii.
    pub config: &'a SimConfig,
}

impl<'a> SimContext<'a> {
    #[inline]
    pub fn new(tick: Tick, config: &'a SimConfig) -> Self {
        Self { tick, config }
    }
}

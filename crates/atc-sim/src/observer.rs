//! Simulation observer trait for traces, output writers, and tests.

use atc_agent::Aircraft;
use atc_behavior::Resolution;
use atc_core::{AgentId, Tick};

use crate::{CollisionEvent, SimOutcome, TickReport};

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// Within one tick the order is `on_tick_start`, `on_unresolved`,
/// `on_arrival` (once per arriving aircraft), `on_collision`, `on_tick_end`.
///
/// # Example — collision counter
///
/// ```rust,ignore
/// struct CollisionCounter(u64);
///
/// impl SimObserver for CollisionCounter {
///     fn on_collision(&mut self, _event: &CollisionEvent) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called when [`Sim::run`][crate::Sim::run] starts, before the first tick.
    fn on_sim_start(&mut self, _tick: Tick, _aircraft: &[Aircraft; 2]) {}

    /// Called at the very start of each tick, before any decision.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// The paired avoidance search exhausted every candidate; the aircraft
    /// are about to fly the fallback headings anyway.
    fn on_unresolved(&mut self, _tick: Tick, _resolution: &Resolution) {}

    /// An aircraft reached its destination this tick.
    fn on_arrival(&mut self, _tick: Tick, _agent: AgentId) {}

    /// Two en-route aircraft ended the tick within collision range.
    fn on_collision(&mut self, _event: &CollisionEvent) {}

    /// Called at the end of each tick with the post-move state.
    fn on_tick_end(&mut self, _report: &TickReport, _aircraft: &[Aircraft; 2]) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _outcome: &SimOutcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Fan every callback out to two observers, `.0` first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_sim_start(&mut self, tick: Tick, aircraft: &[Aircraft; 2]) {
        self.0.on_sim_start(tick, aircraft);
        self.1.on_sim_start(tick, aircraft);
    }

    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_unresolved(&mut self, tick: Tick, resolution: &Resolution) {
        self.0.on_unresolved(tick, resolution);
        self.1.on_unresolved(tick, resolution);
    }

    fn on_arrival(&mut self, tick: Tick, agent: AgentId) {
        self.0.on_arrival(tick, agent);
        self.1.on_arrival(tick, agent);
    }

    fn on_collision(&mut self, event: &CollisionEvent) {
        self.0.on_collision(event);
        self.1.on_collision(event);
    }

    fn on_tick_end(&mut self, report: &TickReport, aircraft: &[Aircraft; 2]) {
        self.0.on_tick_end(report, aircraft);
        self.1.on_tick_end(report, aircraft);
    }

    fn on_sim_end(&mut self, outcome: &SimOutcome) {
        self.0.on_sim_end(outcome);
        self.1.on_sim_end(outcome);
    }
}

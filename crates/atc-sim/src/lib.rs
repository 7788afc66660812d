//! `atc-sim` — tick loop driver for the rust_atc simulator.
//!
//! # Tick loop
//!
//! ```text
//! while either aircraft is en route (and max_ticks not reached):
//!   ① Range    — comm = in_square_range(pos1, pos2, comm_radius)
//!   ② Decide   — both en route and comm → BehaviorModel::resolve (both)
//!                otherwise              → BehaviorModel::route (each en route)
//!                all headings come from the pre-tick state
//!   ③ Apply    — assign headings, advance each en-route aircraft one cell
//!   ④ Check    — both were en route before the move and
//!                in_square_range(pos1, pos2, collision_radius) → collision
//! ```
//!
//! Collisions and exhausted avoidance searches are reported to the
//! [`SimObserver`] and logged via `tracing`; neither stops the run.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use atc_behavior::GreedyAvoidance;
//! use atc_sim::{NoopObserver, Scenario, SimBuilder};
//!
//! let mut sim = SimBuilder::from_scenario(Scenario::head_on(), GreedyAvoidance).build()?;
//! let outcome = sim.run(&mut NoopObserver)?;
//! assert_eq!(outcome.collisions, 0);
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod scenario;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{CollisionEvent, SimOutcome, TickMode, TickReport};
pub use observer::{NoopObserver, SimObserver};
pub use scenario::{AircraftSpec, Scenario};
pub use sim::{RunStats, Sim};

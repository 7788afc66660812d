//! `atc-core` — foundational types for the `rust_atc` simulator.
//!
//! This crate is a dependency of every other `atc-*` crate.  It has no
//! `atc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`direction`]   | `Direction` (N/S/E/W), `Turn` (Left/Forward/Right)       |
//! | [`grid`]        | `GridPos`, `step`, `checked_step`, `in_square_range`     |
//! | [`ids`]         | `AgentId`                                                |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                          |
//! | [`rng`]         | `SimRng` (seeded scenario generation)                    |
//! | [`error`]       | `AtcError`, `AtcResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::{Direction, Turn};
pub use error::{AtcError, AtcResult};
pub use grid::{COLLISION_RADIUS, COMM_RADIUS, GridPos, in_square_range, step};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};

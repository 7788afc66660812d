//! `atc-behavior` — how aircraft pick their next heading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`routing`]   | `route_toward_destination` — single-aircraft greedy heading     |
//! | [`avoidance`] | `resolve_pair`, `TurnPair`, `CANDIDATE_PAIRS`, `Resolution`     |
//! | [`context`]   | `SimContext` — read-only tick snapshot passed to models         |
//! | [`model`]     | `BehaviorModel` trait                                           |
//! | [`greedy`]    | `GreedyAvoidance` — the standard model built on the two above   |
//!
//! # Design notes
//!
//! Every function here *computes* headings and never assigns them.  The
//! driver in `atc-sim` applies the result and moves the aircraft, so each
//! decision can be tested against a frozen snapshot.

pub mod avoidance;
pub mod context;
pub mod greedy;
pub mod model;
pub mod routing;


pub use avoidance::{CANDIDATE_PAIRS, Resolution, TurnPair, resolve_pair, resolve_pair_within};
pub use context::SimContext;
pub use greedy::GreedyAvoidance;
pub use model::BehaviorModel;
pub use routing::{route, route_toward_destination};

//! `atc-agent` — per-aircraft controller state.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`aircraft`]  | `Aircraft` — position, destination, heading, arrival   |
//! | [`builder`]   | `AircraftBuilder` (fluent construction)                |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types. |

pub mod aircraft;
pub mod builder;
pub mod error;


pub use aircraft::Aircraft;
pub use builder::AircraftBuilder;
pub use error::{AgentError, AgentResult};

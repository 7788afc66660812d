//! `atc-output` — the plain-text trace for the rust_atc simulator.
//!
//! [`ConsoleTrace`] prints one `Plane 1: (x, y) Plane 2: (x, y)` line per
//! tick, preceded by `Planes collided!` on a collision tick, to any
//! `io::Write`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use atc_output::ConsoleTrace;
//!
//! let mut trace = ConsoleTrace::stdout();
//! sim.run(&mut trace)?;
//! if let Some(e) = trace.take_error() {
//!     eprintln!("trace error: {e}");
//! }
//! ```

pub mod console;
pub mod error;


pub use console::ConsoleTrace;
pub use error::{OutputError, OutputResult};

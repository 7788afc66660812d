//! Plain-text trace in the simulator's classic console format.
//!
//! ```text
//! Plane 1: (1, -1) Plane 2: (-1, 1)
//! Plane 1: (1, 0) Plane 2: (-2, 1)
//! ```
//!
//! A collision prints `Planes collided!` immediately before that tick's
//! position line.

use std::io::{self, Write};

use atc_agent::Aircraft;
use atc_sim::{CollisionEvent, SimObserver, SimOutcome, TickReport};

use crate::OutputError;

/// A [`SimObserver`] that prints one line per tick to `out`.
pub struct ConsoleTrace<W: Write> {
    out:        W,
    last_error: Option<OutputError>,
}

impl ConsoleTrace<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleTrace<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    /// Take the first write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }
}

impl<W: Write> SimObserver for ConsoleTrace<W> {
    fn on_collision(&mut self, _event: &CollisionEvent) {
        let result = writeln!(self.out, "Planes collided!");
        self.store_err(result);
    }

    fn on_tick_end(&mut self, report: &TickReport, _aircraft: &[Aircraft; 2]) {
        let [first, second] = report.positions;
        let result = writeln!(self.out, "Plane 1: {first} Plane 2: {second}");
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _outcome: &SimOutcome) {
        let result = self.out.flush();
        self.store_err(result);
    }
}

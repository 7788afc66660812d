//! Fluent builder for an [`Aircraft`].
//!
//! # Usage
//!
//! ```rust
//! use atc_agent::AircraftBuilder;
//! use atc_core::{AgentId, Direction, GridPos};
//!
//! let aircraft = AircraftBuilder::new(AgentId(0))
//!     .start(GridPos::new(0, -1))
//!     .destination(GridPos::new(0, 10))
//!     .heading(Direction::South)
//!     .build();
//!
//! assert_eq!(aircraft.heading(), Ok(Direction::South));
//! assert!(!aircraft.has_arrived());
//! ```

use atc_core::{AgentId, Direction, GridPos};

use crate::Aircraft;

/// Fluent builder for [`Aircraft`].
///
/// Start and destination default to the origin; the heading stays unset
/// unless [`heading`](Self::heading) is called.
pub struct AircraftBuilder {
    id:          AgentId,
    start:       GridPos,
    destination: GridPos,
    heading:     Option<Direction>,
}

impl AircraftBuilder {
    pub fn new(id: AgentId) -> Self {
        Self {
            id,
            start:       GridPos::default(),
            destination: GridPos::default(),
            heading:     None,
        }
    }

    pub fn start(mut self, start: impl Into<GridPos>) -> Self {
        self.start = start.into();
        self
    }

    pub fn destination(mut self, destination: impl Into<GridPos>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn heading(mut self, heading: Direction) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Set or clear the heading from an optional value (scenario files).
    pub fn maybe_heading(mut self, heading: Option<Direction>) -> Self {
        self.heading = heading;
        self
    }

    pub fn build(self) -> Aircraft {
        let mut aircraft = Aircraft::new(self.id, self.start, self.destination);
        if let Some(heading) = self.heading {
            aircraft.set_heading(heading);
        }
        aircraft
    }
}

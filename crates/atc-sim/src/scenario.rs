//! Scenario files: a config plus two aircraft, loadable from JSON.
//!
//! ```json
//! { "config": { "comm_radius": 2, "collision_radius": 1 },
//!   "aircraft": [
//!     { "start": {"x": 0, "y": -1}, "destination": {"x": 0, "y": 10},  "heading": "S" },
//!     { "start": {"x": 0, "y": 1},  "destination": {"x": 0, "y": -10}, "heading": "W" } ] }
//! ```
//!
//! `config` and every field inside it are optional.  `heading` may be
//! omitted only for an aircraft that starts on its destination.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use atc_agent::{Aircraft, AircraftBuilder};
use atc_core::{AgentId, Direction, GridPos, SimConfig, SimRng};
use serde::{Deserialize, Serialize};

use crate::SimResult;

/// One aircraft's initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AircraftSpec {
    pub start:       GridPos,
    pub destination: GridPos,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading:     Option<Direction>,
}

impl AircraftSpec {
    pub fn new(start: impl Into<GridPos>, destination: impl Into<GridPos>, heading: Direction) -> Self {
        Self { start: start.into(), destination: destination.into(), heading: Some(heading) }
    }

    pub fn build(&self, id: AgentId) -> Aircraft {
        AircraftBuilder::new(id)
            .start(self.start)
            .destination(self.destination)
            .maybe_heading(self.heading)
            .build()
    }
}

/// A complete two-aircraft setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config:   SimConfig,
    pub aircraft: [AircraftSpec; 2],
}

impl Scenario {
    /// Two aircraft starting two cells apart on the y axis, bound for
    /// opposite ends of it.
    pub fn head_on() -> Self {
        Self {
            config:   SimConfig::default(),
            aircraft: [
                AircraftSpec::new((0, -1), (0, 10), Direction::South),
                AircraftSpec::new((0, 1), (0, -10), Direction::West),
            ],
        }
    }

    /// Random starts, destinations and headings inside `[-extent, extent]²`.
    ///
    /// The config is the default with `seed` left at zero; callers running a
    /// batch usually set `max_ticks` afterwards.
    pub fn random(rng: &mut SimRng, extent: i32) -> Self {
        let mut spec = || AircraftSpec {
            start:       rng.grid_pos(extent),
            destination: rng.grid_pos(extent),
            heading:     Some(rng.direction()),
        };
        let first = spec();
        let second = spec();
        Self { config: SimConfig::default(), aircraft: [first, second] }
    }

    pub fn from_json_str(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> SimResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read a scenario file from disk.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_json_string(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Instantiate the aircraft with ids 0 and 1.
    pub fn build_aircraft(&self) -> [Aircraft; 2] {
        let [first, second] = &self.aircraft;
        [first.build(AgentId(0)), second.build(AgentId(1))]
    }
}

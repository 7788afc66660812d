//! Fluent builder for constructing a [`Sim`].

use atc_agent::{AgentError, Aircraft};
use atc_behavior::BehaviorModel;
use atc_core::{SimClock, SimConfig, Tick};

use crate::sim::RunStats;
use crate::{Scenario, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: radii and tick cap
/// - `B: BehaviorModel`: heading selection (e.g. [`atc_behavior::GreedyAvoidance`])
/// - two [`Aircraft`], via [`.aircraft()`](Self::aircraft) or a [`Scenario`]
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), GreedyAvoidance)
///     .aircraft(first, second)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:   SimConfig,
    aircraft: Option<[Aircraft; 2]>,
    behavior: B,
}

impl<B: BehaviorModel> SimBuilder<B> {
    pub fn new(config: SimConfig, behavior: B) -> Self {
        Self { config, aircraft: None, behavior }
    }

    /// Take config and aircraft from a scenario.
    pub fn from_scenario(scenario: Scenario, behavior: B) -> Self {
        let aircraft = scenario.build_aircraft();
        Self { config: scenario.config, aircraft: Some(aircraft), behavior }
    }

    /// Supply the two aircraft.  `first` is reported as plane 1.
    pub fn aircraft(mut self, first: Aircraft, second: Aircraft) -> Self {
        self.aircraft = Some([first, second]);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    ///
    /// Fails if the config is inconsistent, no aircraft were supplied, both
    /// aircraft share an id, or an en-route aircraft has no heading.
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;

        let aircraft = self.aircraft.ok_or(SimError::MissingAircraft)?;
        if aircraft[0].id() == aircraft[1].id() {
            return Err(SimError::DuplicateId(aircraft[0].id()));
        }

        // An aircraft parked on its destination never flies, so it may omit
        // a heading.
        let mut stats = RunStats::default();
        for (i, a) in aircraft.iter().enumerate() {
            if a.has_arrived() {
                stats.arrivals[i] = Some(Tick::ZERO);
            } else if a.heading_opt().is_none() {
                return Err(SimError::Agent(AgentError::HeadingUnset(a.id())));
            }
        }

        Ok(Sim {
            config: self.config,
            clock: SimClock::new(),
            aircraft,
            behavior: self.behavior,
            stats,
        })
    }
}

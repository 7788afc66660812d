//! The `Sim` struct and its tick loop.

use atc_agent::{AgentError, Aircraft};
use atc_behavior::{BehaviorModel, SimContext};
use atc_core::{Direction, SimClock, SimConfig, Tick, in_square_range};
use tracing::{debug, info, warn};

use crate::{CollisionEvent, SimObserver, SimOutcome, SimResult, TickMode, TickReport};

// ── Run counters ──────────────────────────────────────────────────────────────

/// Counters accumulated across ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub collisions:      u64,
    pub unresolved:      u64,
    pub avoidance_ticks: u64,
    pub arrivals:        [Option<Tick>; 2],
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation driver.
///
/// `Sim<B>` owns both aircraft and all run state; nothing is global.  Each
/// tick it picks headings through the [`BehaviorModel`], applies them, moves
/// every en-route aircraft one cell, and checks for a collision.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    /// Radii and tick cap.
    pub config: SimConfig,

    /// Number of ticks completed.
    pub clock: SimClock,

    /// The two aircraft, in the order they were supplied.
    pub aircraft: [Aircraft; 2],

    /// Heading selection.
    pub behavior: B,

    /// Counters for the run so far.
    pub stats: RunStats,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// `true` once both aircraft sit on their destinations.
    pub fn is_complete(&self) -> bool {
        self.aircraft.iter().all(Aircraft::has_arrived)
    }

    /// Run until both aircraft have arrived, or until `config.max_ticks`
    /// ticks have completed.
    ///
    /// With `max_ticks` unset this can loop forever if the aircraft keep
    /// dodging each other.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimOutcome> {
        observer.on_sim_start(self.clock.current_tick, &self.aircraft);

        while !self.is_complete() && !self.clock.reached(self.config.max_ticks) {
            self.step(observer)?;
        }

        let outcome = self.outcome();
        info!(
            final_tick = outcome.final_tick.0,
            completed = outcome.completed,
            collisions = outcome.collisions,
            unresolved = outcome.unresolved,
            "simulation finished"
        );
        observer.on_sim_end(&outcome);
        Ok(outcome)
    }

    /// Run at most `n` ticks, stopping early once both aircraft have arrived.
    ///
    /// Ignores `max_ticks`.  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if self.is_complete() {
                break;
            }
            self.step(observer)?;
        }
        Ok(())
    }

    /// Snapshot of the run so far.
    pub fn outcome(&self) -> SimOutcome {
        SimOutcome {
            final_tick:      self.clock.current_tick,
            completed:       self.is_complete(),
            collisions:      self.stats.collisions,
            unresolved:      self.stats.unresolved,
            avoidance_ticks: self.stats.avoidance_ticks,
            arrivals:        self.stats.arrivals,
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Execute exactly one tick.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickReport> {
        let tick = Tick(self.clock.current_tick.0 + 1);
        observer.on_tick_start(tick);

        // ── Phase 1: decide from the pre-tick state ───────────────────────
        let en_route = self.aircraft.each_ref().map(|a| !a.has_arrived());
        let mode = self.decide(tick, en_route)?;

        if let TickMode::Avoidance(resolution) = &mode {
            self.stats.avoidance_ticks += 1;
            if !resolution.resolved {
                self.stats.unresolved += 1;
                warn!(tick = tick.0, %resolution, "no collision-free maneuver; flying fallback");
                observer.on_unresolved(tick, resolution);
            }
        }

        // ── Phase 2: apply headings and move ──────────────────────────────
        let headings: [Option<Direction>; 2] = match &mode {
            TickMode::Avoidance(r) => r.headings.map(Some),
            TickMode::Direct { headings } => *headings,
        };
        // Both moves are checked before either aircraft changes.
        for (aircraft, heading) in self.aircraft.iter().zip(headings) {
            if let Some(heading) = heading
                && aircraft.tentative_position(heading).is_none()
            {
                return Err(AgentError::OffGrid(aircraft.id(), aircraft.position(), heading).into());
            }
        }
        for (aircraft, heading) in self.aircraft.iter_mut().zip(headings) {
            if let Some(heading) = heading {
                aircraft.set_heading(heading);
                aircraft.advance()?;
            }
        }
        self.clock.advance();

        let positions = self.aircraft.each_ref().map(Aircraft::position);
        debug!(
            tick = tick.0,
            avoidance = mode.is_avoidance(),
            first = %positions[0],
            second = %positions[1],
            "tick complete"
        );

        // ── Phase 3: arrivals ─────────────────────────────────────────────
        let mut arrivals = Vec::new();
        for (i, aircraft) in self.aircraft.iter().enumerate() {
            if en_route[i] && aircraft.has_arrived() {
                self.stats.arrivals[i] = Some(tick);
                arrivals.push(i);
                info!(tick = tick.0, agent = aircraft.id().label(), "aircraft arrived");
                observer.on_arrival(tick, aircraft.id());
            }
        }

        // ── Phase 4: collision check ──────────────────────────────────────
        //
        // Only counts when both aircraft were still en route before this
        // tick's move.
        let collision = (en_route[0]
            && en_route[1]
            && in_square_range(positions[0], positions[1], self.config.collision_radius))
        .then(|| CollisionEvent { tick, positions });

        if let Some(event) = &collision {
            self.stats.collisions += 1;
            warn!(tick = tick.0, first = %positions[0], second = %positions[1], "planes collided");
            observer.on_collision(event);
        }

        let report = TickReport { tick, mode, positions, collision, arrivals };
        observer.on_tick_end(&report, &self.aircraft);
        Ok(report)
    }

    /// Choose this tick's headings.  Reads only; nothing moves here.
    fn decide(&self, tick: Tick, en_route: [bool; 2]) -> SimResult<TickMode> {
        let [first, second] = &self.aircraft;
        let ctx = SimContext::new(tick, &self.config);

        let comm = in_square_range(first.position(), second.position(), self.config.comm_radius);
        if comm && en_route[0] && en_route[1] {
            let resolution = self.behavior.resolve(first, second, &ctx)?;
            debug!(tick = tick.0, %resolution, "in communication range");
            return Ok(TickMode::Avoidance(resolution));
        }

        let mut headings = [None; 2];
        for (i, aircraft) in self.aircraft.iter().enumerate() {
            if en_route[i] {
                headings[i] = Some(self.behavior.route(aircraft, &ctx)?);
            }
        }
        Ok(TickMode::Direct { headings })
    }
}

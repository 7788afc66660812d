//! Integration tests for atc-sim.

use atc_agent::{AgentError, Aircraft, AircraftBuilder};
use atc_behavior::{GreedyAvoidance, Resolution};
use atc_core::{AgentId, Direction, GridPos, SimConfig, Tick};

use crate::{
    CollisionEvent, NoopObserver, Scenario, Sim, SimBuilder, SimError, SimObserver, SimOutcome,
    TickMode, TickReport,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn aircraft(id: u32, start: (i32, i32), dest: (i32, i32), heading: Direction) -> Aircraft {
    AircraftBuilder::new(AgentId(id))
        .start(start)
        .destination(dest)
        .heading(heading)
        .build()
}

fn sim_with(first: Aircraft, second: Aircraft, config: SimConfig) -> Sim<GreedyAvoidance> {
    SimBuilder::new(config, GreedyAvoidance)
        .aircraft(first, second)
        .build()
        .unwrap()
}

fn head_on_sim() -> Sim<GreedyAvoidance> {
    SimBuilder::from_scenario(Scenario::head_on(), GreedyAvoidance).build().unwrap()
}

/// Both aircraft start nose to nose one cell apart; no candidate clears.
fn exhausted_sim() -> Sim<GreedyAvoidance> {
    sim_with(
        aircraft(0, (0, 0), (0, 10), Direction::North),
        aircraft(1, (0, 1), (0, -10), Direction::South),
        SimConfig::default(),
    )
}

fn pos(x: i32, y: i32) -> GridPos {
    GridPos::new(x, y)
}

/// Records every callback as a short string.
#[derive(Default)]
struct Recorder {
    log:     Vec<String>,
    reports: Vec<TickReport>,
    outcome: Option<SimOutcome>,
}

impl SimObserver for Recorder {
    fn on_sim_start(&mut self, tick: Tick, aircraft: &[Aircraft; 2]) {
        self.log.push(format!("start {tick} {} {}", aircraft[0].position(), aircraft[1].position()));
    }

    fn on_tick_start(&mut self, tick: Tick) {
        self.log.push(format!("tick {tick}"));
    }

    fn on_unresolved(&mut self, tick: Tick, resolution: &Resolution) {
        self.log.push(format!("unresolved {tick} {resolution}"));
    }

    fn on_arrival(&mut self, tick: Tick, agent: AgentId) {
        self.log.push(format!("arrival {tick} {}", agent.label()));
    }

    fn on_collision(&mut self, event: &CollisionEvent) {
        self.log.push(format!("collision {}", event.tick));
    }

    fn on_tick_end(&mut self, report: &TickReport, _aircraft: &[Aircraft; 2]) {
        self.log.push(format!("end {}", report.tick));
        self.reports.push(report.clone());
    }

    fn on_sim_end(&mut self, outcome: &SimOutcome) {
        self.log.push("done".into());
        self.outcome = Some(*outcome);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_head_on() {
        let sim = head_on_sim();
        assert_eq!(sim.clock.current_tick, Tick::ZERO);
        assert_eq!(sim.aircraft[0].position(), pos(0, -1));
        assert_eq!(sim.aircraft[1].position(), pos(0, 1));
        assert!(!sim.is_complete());
    }

    #[test]
    fn missing_aircraft_errors() {
        let result = SimBuilder::new(SimConfig::default(), GreedyAvoidance).build();
        assert!(matches!(result, Err(SimError::MissingAircraft)));
    }

    #[test]
    fn duplicate_id_errors() {
        let result = SimBuilder::new(SimConfig::default(), GreedyAvoidance)
            .aircraft(
                aircraft(3, (0, 0), (5, 5), Direction::North),
                aircraft(3, (9, 9), (0, 0), Direction::South),
            )
            .build();
        assert!(matches!(result, Err(SimError::DuplicateId(AgentId(3)))));
    }

    #[test]
    fn collision_radius_above_comm_radius_errors() {
        let config = SimConfig { comm_radius: 1, collision_radius: 2, ..SimConfig::default() };
        let result = SimBuilder::from_scenario(Scenario { config, ..Scenario::head_on() }, GreedyAvoidance)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn zero_tick_cap_errors() {
        let config = SimConfig { max_ticks: Some(0), ..SimConfig::default() };
        let result = SimBuilder::from_scenario(Scenario { config, ..Scenario::head_on() }, GreedyAvoidance)
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn en_route_aircraft_without_heading_errors() {
        let headless = Aircraft::new(AgentId(1), pos(0, 1), pos(0, -10));
        let result = SimBuilder::new(SimConfig::default(), GreedyAvoidance)
            .aircraft(aircraft(0, (0, -1), (0, 10), Direction::South), headless)
            .build();
        assert!(matches!(
            result,
            Err(SimError::Agent(AgentError::HeadingUnset(AgentId(1))))
        ));
    }

    #[test]
    fn parked_aircraft_may_omit_heading() {
        let parked = Aircraft::new(AgentId(1), pos(4, 4), pos(4, 4));
        let sim = SimBuilder::new(SimConfig::default(), GreedyAvoidance)
            .aircraft(aircraft(0, (0, 0), (2, 0), Direction::East), parked)
            .build()
            .unwrap();
        assert_eq!(sim.stats.arrivals, [None, Some(Tick::ZERO)]);
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use atc_core::Direction::*;

    use super::*;

    #[test]
    fn head_on_resolves_without_collision() {
        let mut sim = head_on_sim();
        let outcome = sim.run(&mut NoopObserver).unwrap();

        assert!(outcome.completed);
        assert_eq!(outcome.final_tick, Tick(15));
        assert_eq!(outcome.collisions, 0);
        assert_eq!(outcome.unresolved, 0);
        assert_eq!(outcome.avoidance_ticks, 2);
        assert_eq!(outcome.arrivals, [Some(Tick(13)), Some(Tick(15))]);
        assert_eq!(sim.aircraft[0].position(), pos(0, 10));
        assert_eq!(sim.aircraft[1].position(), pos(0, -10));
    }

    #[test]
    fn head_on_first_ticks() {
        let mut sim = head_on_sim();

        let first = sim.step(&mut NoopObserver).unwrap();
        assert_eq!(first.tick, Tick(1));
        let resolution = first.mode.resolution().unwrap();
        assert_eq!(resolution.candidate, 0);
        assert_eq!(resolution.headings, [East, West]);
        assert_eq!(first.positions, [pos(1, -1), pos(-1, 1)]);
        assert_eq!(first.collision, None);

        let second = sim.step(&mut NoopObserver).unwrap();
        assert_eq!(second.mode.resolution().unwrap().headings, [North, West]);
        assert_eq!(second.positions, [pos(1, 0), pos(-2, 1)]);

        // Out of communication range from here on.
        let third = sim.step(&mut NoopObserver).unwrap();
        assert_eq!(third.mode, TickMode::Direct { headings: [Some(North), Some(South)] });
        assert_eq!(third.positions, [pos(1, 1), pos(-2, 0)]);
    }

    #[test]
    fn headings_are_assigned_each_tick() {
        let mut sim = head_on_sim();
        sim.step(&mut NoopObserver).unwrap();
        assert_eq!(sim.aircraft[0].heading(), Ok(East));
        assert_eq!(sim.aircraft[1].heading(), Ok(West));
    }

    #[test]
    fn exhausted_search_collides_and_recovers() {
        let mut sim = exhausted_sim();

        let first = sim.step(&mut NoopObserver).unwrap();
        let resolution = first.mode.resolution().unwrap();
        assert!(!resolution.resolved);
        assert_eq!(resolution.headings, [East, South]);
        assert_eq!(
            first.collision,
            Some(CollisionEvent { tick: Tick(1), positions: [pos(1, 0), pos(0, 0)] })
        );

        let outcome = sim.run(&mut NoopObserver).unwrap();
        assert!(outcome.completed);
        assert_eq!(outcome.final_tick, Tick(12));
        assert_eq!(outcome.collisions, 1);
        assert_eq!(outcome.unresolved, 1);
        assert_eq!(outcome.avoidance_ticks, 3);
        assert_eq!(outcome.arrivals, [Some(Tick(12)), Some(Tick(11))]);
    }

    #[test]
    fn direct_routing_can_collide() {
        // Out of range at the start; the routed paths meet diagonally on
        // tick 2, before the paired search ever runs.
        let mut sim = sim_with(
            aircraft(0, (0, 0), (3, 3), East),
            aircraft(1, (3, 3), (0, 0), West),
            SimConfig::default(),
        );
        let mut recorder = Recorder::default();
        let outcome = sim.run(&mut recorder).unwrap();

        assert_eq!(recorder.reports[0].mode, TickMode::Direct { headings: [Some(North), Some(South)] });
        let collision = recorder.reports[1].collision.unwrap();
        assert_eq!(collision.positions, [pos(1, 1), pos(2, 2)]);
        assert!(!recorder.reports[1].mode.is_avoidance());

        assert!(outcome.completed);
        assert_eq!(outcome.final_tick, Tick(18));
        assert_eq!(outcome.collisions, 1);
        assert_eq!(outcome.unresolved, 0);
        assert_eq!(outcome.avoidance_ticks, 8);
        assert_eq!(outcome.arrivals, [Some(Tick(16)), Some(Tick(18))]);
    }

    #[test]
    fn arrived_aircraft_never_collides() {
        // Plane 1 parks at (3, 0) on tick 3; plane 2 finishes right next to it.
        let mut sim = sim_with(
            aircraft(0, (0, 0), (3, 0), East),
            aircraft(1, (0, 2), (3, 1), East),
            SimConfig::default(),
        );
        let outcome = sim.run(&mut NoopObserver).unwrap();

        assert_eq!(outcome.final_tick, Tick(6));
        assert_eq!(outcome.collisions, 0);
        assert_eq!(outcome.avoidance_ticks, 1);
        assert_eq!(outcome.arrivals, [Some(Tick(3)), Some(Tick(6))]);
        assert_eq!(sim.aircraft[0].position(), pos(3, 0));
        assert_eq!(sim.aircraft[1].position(), pos(3, 1));
    }

    #[test]
    fn arrived_aircraft_does_not_move() {
        let mut sim = head_on_sim();
        let mut recorder = Recorder::default();
        sim.run(&mut recorder).unwrap();

        // Plane 1 arrives on tick 13; ticks 14 and 15 only move plane 2.
        for report in &recorder.reports[13..] {
            assert_eq!(report.positions[0], pos(0, 10));
            match report.mode {
                TickMode::Direct { headings: [None, Some(_)] } => {}
                ref other => panic!("unexpected mode {other:?} at {}", report.tick),
            }
        }
    }

    #[test]
    fn tick_cap_stops_the_run() {
        let config = SimConfig { max_ticks: Some(5), ..SimConfig::default() };
        let mut sim = SimBuilder::from_scenario(Scenario { config, ..Scenario::head_on() }, GreedyAvoidance)
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver).unwrap();

        assert!(!outcome.completed);
        assert_eq!(outcome.final_tick, Tick(5));
        assert_eq!(outcome.avoidance_ticks, 2);
        assert_eq!(outcome.arrivals, [None, None]);
        assert_eq!(sim.aircraft[0].position(), pos(1, 3));
        assert_eq!(sim.aircraft[1].position(), pos(-2, -2));
    }

    #[test]
    fn run_ticks_stops_at_completion() {
        let mut sim = head_on_sim();
        sim.run_ticks(4, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(4));

        sim.run_ticks(100, &mut NoopObserver).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(15));
        assert!(sim.is_complete());
    }

    #[test]
    fn already_complete_run_is_empty() {
        let mut sim = SimBuilder::new(SimConfig::default(), GreedyAvoidance)
            .aircraft(
                Aircraft::new(AgentId(0), pos(1, 1), pos(1, 1)),
                Aircraft::new(AgentId(1), pos(2, 2), pos(2, 2)),
            )
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver).unwrap();
        assert!(outcome.completed);
        assert_eq!(outcome.final_tick, Tick::ZERO);
        assert_eq!(outcome.arrivals, [Some(Tick::ZERO), Some(Tick::ZERO)]);
    }

    #[test]
    fn parked_aircraft_is_ignored() {
        // A parked aircraft never triggers the paired search and cannot be
        // collided with, even when plane 1 flies over it.
        let parked = Aircraft::new(AgentId(1), pos(1, 0), pos(1, 0));
        let mut sim = sim_with(aircraft(0, (0, 0), (3, 0), East), parked, SimConfig::default());
        let outcome = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(outcome.avoidance_ticks, 0);
        assert_eq!(outcome.collisions, 0);
        assert_eq!(outcome.arrivals, [Some(Tick(3)), Some(Tick::ZERO)]);
    }

    #[test]
    fn off_grid_move_errors_before_anything_moves() {
        // Straight above its destination but heading South, plane 1 routes
        // East, which is off the grid at x = i32::MAX.
        let first = aircraft(0, (i32::MAX, 0), (i32::MAX, 5), South);
        let mut sim = sim_with(first, aircraft(1, (0, 0), (0, 5), North), SimConfig::default());

        match sim.step(&mut NoopObserver) {
            Err(SimError::Agent(AgentError::OffGrid(id, at, heading))) => {
                assert_eq!(id, AgentId(0));
                assert_eq!(at, pos(i32::MAX, 0));
                assert_eq!(heading, East);
            }
            other => panic!("expected off-grid error, got {other:?}"),
        }
        assert_eq!(sim.aircraft[0].position(), pos(i32::MAX, 0));
        assert_eq!(sim.aircraft[1].position(), pos(0, 0));
        assert_eq!(sim.aircraft[0].heading(), Ok(South));
        assert_eq!(sim.clock.current_tick, Tick::ZERO);
    }

    #[test]
    fn avoidance_at_the_edge_stays_on_grid() {
        let mut sim = sim_with(
            aircraft(0, (i32::MAX, 2), (i32::MAX - 5, -5), South),
            aircraft(1, (i32::MAX, 0), (i32::MAX - 5, 5), North),
            SimConfig::default(),
        );
        let report = sim.step(&mut NoopObserver).unwrap();
        assert!(report.mode.is_avoidance());
        assert_eq!(report.positions, [pos(i32::MAX - 1, 2), pos(i32::MAX - 1, 0)]);
        assert!(report.collision.is_none());
    }

    #[test]
    fn runs_are_deterministic() {
        let a = head_on_sim().run(&mut NoopObserver).unwrap();
        let b = head_on_sim().run(&mut NoopObserver).unwrap();
        assert_eq!(a, b);
    }
}

// ── Observer callbacks ────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn callback_order_within_a_tick() {
        let mut sim = exhausted_sim();
        let mut recorder = Recorder::default();
        sim.run_ticks(1, &mut recorder).unwrap();

        assert_eq!(
            recorder.log,
            vec![
                "tick T1".to_string(),
                "unresolved T1 (R,F) -> [E, S] (unresolved)".to_string(),
                "collision T1".to_string(),
                "end T1".to_string(),
            ]
        );
    }

    #[test]
    fn run_brackets_ticks_with_start_and_end() {
        let mut sim = head_on_sim();
        let mut recorder = Recorder::default();
        let outcome = sim.run(&mut recorder).unwrap();

        assert_eq!(recorder.log.first().map(String::as_str), Some("start T0 (0, -1) (0, 1)"));
        assert_eq!(recorder.log.last().map(String::as_str), Some("done"));
        assert_eq!(recorder.outcome, Some(outcome));
        assert_eq!(recorder.reports.len(), 15);
    }

    #[test]
    fn arrivals_reported_once() {
        let mut sim = head_on_sim();
        let mut recorder = Recorder::default();
        sim.run(&mut recorder).unwrap();

        let arrivals: Vec<&str> = recorder
            .log
            .iter()
            .map(String::as_str)
            .filter(|l| l.starts_with("arrival"))
            .collect();
        assert_eq!(arrivals, vec!["arrival T13 1", "arrival T15 2"]);
        assert_eq!(recorder.reports[12].arrivals, vec![0]);
        assert_eq!(recorder.reports[14].arrivals, vec![1]);
    }

    #[test]
    fn pair_observer_fans_out() {
        let mut pair = (Recorder::default(), Recorder::default());
        head_on_sim().run(&mut pair).unwrap();
        assert_eq!(pair.0.log, pair.1.log);
        assert_eq!(pair.0.reports.len(), 15);
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use std::io::Write;

    use atc_core::SimRng;

    use super::*;

    const HEAD_ON_JSON: &str = r#"{
        "config": { "comm_radius": 2, "collision_radius": 1 },
        "aircraft": [
            { "start": {"x": 0, "y": -1}, "destination": {"x": 0, "y": 10},  "heading": "S" },
            { "start": {"x": 0, "y": 1},  "destination": {"x": 0, "y": -10}, "heading": "W" }
        ]
    }"#;

    #[test]
    fn json_matches_builtin_head_on() {
        assert_eq!(Scenario::from_json_str(HEAD_ON_JSON).unwrap(), Scenario::head_on());
    }

    #[test]
    fn missing_config_takes_defaults() {
        let json = r#"{ "aircraft": [
            { "start": {"x": 0, "y": 0}, "destination": {"x": 3, "y": 0}, "heading": "east" },
            { "start": {"x": 9, "y": 9}, "destination": {"x": 9, "y": 9} }
        ] }"#;
        let scenario = Scenario::from_json_str(json).unwrap();
        assert_eq!(scenario.config, SimConfig::default());
        assert_eq!(scenario.aircraft[0].heading, Some(Direction::East));
        assert_eq!(scenario.aircraft[1].heading, None);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let json = r#"{ "config": { "max_ticks": 50 }, "aircraft": [
            { "start": {"x": 0, "y": 0}, "destination": {"x": 3, "y": 0}, "heading": "E" },
            { "start": {"x": 9, "y": 9}, "destination": {"x": 0, "y": 0}, "heading": "S" }
        ] }"#;
        let config = Scenario::from_json_str(json).unwrap().config;
        assert_eq!(config.max_ticks, Some(50));
        assert_eq!(config.comm_radius, 2);
        assert_eq!(config.collision_radius, 1);
    }

    #[test]
    fn malformed_json_is_a_scenario_error() {
        let result = Scenario::from_json_str(r#"{ "aircraft": [] }"#);
        assert!(matches!(result, Err(SimError::Scenario(_))));

        let result = Scenario::from_json_str(r#"{ "aircraft": [
            { "start": {"x": 0, "y": 0}, "destination": {"x": 1, "y": 0}, "heading": "Q" },
            { "start": {"x": 5, "y": 0}, "destination": {"x": 0, "y": 0}, "heading": "W" }
        ] }"#);
        assert!(matches!(result, Err(SimError::Scenario(_))));
    }

    #[test]
    fn json_string_round_trip() {
        let scenario = Scenario::head_on();
        let text = scenario.to_json_string().unwrap();
        assert!(text.contains("\"heading\": \"S\""));
        assert_eq!(Scenario::from_json_str(&text).unwrap(), scenario);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HEAD_ON_JSON.as_bytes()).unwrap();
        let scenario = Scenario::load(file.path()).unwrap();
        assert_eq!(scenario, Scenario::head_on());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Scenario::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(SimError::Io(_))));
    }

    #[test]
    fn build_aircraft_assigns_ids_in_order() {
        let [first, second] = Scenario::head_on().build_aircraft();
        assert_eq!(first.id(), AgentId(0));
        assert_eq!(second.id(), AgentId(1));
        assert_eq!(first.heading(), Ok(Direction::South));
        assert_eq!(second.destination(), pos(0, -10));
    }

    #[test]
    fn random_is_seeded() {
        let a = Scenario::random(&mut SimRng::new(7), 20);
        let b = Scenario::random(&mut SimRng::new(7), 20);
        assert_eq!(a, b);
        for spec in &a.aircraft {
            assert!(spec.heading.is_some());
            for p in [spec.start, spec.destination] {
                assert!((-20..=20).contains(&p.x) && (-20..=20).contains(&p.y));
            }
        }
    }

    #[test]
    fn random_scenarios_run_under_a_cap() {
        for index in 0..50 {
            let mut scenario = Scenario::random(&mut SimRng::for_run(11, index), 10);
            scenario.config.max_ticks = Some(500);
            let mut sim = SimBuilder::from_scenario(scenario, GreedyAvoidance).build().unwrap();
            let outcome = sim.run(&mut NoopObserver).unwrap();
            assert!(outcome.final_tick <= Tick(500));
            assert_eq!(outcome.completed, sim.is_complete());
        }
    }
}

// ── Custom behavior models ───────────────────────────────────────────────────

#[cfg(test)]
mod model_tests {
    use atc_agent::AgentResult;
    use atc_behavior::{BehaviorModel, CANDIDATE_PAIRS, SimContext};

    use super::*;

    /// Never turns; collisions are left to chance.
    struct HoldCourse;

    impl BehaviorModel for HoldCourse {
        fn route(&self, a: &Aircraft, _ctx: &SimContext<'_>) -> AgentResult<Direction> {
            a.heading()
        }

        fn resolve(&self, a: &Aircraft, b: &Aircraft, _ctx: &SimContext<'_>) -> AgentResult<Resolution> {
            Ok(Resolution {
                headings:  [a.heading()?, b.heading()?],
                pair:      CANDIDATE_PAIRS[3],
                candidate: 3,
                resolved:  true,
            })
        }
    }

    #[test]
    fn hold_course_flies_through_each_other() {
        let mut sim = SimBuilder::new(SimConfig::default(), HoldCourse)
            .aircraft(
                aircraft(0, (0, 0), (10, 0), Direction::East),
                aircraft(1, (4, 0), (-10, 0), Direction::West),
            )
            .build()
            .unwrap();
        let mut recorder = Recorder::default();
        let outcome = sim.run(&mut recorder).unwrap();

        assert_eq!(outcome.collisions, 1);
        assert_eq!(recorder.reports[1].collision.map(|c| c.positions), Some([pos(2, 0), pos(2, 0)]));
        assert_eq!(outcome.arrivals, [Some(Tick(10)), Some(Tick(14))]);
        assert_eq!(outcome.final_tick, Tick(14));
    }

    #[test]
    fn boxed_model_drives_the_sim() {
        let model: Box<dyn BehaviorModel> = Box::new(GreedyAvoidance);
        let mut sim = SimBuilder::from_scenario(Scenario::head_on(), model).build().unwrap();
        let outcome = sim.run(&mut NoopObserver).unwrap();
        assert_eq!(outcome.final_tick, Tick(15));
        assert_eq!(outcome.collisions, 0);
    }

    #[test]
    fn config_radius_reaches_the_search() {
        // With collision radius 0 the nose-to-nose layout clears at once.
        let config = SimConfig { collision_radius: 0, ..SimConfig::default() };
        let mut sim = sim_with(
            aircraft(0, (0, 0), (0, 10), Direction::North),
            aircraft(1, (0, 1), (0, -10), Direction::South),
            config,
        );
        let report = sim.step(&mut NoopObserver).unwrap();
        assert!(report.mode.resolution().unwrap().resolved);
        assert_eq!(report.collision, None);
    }
}

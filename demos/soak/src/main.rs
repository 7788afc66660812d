//! soak — run many seeded random scenarios and report how the avoidance
//! logic holds up.
//!
//! Run `i` of a batch draws its layout from `SimRng::for_run(seed, i)`, so any
//! single run can be reproduced from the seed and its index.

use std::time::Instant;

use anyhow::{Result, ensure};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use atc_behavior::GreedyAvoidance;
use atc_core::SimRng;
use atc_sim::{NoopObserver, Scenario, SimBuilder};

#[derive(Parser)]
#[command(name = "soak", version, about = "Soak-test the avoidance logic on random scenarios")]
struct Args {
    /// Batch seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of scenarios to run.
    #[arg(long, default_value_t = 1_000)]
    runs: u64,

    /// Starts and destinations are drawn from [-extent, extent]².
    #[arg(long, default_value_t = 20)]
    extent: i32,

    /// Tick cap per run.
    #[arg(long, default_value_t = 10_000)]
    max_ticks: u64,
}

#[derive(Default)]
struct Totals {
    completed:       u64,
    capped:          u64,
    with_collision:  u64,
    collisions:      u64,
    unresolved:      u64,
    avoidance_ticks: u64,
    ticks:           u64,
    longest:         u64,
}

fn init_logging() {
    // Per-run collision warnings are noise at batch scale.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();
    ensure!(args.max_ticks > 0, "--max-ticks must be at least 1");

    println!("=== soak — rust_atc ===");
    println!(
        "Runs: {}  |  Seed: {}  |  Extent: ±{}  |  Tick cap: {}",
        args.runs, args.seed, args.extent, args.max_ticks
    );
    println!();

    let mut totals = Totals::default();
    let t0 = Instant::now();

    for index in 0..args.runs {
        let mut scenario = Scenario::random(&mut SimRng::for_run(args.seed, index), args.extent);
        scenario.config.max_ticks = Some(args.max_ticks);

        let mut sim = SimBuilder::from_scenario(scenario, GreedyAvoidance).build()?;
        let outcome = sim.run(&mut NoopObserver)?;
        debug!(run = index, ?outcome, "run finished");

        if outcome.completed {
            totals.completed += 1;
        } else {
            totals.capped += 1;
            warn!(run = index, "tick cap reached before both aircraft arrived");
        }
        if outcome.collisions > 0 {
            totals.with_collision += 1;
        }
        totals.collisions += outcome.collisions;
        totals.unresolved += outcome.unresolved;
        totals.avoidance_ticks += outcome.avoidance_ticks;
        totals.ticks += outcome.final_tick.0;
        totals.longest = totals.longest.max(outcome.final_tick.0);
    }

    let elapsed = t0.elapsed();
    let mean_ticks = if args.runs > 0 { totals.ticks as f64 / args.runs as f64 } else { 0.0 };

    println!("Batch complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    println!("{:<26} {:>10}", "Metric", "Value");
    println!("{}", "-".repeat(37));
    println!("{:<26} {:>10}", "completed", totals.completed);
    println!("{:<26} {:>10}", "hit tick cap", totals.capped);
    println!("{:<26} {:>10}", "runs with a collision", totals.with_collision);
    println!("{:<26} {:>10}", "collision events", totals.collisions);
    println!("{:<26} {:>10}", "unresolved searches", totals.unresolved);
    println!("{:<26} {:>10}", "avoidance ticks", totals.avoidance_ticks);
    println!("{:<26} {:>10.1}", "mean ticks per run", mean_ticks);
    println!("{:<26} {:>10}", "longest run (ticks)", totals.longest);

    Ok(())
}

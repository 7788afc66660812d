//! head_on — the canonical two-aircraft run.
//!
//! Flies the built-in head-on scenario (or one loaded from JSON) to
//! completion and prints the classic trace on stdout:
//!
//! ```text
//! Plane 1: (1, -1) Plane 2: (-1, 1)
//! ...
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see every tick's decision.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use atc_behavior::GreedyAvoidance;
use atc_output::ConsoleTrace;
use atc_sim::{Scenario, SimBuilder};

#[derive(Parser)]
#[command(name = "head_on", version, about = "Run a two-aircraft scenario and print its trace")]
struct Args {
    /// Scenario JSON file; defaults to the built-in head-on layout.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Stop after this many ticks.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Print the scenario as JSON and exit.
    #[arg(long)]
    dump_scenario: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut scenario = match &args.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::head_on(),
    };
    if args.max_ticks.is_some() {
        scenario.config.max_ticks = args.max_ticks;
    }

    if args.dump_scenario {
        println!("{}", scenario.to_json_string()?);
        return Ok(());
    }

    let mut sim = SimBuilder::from_scenario(scenario, GreedyAvoidance).build()?;
    info!(
        first = %sim.aircraft[0].position(),
        second = %sim.aircraft[1].position(),
        "starting run"
    );

    let mut trace = ConsoleTrace::stdout();
    let outcome = sim.run(&mut trace)?;
    if let Some(e) = trace.take_error() {
        return Err(e).context("writing trace to stdout");
    }

    if !outcome.completed {
        eprintln!("stopped at tick {} before both aircraft arrived", outcome.final_tick.0);
    }
    Ok(())
}

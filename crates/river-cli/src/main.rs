//! Driver for the river ecosystem simulator.
//!
//! Builds a random river of the requested length and prints one
//! snapshot per cycle. Snapshots go to stdout; diagnostics go through
//! `tracing`.

use anyhow::Result;
use clap::Parser;
use river_core::RiverConfig;
use river_world::Simulation;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "river-cli", version, about = "River ecosystem simulator")]
struct Args {
    /// Number of cells in the river
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u64).range(1..))]
    length: u64,

    /// Number of cycles to simulate
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    cycles: u64,

    /// RNG seed; a random seed is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let config = RiverConfig {
        length: args.length as usize,
        cycles: args.cycles,
        seed,
    };
    info!(
        length = config.length,
        cycles = config.cycles,
        seed = config.seed,
        "creating a random river"
    );

    let mut simulation = Simulation::new(config)?;
    println!("Initial river:");
    println!("{}", simulation.river());

    for cycle in 1..=args.cycles {
        simulation.step();
        println!("After cycle {cycle}");
        println!("{}", simulation.river());
    }

    Ok(())
}

pub mod commands;
pub mod formatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "duress",
    version,
    about = "Controlled resource-exhaustion harness",
    long_about = "Duress deliberately consumes time, CPU, memory, or disk I/O for a bounded \
                  interval, so you can watch how a supervisor, container runtime, or pipeline \
                  reacts to degraded conditions. One stressor per invocation; every stressor \
                  releases what it took before exiting."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Validate and preview the stressor without any side effect
    #[arg(short = 'n', long, global = true)]
    pub dry_run: bool,

    /// Report progress while the stressor runs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with operator defaults
    #[arg(short = 'c', long, env = "DURESS_CONFIG", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Block for a fixed duration, then exit with a chosen code
    Wait(commands::wait::WaitArgs),

    /// Saturate CPUs with deadline-bound busy workers
    Burn(commands::burn::BurnArgs),

    /// Commit a target amount of memory, hold it, release it
    Spike(commands::spike::SpikeArgs),

    /// Hammer a file with write-then-read-back cycles
    Churn(commands::churn::ChurnArgs),

    /// Exit immediately with a chosen code
    ExitWith(commands::exit::ExitArgs),

    /// Show the host resources available to stressors
    Probe(commands::probe::ProbeArgs),
}

use crate::cli::commands::{dispatch, CommandContext};
use crate::core::{ChurnConfig, StressorConfig};
use crate::ExitOutcome;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ChurnArgs {
    /// Number of write-then-read-back rounds
    #[arg(value_name = "ROUNDS")]
    pub iterations: u64,

    /// Payload size per round, in bytes
    #[arg(value_name = "BYTES")]
    pub bytes_per_iteration: u64,

    /// Churn this file instead of a generated temp path (never deleted)
    #[arg(short = 'f', long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub fn run(args: ChurnArgs, ctx: &CommandContext) -> anyhow::Result<ExitOutcome> {
    let config = StressorConfig::Churn(ChurnConfig {
        iterations: args.iterations,
        bytes_per_iteration: args.bytes_per_iteration,
        file: args.file,
    });
    dispatch(&config, ctx)
}

use crate::cli::commands::{dispatch, CommandContext};
use crate::core::{StressorConfig, WaitConfig};
use crate::ExitOutcome;
use clap::Args;

#[derive(Args, Debug)]
pub struct WaitArgs {
    /// How long to block, in milliseconds
    #[arg(value_name = "MS")]
    pub duration_ms: u64,

    /// Exit code to yield once the wait elapses
    #[arg(short = 'e', long, default_value = "0")]
    pub exit_code: u64,
}

pub fn run(args: WaitArgs, ctx: &CommandContext) -> anyhow::Result<ExitOutcome> {
    let config = StressorConfig::Wait(WaitConfig {
        duration_ms: args.duration_ms,
        exit_code: args.exit_code,
    });
    dispatch(&config, ctx)
}

use crate::cli::commands::{dispatch, CommandContext};
use crate::core::{ExitConfig, StressorConfig};
use crate::ExitOutcome;
use clap::Args;

#[derive(Args, Debug)]
pub struct ExitArgs {
    /// Exit code to yield
    #[arg(value_name = "CODE")]
    pub code: u64,
}

pub fn run(args: ExitArgs, ctx: &CommandContext) -> anyhow::Result<ExitOutcome> {
    let config = StressorConfig::ExitWith(ExitConfig { code: args.code });
    dispatch(&config, ctx)
}

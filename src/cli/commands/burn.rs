use crate::cli::commands::{dispatch, CommandContext};
use crate::core::{BurnConfig, StressorConfig};
use crate::ExitOutcome;
use clap::Args;

#[derive(Args, Debug)]
pub struct BurnArgs {
    /// How long the workers run, in seconds
    #[arg(value_name = "SECONDS")]
    pub seconds: u64,

    /// Worker count (defaults to one per logical core)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,
}

pub fn run(args: BurnArgs, ctx: &CommandContext) -> anyhow::Result<ExitOutcome> {
    let config = StressorConfig::Burn(BurnConfig {
        seconds: args.seconds,
        workers: args.workers.or(ctx.defaults.workers),
    });
    dispatch(&config, ctx)
}

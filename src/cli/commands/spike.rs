use crate::cli::commands::{dispatch, CommandContext};
use crate::core::{SpikeConfig, StressorConfig};
use crate::ExitOutcome;
use clap::Args;

#[derive(Args, Debug)]
pub struct SpikeArgs {
    /// Target memory to commit, in MiB
    #[arg(value_name = "MIB")]
    pub megabytes: u64,

    /// Seconds to hold the memory once committed
    #[arg(short = 's', long)]
    pub hold_seconds: Option<u64>,
}

pub fn run(args: SpikeArgs, ctx: &CommandContext) -> anyhow::Result<ExitOutcome> {
    let config = StressorConfig::Spike(SpikeConfig {
        megabytes: args.megabytes,
        hold_seconds: args.hold_seconds.unwrap_or(ctx.defaults.hold_seconds),
    });
    dispatch(&config, ctx)
}

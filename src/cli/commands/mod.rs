pub mod burn;
pub mod churn;
pub mod exit;
pub mod probe;
pub mod spike;
pub mod wait;

use crate::cli::formatter;
use crate::cli::Cli;
use crate::core::config::{self, Defaults};
use crate::core::outcome::{ExitOutcome, RunMode};
use crate::core::StressorConfig;
use indicatif::{ProgressBar, ProgressStyle};

/// Everything a command needs beyond its own arguments: the run mode and
/// the operator defaults from the optional config file.
pub struct CommandContext {
    pub mode: RunMode,
    pub defaults: Defaults,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let defaults = match &cli.config {
            Some(path) => config::load_defaults(path)?,
            None => Defaults::default(),
        };

        Ok(Self {
            mode: RunMode {
                dry_run: cli.dry_run,
                verbose: cli.verbose,
            },
            defaults,
        })
    }
}

/// Hand a validated configuration to the engine and render the result.
///
/// Dry-run prints the configuration it would have executed and nothing
/// else. Verbose attaches a progress bar to the stressors that report
/// progress (spike in MiB, churn in rounds).
pub fn dispatch(config: &StressorConfig, ctx: &CommandContext) -> anyhow::Result<ExitOutcome> {
    if ctx.mode.dry_run {
        formatter::print_preview(&serde_json::to_string(config)?);
        return Ok(crate::core::run(config, ctx.mode, None)?);
    }

    let bar = progress_bar_for(config, ctx.mode);
    let outcome = match &bar {
        Some(bar) => {
            let hook = |done: u64| bar.set_position(done);
            crate::core::run(config, ctx.mode, Some(&hook))?
        }
        None => crate::core::run(config, ctx.mode, None)?,
    };
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    // A nonzero code here is a configured outcome (wait/exit-with), not a
    // failure; failures take the Err path and never reach this print.
    if let Some(status) = &outcome.status {
        formatter::print_success(status);
    }
    Ok(outcome)
}

fn progress_bar_for(config: &StressorConfig, mode: RunMode) -> Option<ProgressBar> {
    if !mode.verbose {
        return None;
    }

    let (len, template) = match config {
        StressorConfig::Spike(c) => (c.megabytes, "{bar:40.cyan/blue} {pos}/{len} MiB committed"),
        StressorConfig::Churn(c) => (c.iterations, "{bar:40.cyan/blue} {pos}/{len} rounds"),
        _ => return None,
    };

    let bar = ProgressBar::new(len);
    bar.set_style(ProgressStyle::default_bar().template(template).unwrap());
    Some(bar)
}

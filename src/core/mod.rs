pub mod burn;
pub mod churn;
pub mod config;
pub mod outcome;
pub mod spike;
pub mod wait;

use crate::core::outcome::{ExitOutcome, RunMode};
use crate::Result;
use serde::Serialize;

pub use burn::BurnConfig;
pub use churn::ChurnConfig;
pub use spike::SpikeConfig;
pub use wait::WaitConfig;

/// Exit-with parameters: yield a code without consuming anything.
#[derive(Debug, Clone, Serialize)]
pub struct ExitConfig {
    pub code: u64,
}

/// A validated stressor configuration, discriminated by kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "stressor", rename_all = "kebab-case")]
pub enum StressorConfig {
    Wait(WaitConfig),
    Burn(BurnConfig),
    Spike(SpikeConfig),
    Churn(ChurnConfig),
    ExitWith(ExitConfig),
}

/// Route a validated configuration to its stressor and forward the outcome
/// unchanged. Component failures propagate as-is; the binary maps them to
/// exit codes.
pub fn run(
    config: &StressorConfig,
    mode: RunMode,
    on_progress: Option<&dyn Fn(u64)>,
) -> Result<ExitOutcome> {
    match config {
        StressorConfig::Wait(c) => wait::wait(c, mode),
        StressorConfig::Burn(c) => burn::burn(c, mode),
        StressorConfig::Spike(c) => spike::spike(c, mode, on_progress),
        StressorConfig::Churn(c) => churn::churn(c, mode, on_progress),
        StressorConfig::ExitWith(c) => exit_with(c, mode),
    }
}

pub fn exit_with(config: &ExitConfig, mode: RunMode) -> Result<ExitOutcome> {
    if mode.dry_run {
        return Ok(ExitOutcome::success());
    }
    let code = ExitOutcome::truncate_code(config.code);
    Ok(ExitOutcome::with_status(code, format!("exiting {code}")))
}

use crate::core::outcome::{ExitOutcome, RunMode};
use crate::Result;
use serde::Serialize;
use std::thread;
use std::time::Duration;

/// Clock waiter parameters. A zero duration is a legal no-op.
#[derive(Debug, Clone, Serialize)]
pub struct WaitConfig {
    pub duration_ms: u64,
    pub exit_code: u64,
}

/// Block the calling thread for the configured duration, then yield the
/// configured exit code. Platform scheduling jitter is acceptable.
pub fn wait(config: &WaitConfig, mode: RunMode) -> Result<ExitOutcome> {
    if mode.dry_run {
        return Ok(ExitOutcome::success());
    }

    if config.duration_ms > 0 {
        tracing::debug!(ms = config.duration_ms, "blocking");
        thread::sleep(Duration::from_millis(config.duration_ms));
    }

    let code = ExitOutcome::truncate_code(config.exit_code);
    Ok(ExitOutcome::with_status(
        code,
        format!("waited {} ms, exiting {}", config.duration_ms, code),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn zero_wait_returns_code_immediately() {
        let config = WaitConfig {
            duration_ms: 0,
            exit_code: 7,
        };
        let start = Instant::now();
        let outcome = wait(&config, RunMode::execute()).unwrap();
        assert_eq!(outcome.code, 7);
        assert!(start.elapsed().as_millis() < 100);
    }

    #[test]
    fn dry_run_skips_sleep_and_code() {
        let config = WaitConfig {
            duration_ms: 60_000,
            exit_code: 9,
        };
        let start = Instant::now();
        let outcome = wait(&config, RunMode::dry_run()).unwrap();
        assert_eq!(outcome.code, 0);
        assert!(start.elapsed().as_millis() < 100);
    }

    #[test]
    fn wide_exit_code_truncates() {
        let config = WaitConfig {
            duration_ms: 0,
            exit_code: 263,
        };
        assert_eq!(wait(&config, RunMode::execute()).unwrap().code, 7);
    }
}

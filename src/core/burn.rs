use crate::core::outcome::{ExitOutcome, RunMode};
use crate::{DuressError, Result};
use serde::Serialize;
use std::thread;
use std::time::{Duration, Instant};

/// Worker pool parameters. `workers` unset means one worker per logical
/// core; an explicit 0 is rejected before any thread is spawned.
#[derive(Debug, Clone, Serialize)]
pub struct BurnConfig {
    pub seconds: u64,
    pub workers: Option<usize>,
}

/// Arithmetic steps between deadline checks. One batch bounds the pool's
/// overshoot past the deadline, independent of worker count.
const CHECK_BATCH: u32 = 4096;

/// Saturate `workers` logical cores until a shared deadline fires.
///
/// Every worker receives the deadline by value at spawn time and runs an
/// allocation-free arithmetic sink, re-checking the deadline once per
/// batch. The pool joins every worker before returning; a worker observing
/// the deadline is the expected exit, while a panicked worker surfaces as
/// `WorkerPanic` once all workers have been joined.
pub fn burn(config: &BurnConfig, mode: RunMode) -> Result<ExitOutcome> {
    let workers = match config.workers {
        Some(0) => {
            return Err(DuressError::Config(
                "worker count must be at least 1".to_string(),
            ))
        }
        Some(n) => n,
        None => num_cpus::get(),
    };

    if mode.dry_run {
        return Ok(ExitOutcome::success());
    }

    let deadline = Instant::now() + Duration::from_secs(config.seconds);
    tracing::debug!(workers, seconds = config.seconds, "spawning worker pool");

    let mut panicked = 0usize;
    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|id| scope.spawn(move || spin_until(deadline, id as u64)))
            .collect();
        for handle in handles {
            if handle.join().is_err() {
                panicked += 1;
            }
        }
    });

    if panicked > 0 {
        return Err(DuressError::WorkerPanic(format!(
            "{panicked} of {workers} workers died before the deadline"
        )));
    }

    Ok(ExitOutcome::with_status(
        0,
        format!("burned {} workers for {} s", workers, config.seconds),
    ))
}

/// Allocation-free CPU sink: a linear-congruential update whose result is
/// kept alive with `black_box` so the loop is not optimized away. The
/// arithmetic carries no meaning beyond consuming cycles.
fn spin_until(deadline: Instant, seed: u64) {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1);
    while Instant::now() < deadline {
        for _ in 0..CHECK_BATCH {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
        }
        std::hint::black_box(state);
    }
}

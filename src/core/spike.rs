use crate::core::outcome::{ExitOutcome, RunMode};
use crate::{DuressError, Result};
use serde::Serialize;
use std::thread;
use std::time::Duration;

/// Allocation granularity. The final chunk is sized to the remainder.
pub const CHUNK_BYTES: usize = 8 * 1024 * 1024;

/// Touch stride; one write per page forces the platform to commit it
/// instead of leaving a lazily-mapped reservation.
const PAGE_BYTES: usize = 4096;

const MIB: usize = 1024 * 1024;

/// Allocation manager parameters. Zero megabytes is a legal no-op.
#[derive(Debug, Clone, Serialize)]
pub struct SpikeConfig {
    pub megabytes: u64,
    pub hold_seconds: u64,
}

/// Commit `megabytes` of memory in fixed chunks, optionally hold it, then
/// release everything before returning.
///
/// The chunk list is the sole owner of the buffers; dropping it is the
/// only release mechanism, on the success and the failure path alike. A
/// refused allocation is a legitimate chaos outcome and surfaces as
/// `MemoryExhausted`, never retried. `on_progress` is a synchronous
/// observation hook called with cumulative MiB after each chunk.
pub fn spike(
    config: &SpikeConfig,
    mode: RunMode,
    on_progress: Option<&dyn Fn(u64)>,
) -> Result<ExitOutcome> {
    if mode.dry_run {
        return Ok(ExitOutcome::success());
    }

    // A target beyond the address space saturates; the allocator will
    // refuse long before it is reached.
    let target = usize::try_from(config.megabytes.saturating_mul(MIB as u64)).unwrap_or(usize::MAX);

    let snapshot = crate::utils::system::HostSnapshot::capture();
    tracing::debug!(
        available = snapshot.available_memory_bytes,
        target,
        "committing memory"
    );

    let mut chunks: Vec<Vec<u8>> = Vec::new();
    let mut committed = 0usize;

    while committed < target {
        let len = CHUNK_BYTES.min(target - committed);
        match commit_chunk(len) {
            Ok(chunk) => chunks.push(chunk),
            Err(_) => {
                // Release the partial acquisition before surfacing the
                // refusal; nothing stays referenced past this point.
                let committed_mib = (committed / MIB) as u64;
                drop(chunks);
                return Err(DuressError::MemoryExhausted {
                    requested_mib: config.megabytes,
                    committed_mib,
                });
            }
        }
        committed += len;
        if let Some(progress) = on_progress {
            progress((committed / MIB) as u64);
        }
    }

    if config.hold_seconds > 0 {
        tracing::debug!(seconds = config.hold_seconds, "holding");
        thread::sleep(Duration::from_secs(config.hold_seconds));
    }

    drop(chunks);
    Ok(ExitOutcome::with_status(
        0,
        format!(
            "committed {} MiB, held {} s, released",
            config.megabytes, config.hold_seconds
        ),
    ))
}

/// Acquire one chunk fallibly and touch one byte per page. The volatile
/// write defeats both lazy commitment and dead-store elimination.
fn commit_chunk(len: usize) -> std::result::Result<Vec<u8>, std::collections::TryReserveError> {
    let mut chunk: Vec<u8> = Vec::new();
    chunk.try_reserve_exact(len)?;
    chunk.resize(len, 0);
    for offset in (0..len).step_by(PAGE_BYTES) {
        unsafe {
            chunk.as_mut_ptr().add(offset).write_volatile(1);
        }
    }
    Ok(chunk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn dry_run_allocates_nothing() {
        let config = SpikeConfig {
            megabytes: 1 << 40,
            hold_seconds: 60,
        };
        let outcome = spike(&config, RunMode::dry_run(), None).unwrap();
        assert_eq!(outcome.code, 0);
    }

    #[test]
    fn zero_target_is_a_noop() {
        let config = SpikeConfig {
            megabytes: 0,
            hold_seconds: 0,
        };
        let seen = Mutex::new(Vec::new());
        let hook = |mib: u64| seen.lock().unwrap().push(mib);
        let outcome = spike(&config, RunMode::execute(), Some(&hook)).unwrap();
        assert_eq!(outcome.code, 0);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn progress_reports_cumulative_mib_per_chunk() {
        let config = SpikeConfig {
            megabytes: 16,
            hold_seconds: 0,
        };
        let seen = Mutex::new(Vec::new());
        let hook = |mib: u64| seen.lock().unwrap().push(mib);
        let outcome = spike(&config, RunMode::execute(), Some(&hook)).unwrap();
        assert_eq!(outcome.code, 0);
        assert_eq!(*seen.lock().unwrap(), vec![8, 16]);
    }

    #[test]
    fn final_chunk_covers_the_remainder() {
        let config = SpikeConfig {
            megabytes: 12,
            hold_seconds: 0,
        };
        let seen = Mutex::new(Vec::new());
        let hook = |mib: u64| seen.lock().unwrap().push(mib);
        spike(&config, RunMode::execute(), Some(&hook)).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![8, 12]);
    }
}

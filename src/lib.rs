pub mod cli;
pub mod core;
pub mod utils;

pub use crate::core::outcome::{ExitOutcome, RunMode};
pub use crate::core::StressorConfig;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuressError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Allocation refused after {committed_mib} of {requested_mib} MiB")]
    MemoryExhausted { requested_mib: u64, committed_mib: u64 },

    #[error("Worker failure: {0}")]
    WorkerPanic(String),
}

pub type Result<T> = std::result::Result<T, DuressError>;

use crate::core::outcome::{ExitOutcome, RunMode};
use crate::Result;
use rand::RngCore;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// I/O churn parameters. Zero iterations or a zero-byte payload are legal
/// no-ops; an unset `file` means a generated temp path owned by this run.
#[derive(Debug, Clone, Serialize)]
pub struct ChurnConfig {
    pub iterations: u64,
    pub bytes_per_iteration: u64,
    pub file: Option<PathBuf>,
}

/// The file being churned. An owned temp file is deleted on every exit
/// path when this drops; a caller-supplied path is never deleted.
enum Target {
    Owned(NamedTempFile),
    Caller(File),
}

impl Target {
    fn file(&mut self) -> &mut File {
        match self {
            Target::Owned(temp) => temp.as_file_mut(),
            Target::Caller(file) => file,
        }
    }
}

/// Write a pseudo-random payload to a file and read it back, for a fixed
/// number of rounds.
///
/// The payload is generated once; each round rewrites the file from the
/// start and reads it back fully. The read result is discarded — its
/// purpose is to force the I/O path — but the byte count is checked
/// against the written length. Any I/O error aborts the remaining rounds;
/// owned-temp cleanup still runs. `on_progress` is called with the number
/// of rounds completed.
pub fn churn(
    config: &ChurnConfig,
    mode: RunMode,
    on_progress: Option<&dyn Fn(u64)>,
) -> Result<ExitOutcome> {
    if mode.dry_run {
        return Ok(ExitOutcome::success());
    }

    let mut target = match &config.file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "churning caller-owned file");
            Target::Caller(
                OpenOptions::new()
                    .read(true)
                    .write(true)
                    .create(true)
                    .truncate(false)
                    .open(path)?,
            )
        }
        None => {
            let temp = NamedTempFile::new()?;
            tracing::debug!(path = %temp.path().display(), "churning owned temp file");
            Target::Owned(temp)
        }
    };

    let mut payload = vec![0u8; config.bytes_per_iteration as usize];
    rand::thread_rng().fill_bytes(&mut payload);
    let mut scratch = Vec::with_capacity(payload.len());

    let file = target.file();
    for round in 0..config.iterations {
        file.seek(SeekFrom::Start(0))?;
        file.set_len(0)?;
        file.write_all(&payload)?;
        file.flush()?;

        file.seek(SeekFrom::Start(0))?;
        scratch.clear();
        let read = file.read_to_end(&mut scratch)?;
        if read != payload.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("read {read} of {} bytes back", payload.len()),
            )
            .into());
        }

        if let Some(progress) = on_progress {
            progress(round + 1);
        }
    }

    Ok(ExitOutcome::with_status(
        0,
        format!(
            "churned {} x {} bytes",
            config.iterations, config.bytes_per_iteration
        ),
    ))
}

use serde::Serialize;

/// Orthogonal execution flags attached to every stressor configuration.
///
/// Dry-run previews the configuration with zero observable side effects:
/// no sleep, no allocation, no file write, no CPU loop. Verbose only
/// controls whether progress is surfaced through the reporting hook; it
/// never changes stressor behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMode {
    pub dry_run: bool,
    pub verbose: bool,
}

impl RunMode {
    pub fn execute() -> Self {
        Self::default()
    }

    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            verbose: false,
        }
    }
}

/// Structured result of a single stressor invocation.
///
/// Exactly one of these is produced per run. The binary forwards `code`
/// unchanged as the process exit status; `status` is a human-readable
/// one-liner the adapter may render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExitOutcome {
    pub code: u8,
    pub status: Option<String>,
}

impl ExitOutcome {
    pub fn success() -> Self {
        Self {
            code: 0,
            status: None,
        }
    }

    pub fn with_status(code: u8, status: impl Into<String>) -> Self {
        Self {
            code,
            status: Some(status.into()),
        }
    }

    /// Process exit codes occupy [0, 255]; wider values keep the low byte.
    pub fn truncate_code(code: u64) -> u8 {
        (code & 0xff) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_keeps_low_byte() {
        assert_eq!(ExitOutcome::truncate_code(0), 0);
        assert_eq!(ExitOutcome::truncate_code(255), 255);
        assert_eq!(ExitOutcome::truncate_code(256), 0);
        assert_eq!(ExitOutcome::truncate_code(263), 7);
    }
}

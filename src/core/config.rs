use serde::{Deserialize, Serialize};
use std::path::Path;

/// Operator defaults, loaded from a TOML file via `--config` or the
/// DURESS_CONFIG environment variable. Command-line flags always override
/// these; these override the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Seconds a memory spike holds its chunks once committed
    pub hold_seconds: u64,
    /// Worker count for CPU burns (unset = one per logical core)
    pub workers: Option<usize>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            hold_seconds: 5,
            workers: None,
        }
    }
}

pub fn load_defaults<P: AsRef<Path>>(path: P) -> Result<Defaults, crate::DuressError> {
    let contents = std::fs::read_to_string(path)?;
    let defaults: Defaults = toml::from_str(&contents)
        .map_err(|e| crate::DuressError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(defaults)
}

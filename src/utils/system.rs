//! Host introspection for sizing stressors

use serde::Serialize;
use std::path::PathBuf;
use sysinfo::System;

/// Point-in-time snapshot of the resources a stressor can draw on.
#[derive(Debug, Clone, Serialize)]
pub struct HostSnapshot {
    pub logical_cores: usize,
    pub total_memory_bytes: u64,
    pub available_memory_bytes: u64,
    pub temp_dir: PathBuf,
}

impl HostSnapshot {
    pub fn capture() -> Self {
        let system = System::new_all();

        Self {
            logical_cores: num_cpus::get(),
            total_memory_bytes: system.total_memory(),
            available_memory_bytes: system.available_memory(),
            temp_dir: std::env::temp_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_plausible() {
        let snapshot = HostSnapshot::capture();
        assert!(snapshot.logical_cores >= 1);
        assert!(snapshot.total_memory_bytes >= snapshot.available_memory_bytes);
    }
}

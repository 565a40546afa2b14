use sysinfo::System;

use super::round2;

const BYTES_PER_MB: f64 = 1_048_576.0;

pub struct MemoryReader {
    system: System,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    pub fn read(&mut self) -> MemorySnapshot {
        self.system.refresh_memory();
        MemorySnapshot::from_bytes(self.system.total_memory(), self.system.free_memory())
    }
}

impl Default for MemoryReader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct MemorySnapshot {
    pub total_mb: f64,
    pub used_mb: f64,
    pub free_mb: f64,
    pub percent_used: f64,
}

impl MemorySnapshot {
    /// Builds the snapshot from raw byte counts. Used capacity is derived
    /// as total minus free; percent used is 0 when total is 0.
    pub fn from_bytes(total: u64, free: u64) -> Self {
        let total_mb = round2(total as f64 / BYTES_PER_MB);
        let free_mb = round2(free as f64 / BYTES_PER_MB);
        let used_mb = round2(total_mb - free_mb);

        let percent_used = if total_mb == 0.0 {
            0.0
        } else {
            round2(used_mb / total_mb * 100.0)
        };

        Self {
            total_mb,
            used_mb,
            free_mb,
            percent_used,
        }
    }
}

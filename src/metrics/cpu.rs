use std::thread;
use std::time::Duration;

use sysinfo::System;

use crate::error::{Error, Result};
use super::round2;

/// Samples global processor utilization over a fixed interval.
pub struct CpuReader {
    system: System,
}

impl CpuReader {
    pub fn new() -> Self {
        let mut system = System::new();
        // Baseline refresh; utilization is the delta against the next one.
        system.refresh_cpu_usage();
        Self { system }
    }

    /// Waits `interval`, refreshes, and returns the utilization percentage
    /// over the window, rounded to 2 decimals. A host with no visible CPU
    /// counters is a fatal error, not a zero reading.
    pub fn sample(&mut self, interval: Duration) -> Result<f64> {
        if self.system.cpus().is_empty() {
            return Err(Error::Metrics("no CPU counters available".to_string()));
        }

        thread::sleep(interval);
        self.system.refresh_cpu_usage();

        Ok(round2(self.system.global_cpu_usage() as f64))
    }
}

impl Default for CpuReader {
    fn default() -> Self {
        Self::new()
    }
}

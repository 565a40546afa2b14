use std::thread;
use std::time::Duration;

use sysinfo::Networks;

use super::round2;

/// Measures aggregate throughput across all interfaces over a fixed
/// interval.
pub struct NetworkReader {
    networks: Networks,
}

impl NetworkReader {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
        }
    }

    /// Re-baselines the interface counters, waits `interval`, refreshes,
    /// and converts the byte delta across all interfaces (received +
    /// transmitted) to megabits per second. The delta covers exactly the
    /// slept window; traffic before the call is discarded with the stale
    /// baseline. A host with no interface counters reads as 0, never an
    /// error.
    pub fn sample(&mut self, interval: Duration) -> f64 {
        // Counters accumulate since the previous refresh, so the window
        // must open here, not at construction.
        self.networks.refresh();
        thread::sleep(interval);
        self.networks.refresh();

        let bytes: u64 = self
            .networks
            .iter()
            .map(|(_, network)| network.received() + network.transmitted())
            .sum();

        mbps_over(bytes, interval)
    }
}

impl Default for NetworkReader {
    fn default() -> Self {
        Self::new()
    }
}

/// `bytes` transferred over `interval` as megabits/sec, rounded to 2
/// decimals. A zero interval reads as 0 rather than dividing by it.
fn mbps_over(bytes: u64, interval: Duration) -> f64 {
    let secs = interval.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }
    round2(bytes as f64 / secs * 8.0 / 1_000_000.0)
}

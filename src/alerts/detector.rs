use crate::config::Thresholds;
use crate::metrics::Sample;

#[derive(Debug, Clone, PartialEq)]
pub enum AlertKind {
    Cpu,
    Memory,
    DiskFree { drive: String },
    Network,
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub value: f64,
    pub threshold: f64,
    pub message: String,
}

/// Pure threshold evaluation; writing the triggered alerts anywhere is the
/// caller's business.
pub struct AlertDetector {
    thresholds: Thresholds,
}

impl AlertDetector {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// All comparisons are inclusive at the boundary: a reading exactly at
    /// its threshold triggers. Disk volumes are evaluated independently, so
    /// one run can produce several disk alerts.
    pub fn evaluate(&self, sample: &Sample) -> Vec<Alert> {
        let mut alerts = Vec::new();

        if sample.cpu_percent >= self.thresholds.cpu_warn_percent {
            alerts.push(Alert {
                kind: AlertKind::Cpu,
                value: sample.cpu_percent,
                threshold: self.thresholds.cpu_warn_percent,
                message: format!(
                    "CPU usage at {}% (threshold: {}%)",
                    sample.cpu_percent, self.thresholds.cpu_warn_percent
                ),
            });
        }

        if sample.memory.percent_used >= self.thresholds.mem_warn_percent {
            alerts.push(Alert {
                kind: AlertKind::Memory,
                value: sample.memory.percent_used,
                threshold: self.thresholds.mem_warn_percent,
                message: format!(
                    "Memory usage at {}% (threshold: {}%)",
                    sample.memory.percent_used, self.thresholds.mem_warn_percent
                ),
            });
        }

        for disk in &sample.disks {
            if disk.free_gb <= self.thresholds.disk_free_warn_gb {
                alerts.push(Alert {
                    kind: AlertKind::DiskFree {
                        drive: disk.name.clone(),
                    },
                    value: disk.free_gb,
                    threshold: self.thresholds.disk_free_warn_gb,
                    message: format!(
                        "Drive {} free space at {} GB (threshold: {} GB)",
                        disk.name, disk.free_gb, self.thresholds.disk_free_warn_gb
                    ),
                });
            }
        }

        if sample.net_mbps >= self.thresholds.net_warn_mbps {
            alerts.push(Alert {
                kind: AlertKind::Network,
                value: sample.net_mbps,
                threshold: self.thresholds.net_warn_mbps,
                message: format!(
                    "Network throughput at {} Mbps (threshold: {} Mbps)",
                    sample.net_mbps, self.thresholds.net_warn_mbps
                ),
            });
        }

        alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{DiskSnapshot, MemorySnapshot};
    use chrono::Local;

    fn thresholds() -> Thresholds {
        Thresholds {
            cpu_warn_percent: 90.0,
            mem_warn_percent: 90.0,
            disk_free_warn_gb: 5.0,
            net_warn_mbps: 100.0,
        }
    }

    fn disk(name: &str, free_gb: f64) -> DiskSnapshot {
        DiskSnapshot {
            name: name.to_string(),
            total_gb: 100.0,
            used_gb: 100.0 - free_gb,
            free_gb,
            percent_used: 100.0 - free_gb,
        }
    }

    fn sample(cpu: f64, mem_pct: f64, disks: Vec<DiskSnapshot>, net: f64) -> Sample {
        Sample {
            taken_at: Local::now(),
            cpu_percent: cpu,
            memory: MemorySnapshot {
                total_mb: 16384.0,
                used_mb: 16384.0 * mem_pct / 100.0,
                free_mb: 16384.0 * (100.0 - mem_pct) / 100.0,
                percent_used: mem_pct,
            },
            disks,
            net_mbps: net,
        }
    }

    #[test]
    fn test_cpu_boundary_is_inclusive() {
        let detector = AlertDetector::new(thresholds());

        let at_boundary = detector.evaluate(&sample(90.0, 0.0, Vec::new(), 0.0));
        assert_eq!(at_boundary.len(), 1);
        assert_eq!(at_boundary[0].kind, AlertKind::Cpu);
        assert!(at_boundary[0].message.contains("CPU usage at 90%"));

        let below = detector.evaluate(&sample(89.0, 0.0, Vec::new(), 0.0));
        assert!(below.is_empty());
    }

    #[test]
    fn test_memory_boundary_is_inclusive() {
        let detector = AlertDetector::new(thresholds());
        assert_eq!(detector.evaluate(&sample(0.0, 90.0, Vec::new(), 0.0)).len(), 1);
        assert!(detector.evaluate(&sample(0.0, 89.99, Vec::new(), 0.0)).is_empty());
    }

    #[test]
    fn test_disk_boundary_is_inclusive_at_exact_free() {
        let detector = AlertDetector::new(thresholds());

        let exact = detector.evaluate(&sample(0.0, 0.0, vec![disk("/", 5.0)], 0.0));
        assert_eq!(exact.len(), 1);
        assert_eq!(
            exact[0].kind,
            AlertKind::DiskFree {
                drive: "/".to_string()
            }
        );

        let above = detector.evaluate(&sample(0.0, 0.0, vec![disk("/", 5.01)], 0.0));
        assert!(above.is_empty());
    }

    #[test]
    fn test_each_disk_evaluated_independently() {
        let detector = AlertDetector::new(thresholds());
        let alerts = detector.evaluate(&sample(
            0.0,
            0.0,
            vec![disk("/", 2.0), disk("/home", 50.0), disk("/data", 4.99)],
            0.0,
        ));
        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| matches!(a.kind, AlertKind::DiskFree { .. })));
    }

    #[test]
    fn test_network_boundary_is_inclusive() {
        let detector = AlertDetector::new(thresholds());
        assert_eq!(detector.evaluate(&sample(0.0, 0.0, Vec::new(), 100.0)).len(), 1);
        assert!(detector.evaluate(&sample(0.0, 0.0, Vec::new(), 99.99)).is_empty());
    }

    #[test]
    fn test_quiet_sample_produces_no_alerts() {
        let detector = AlertDetector::new(thresholds());
        let alerts = detector.evaluate(&sample(12.5, 43.2, vec![disk("/", 120.0)], 0.5));
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_all_four_conditions_can_fire_together() {
        let detector = AlertDetector::new(thresholds());
        let alerts = detector.evaluate(&sample(95.0, 95.0, vec![disk("/", 1.0)], 250.0));
        assert_eq!(alerts.len(), 4);
    }
}

pub mod cpu;
pub mod memory;
pub mod disk;
pub mod network;

pub use cpu::CpuReader;
pub use memory::{MemoryReader, MemorySnapshot};
pub use disk::{DiskReader, DiskSnapshot};
pub use network::NetworkReader;

use chrono::{DateTime, Local};

/// ISO-8601-sortable form shared by the CSV rows and the alert log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// All metric values captured by a single run.
#[derive(Debug, Clone)]
pub struct Sample {
    pub taken_at: DateTime<Local>,
    pub cpu_percent: f64,
    pub memory: MemorySnapshot,
    pub disks: Vec<DiskSnapshot>,
    pub net_mbps: f64,
}

impl Sample {
    pub fn timestamp(&self) -> String {
        self.taken_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Semicolon-joined `<drive>=<freeGB>GB` pairs in enumeration order.
    /// Empty when no fixed volumes were found. Drive identifiers are not
    /// escaped, so one containing `,` or `;` corrupts the CSV row.
    pub fn disk_free_summary(&self) -> String {
        self.disks
            .iter()
            .map(|disk| format!("{}={}GB", disk.name, disk.free_gb))
            .collect::<Vec<_>>()
            .join(";")
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

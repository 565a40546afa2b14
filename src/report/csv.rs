use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;
use crate::metrics::Sample;

pub const CSV_HEADER: &str =
    "Timestamp,CPU_Percent,Mem_Total_MB,Mem_Used_MB,Mem_Free_MB,Mem_Pct_Used,Net_Mbps,Disk_Free_Summary";

/// Append-only CSV log of samples. The header is written once, when the
/// file does not exist yet; later runs keep appending rows to the same file.
pub struct CsvReport {
    path: PathBuf,
}

impl CsvReport {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn append(&self, sample: &Sample) -> Result<()> {
        let header_needed = !self.path.exists();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if header_needed {
            writeln!(file, "{}", CSV_HEADER)?;
        }
        writeln!(
            file,
            "{},{},{},{},{},{},{},{}",
            sample.timestamp(),
            sample.cpu_percent,
            sample.memory.total_mb,
            sample.memory.used_mb,
            sample.memory.free_mb,
            sample.memory.percent_used,
            sample.net_mbps,
            sample.disk_free_summary()
        )?;

        log::debug!("Appended sample to {}", self.path.display());
        Ok(())
    }
}

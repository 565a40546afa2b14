use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use crate::alerts::Alert;
use crate::error::Result;
use crate::metrics::TIMESTAMP_FORMAT;

/// Appends triggered alerts to the side log and echoes them to the console.
///
/// The log file is opened per write and never truncated, so alert history
/// accumulates across runs next to the CSV it belongs to.
pub struct AlertWriter {
    path: PathBuf,
}

impl AlertWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn record(&self, alert: &Alert) -> Result<()> {
        log::warn!("Alert triggered: {}", alert.message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "{} | {}",
            Local::now().format(TIMESTAMP_FORMAT),
            alert.message
        )?;

        println!("[ALERT] {}", alert.message);
        Ok(())
    }
}

use std::time::Duration;

use chrono::Local;

use crate::alerts::{AlertDetector, AlertWriter};
use crate::config::Config;
use crate::error::Result;
use crate::metrics::{CpuReader, DiskReader, MemoryReader, NetworkReader, Sample};
use crate::report::CsvReport;

/// Wires the readers, the detector and the two writers together for a
/// single collect-evaluate-record pass.
pub struct App {
    pub cpu: CpuReader,
    pub memory: MemoryReader,
    pub disks: DiskReader,
    pub network: NetworkReader,
    pub detector: AlertDetector,
    pub alert_writer: AlertWriter,
    pub report: CsvReport,
    pub config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        let detector = AlertDetector::new(config.thresholds.clone());
        let alert_writer = AlertWriter::new(config.alerts_path());
        let report = CsvReport::new(config.output.clone());

        Self {
            cpu: CpuReader::new(),
            memory: MemoryReader::new(),
            disks: DiskReader::new(),
            network: NetworkReader::new(),
            detector,
            alert_writer,
            report,
            config,
        }
    }

    /// Takes one sample, records any threshold alerts, appends the CSV row
    /// and prints the summary line. Readers run sequentially; the two
    /// rate-based ones (CPU, network) each observe their own interval.
    pub fn run(&mut self) -> Result<Sample> {
        let interval = Duration::from_secs(self.config.sample_interval_secs);
        log::info!(
            "Sampling host metrics (interval {}s, output {})",
            self.config.sample_interval_secs,
            self.config.output.display()
        );

        let taken_at = Local::now();
        let cpu_percent = self.cpu.sample(interval)?;
        let memory = self.memory.read();
        let disks = self.disks.read();
        let net_mbps = self.network.sample(interval);

        let sample = Sample {
            taken_at,
            cpu_percent,
            memory,
            disks,
            net_mbps,
        };

        let alerts = self.detector.evaluate(&sample);
        log::debug!("{} alert(s) triggered", alerts.len());
        for alert in &alerts {
            self.alert_writer.record(alert)?;
        }

        self.report.append(&sample)?;
        println!("{}", summary_line(&sample));

        Ok(sample)
    }
}

fn summary_line(sample: &Sample) -> String {
    let disks = sample.disk_free_summary();
    let disks = if disks.is_empty() {
        "none".to_string()
    } else {
        disks
    };
    format!(
        "{} | CPU {}% | Mem {}/{} MB ({}%) | Net {} Mbps | Disks {}",
        sample.timestamp(),
        sample.cpu_percent,
        sample.memory.used_mb,
        sample.memory.total_mb,
        sample.memory.percent_used,
        sample.net_mbps,
        disks
    )
}

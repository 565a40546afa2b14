use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use crate::error::{Error, Result};

/// Immutable per-run settings, assembled once in `main` and passed by
/// reference to every component.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_sample_interval")]
    pub sample_interval_secs: u64,
    #[serde(default)]
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_cpu_warn")]
    pub cpu_warn_percent: f64,
    #[serde(default = "default_mem_warn")]
    pub mem_warn_percent: f64,
    #[serde(default = "default_disk_free_warn")]
    pub disk_free_warn_gb: f64,
    #[serde(default = "default_net_warn")]
    pub net_warn_mbps: f64,
}

fn default_output() -> PathBuf { PathBuf::from("system_metrics.csv") }
fn default_sample_interval() -> u64 { 1 }
fn default_cpu_warn() -> f64 { 90.0 }
fn default_mem_warn() -> f64 { 90.0 }
fn default_disk_free_warn() -> f64 { 5.0 }
fn default_net_warn() -> f64 { 100.0 }

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            sample_interval_secs: default_sample_interval(),
            thresholds: Thresholds::default(),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu_warn_percent: default_cpu_warn(),
            mem_warn_percent: default_mem_warn(),
            disk_free_warn_gb: default_disk_free_warn(),
            net_warn_mbps: default_net_warn(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Path of the alerts side log: the CSV path with its extension
    /// replaced by `alerts.log`.
    pub fn alerts_path(&self) -> PathBuf {
        self.output.with_extension("alerts.log")
    }
}

use clap::Parser;
use hostsnap::{App, Config, Result};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hostsnap")]
#[command(author, version, about = "One-shot host metrics sampler", long_about = None)]
struct Args {
    #[arg(short, long, help = "CSV output path (default: system_metrics.csv)")]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Measurement window in seconds (default: 1)")]
    interval: Option<u64>,

    #[arg(long, help = "CPU usage alert threshold in percent (default: 90)")]
    cpu_warn: Option<f64>,

    #[arg(long, help = "Memory usage alert threshold in percent (default: 90)")]
    mem_warn: Option<f64>,

    #[arg(long, help = "Free disk space alert threshold in GB (default: 5)")]
    disk_free_warn: Option<f64>,

    #[arg(long, help = "Network throughput alert threshold in Mbps (default: 100)")]
    net_warn: Option<f64>,

    #[arg(short, long, help = "Path to custom config file")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,
}

/// Flags the user actually passed win over file values; absent flags leave
/// the loaded config untouched.
fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(interval) = args.interval {
        config.sample_interval_secs = interval;
    }
    if let Some(cpu_warn) = args.cpu_warn {
        config.thresholds.cpu_warn_percent = cpu_warn;
    }
    if let Some(mem_warn) = args.mem_warn {
        config.thresholds.mem_warn_percent = mem_warn;
    }
    if let Some(disk_free_warn) = args.disk_free_warn {
        config.thresholds.disk_free_warn_gb = disk_free_warn;
    }
    if let Some(net_warn) = args.net_warn {
        config.thresholds.net_warn_mbps = net_warn;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    log::info!("Starting hostsnap v{}", env!("CARGO_PKG_VERSION"));

    let mut config = if let Some(config_path) = &args.config {
        log::info!("Loading config from: {}", config_path.display());
        Config::load(config_path)?
    } else {
        Config::default()
    };
    apply_overrides(&mut config, &args);

    let mut app = App::new(config);
    app.run()?;

    Ok(())
}

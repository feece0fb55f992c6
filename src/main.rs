use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use semver_stamp::cli::{self, Command};
use semver_stamp::config::Config;
use semver_stamp::diagnostics::{FileDevice, MonitorWriter, ProcessMonitor};
use semver_stamp::logging;

#[derive(Parser)]
#[command(name = "semver-stamp")]
#[command(version, about = "Parse, compare and stamp semantic version numbers")]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Forward log output to the process monitor device
    #[arg(long, global = true)]
    monitor: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut monitor_error = None;
    let monitor = if cli.monitor || config.monitor.enabled {
        match ProcessMonitor::open(FileDevice::default(), &config.monitor.device_path) {
            Ok(monitor) => Some(MonitorWriter::new(monitor)),
            Err(e) => {
                monitor_error = Some(e);
                None
            }
        }
    } else {
        None
    };

    let _guard = logging::init::<FileDevice>(&config.log, monitor)?;
    if let Some(e) = monitor_error {
        warn!("Process monitor unavailable: {}", e);
    }

    let output = cli::run(&cli.command)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

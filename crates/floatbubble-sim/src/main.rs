//! Terminal bubble simulator
//!
//! Controls:
//! - Left click on the bubble: expand / collapse
//! - Left drag: move the bubble, release quickly to fling it
//! - f: simulate focus loss (collapses the panel)
//! - q or Esc: quit
//!
//! Usage:
//!   bubble-sim                          # defaults or the platform config file
//!   bubble-sim --config bubble.toml     # explicit config
//!   bubble-sim --log-level debug        # logs go to a file, never the terminal

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use floatbubble_config::AppConfig;
use floatbubble_sim::Simulator;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bubble-sim", version, about = "Run a floating bubble in the terminal")]
struct Args {
    /// Config file (falls back to FLOATBUBBLE_CONFIG, then the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `floatbubble_core=trace`
    #[arg(long)]
    log_level: Option<String>,

    /// Frame clock period in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::discover(args.config.clone()).context("Failed to load configuration")?;
    if let Some(level) = args.log_level.clone() {
        config.override_log_level(level);
    }
    init_logging(&config, args.log_file.clone())?;

    let simulator = Simulator::new(&config.overlay)?
        .with_frame_interval(Duration::from_millis(args.frame_ms.max(1)));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to build runtime")?;
    runtime.block_on(simulator.run())
}

fn init_logging(config: &AppConfig, log_file: Option<PathBuf>) -> Result<()> {
    let path = log_file
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| std::env::temp_dir().join("bubble-sim.log"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.logging.level)
        .with_context(|| format!("Invalid log filter '{}'", config.logging.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

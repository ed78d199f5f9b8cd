//! Link quality analysis CLI
//!
//! Produces `statistics.json` and `metrics.png` for a trace.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use trace_analyzer::config::{AnalyzerConfig, DEFAULT_OUTPUT_DIR, DEFAULT_TRACE};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "5G link quality analysis tool", long_about = None)]
struct Cli {
    /// Trace file path (not parsed yet; the series is synthesized)
    #[arg(long, default_value = DEFAULT_TRACE)]
    trace: PathBuf,

    /// Output directory, created if missing
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Also render metrics.svg
    #[arg(long, default_value_t = false)]
    svg: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for AnalyzerConfig {
    fn from(cli: Cli) -> Self {
        AnalyzerConfig {
            trace: cli.trace,
            output_dir: cli.output,
            seed: cli.seed,
            svg: cli.svg,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AnalyzerConfig::from(cli);
    trace_analyzer::run(&config).with_context(|| {
        format!(
            "analysis of {} into {} failed",
            config.trace.display(),
            config.output_dir.display()
        )
    })?;

    Ok(())
}

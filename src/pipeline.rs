//! End-to-end analysis run: synthesize, summarize, write JSON, render chart

use crate::config::AnalyzerConfig;
use crate::errors::Result;
use crate::plots::render_metrics;
use crate::report::write_statistics;
use crate::source::analyze_trace;
use crate::stats::StatisticsReport;
use std::path::PathBuf;
use tracing::info;

const BANNER_WIDTH: usize = 60;

/// Files produced by a run
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub report: StatisticsReport,
    pub statistics_path: PathBuf,
    pub chart_paths: Vec<PathBuf>,
}

/// Run the full analysis. Any failing step aborts the rest.
pub fn run(config: &AnalyzerConfig) -> Result<RunOutcome> {
    config.validate()?;

    let rule = "=".repeat(BANNER_WIDTH);
    println!("{rule}");
    println!("5G Link Quality Analyzer");
    println!("{rule}");

    let series = analyze_trace(&config.trace, &config.profile, config.seed)?;
    let report = StatisticsReport::from_series(&series)?;

    println!("\nStatistics:");
    for line in report.summary_lines() {
        println!("{line}");
    }

    std::fs::create_dir_all(&config.output_dir)?;
    info!("Output directory: {}", config.output_dir.display());

    let statistics_path = write_statistics(&report, &config.output_dir)?;
    println!("\nStatistics saved: {}", statistics_path.display());

    let chart_paths = render_metrics(&series, &config.output_dir, &config.chart_options())?;
    for path in &chart_paths {
        println!("Chart saved: {}", path.display());
    }

    println!("\nAnalysis complete!");
    println!("{rule}");

    Ok(RunOutcome {
        report,
        statistics_path,
        chart_paths,
    })
}

//! Link quality trace analysis
//!
//! Synthesizes RTT, loss rate and bandwidth series, computes descriptive
//! statistics, and writes them as `statistics.json` next to a three-panel
//! `metrics.png` chart.

pub mod config;
pub mod errors;
pub mod pipeline;
pub mod plots;
pub mod report;
pub mod source;
pub mod stats;
pub mod types;

// Re-exports for public API
pub use config::AnalyzerConfig;
pub use errors::{AnalyzerError, Result};
pub use pipeline::{run, RunOutcome};
pub use stats::{SignalStats, StatisticsReport};
pub use types::{SignalParams, TimeSeries, TraceProfile};

//! Run configuration

use crate::errors::Result;
use crate::plots::ChartOptions;
use crate::types::TraceProfile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_TRACE: &str = "../traces/5g_maritime.trace";
pub const DEFAULT_OUTPUT_DIR: &str = "../traces";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Trace file path; reported but not parsed
    pub trace: PathBuf,
    /// Directory receiving statistics.json and the charts
    pub output_dir: PathBuf,
    /// Optional random seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Also render an SVG chart
    pub svg: bool,
    pub profile: TraceProfile,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            trace: PathBuf::from(DEFAULT_TRACE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            svg: false,
            profile: TraceProfile::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<()> {
        self.profile.validate()
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions { svg: self.svg }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.trace, PathBuf::from("../traces/5g_maritime.trace"));
        assert_eq!(config.output_dir, PathBuf::from("../traces"));
        assert!(config.seed.is_none());
        assert!(!config.chart_options().svg);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialize_skips_missing_seed() {
        let json = serde_json::to_value(AnalyzerConfig::default()).unwrap();
        assert!(json.get("seed").is_none());

        let seeded = AnalyzerConfig {
            seed: Some(9),
            ..Default::default()
        };
        let json = serde_json::to_value(seeded).unwrap();
        assert_eq!(json["seed"], 9);
    }
}

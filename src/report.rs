//! Statistics report output

use crate::errors::Result;
use crate::stats::StatisticsReport;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const STATISTICS_FILE: &str = "statistics.json";

/// Write `report` as pretty-printed JSON to `<outdir>/statistics.json`.
///
/// Missing directories are created. An existing file is replaced, never merged.
pub fn write_statistics(report: &StatisticsReport, outdir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(outdir)?;

    let path = outdir.join(STATISTICS_FILE);
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, &json)?;

    debug!("Wrote {} bytes of statistics to {}", json.len(), path.display());
    Ok(path)
}

/// Load a report written by [`write_statistics`]
pub fn read_statistics(path: &Path) -> Result<StatisticsReport> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SignalStats;

    fn sample_report() -> StatisticsReport {
        StatisticsReport {
            rtt: SignalStats::with_percentiles("rtt", &[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap(),
            loss_rate: SignalStats::from_samples("loss_rate", &[0.01, 0.02]).unwrap(),
            bandwidth: SignalStats::from_samples("bandwidth", &[100.0, 120.0]).unwrap(),
        }
    }

    #[test]
    fn test_json_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_statistics(&sample_report(), dir.path()).unwrap();
        assert_eq!(path, dir.path().join("statistics.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        let rtt = value["rtt"].as_object().unwrap();
        let keys: Vec<_> = rtt.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 7);
        for key in ["mean", "std", "min", "max", "p50", "p95", "p99"] {
            assert!(rtt.contains_key(key), "missing rtt.{key}");
        }

        for signal in ["loss_rate", "bandwidth"] {
            let obj = value[signal].as_object().unwrap();
            assert_eq!(obj.len(), 4);
            assert!(!obj.contains_key("p50"));
        }

        // Two-space indentation, top-level keys in declaration order
        assert!(text.starts_with("{\n  \"rtt\": {\n    \"mean\""));
        let rtt_pos = text.find("\"rtt\"").unwrap();
        let loss_pos = text.find("\"loss_rate\"").unwrap();
        let bw_pos = text.find("\"bandwidth\"").unwrap();
        assert!(rtt_pos < loss_pos && loss_pos < bw_pos);
    }

    #[test]
    fn test_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();
        let path = write_statistics(&report, dir.path()).unwrap();
        let reread = read_statistics(&path).unwrap();
        assert!((reread.rtt.std - report.rtt.std).abs() < 1e-12);
        assert!((reread.rtt.p99.unwrap() - report.rtt.p99.unwrap()).abs() < 1e-12);
        assert_eq!(reread.loss_rate.p50, None);
    }
}

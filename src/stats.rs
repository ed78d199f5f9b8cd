//! Descriptive statistics over a link quality time series

use crate::errors::{AnalyzerError, Result};
use crate::types::TimeSeries;
use serde::{Deserialize, Serialize};

/// Summary statistics for one signal
///
/// Percentiles are only populated for RTT.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalStats {
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p50: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p95: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p99: Option<f64>,
}

impl SignalStats {
    /// Mean, standard deviation, min and max of `samples`.
    ///
    /// `signal` names the series in the error returned for empty input.
    pub fn from_samples(signal: &'static str, samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(AnalyzerError::EmptySeries(signal));
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            mean,
            std: variance.sqrt(),
            min,
            max,
            p50: None,
            p95: None,
            p99: None,
        })
    }

    /// Same as [`SignalStats::from_samples`] plus p50/p95/p99.
    pub fn with_percentiles(signal: &'static str, samples: &[f64]) -> Result<Self> {
        let mut stats = Self::from_samples(signal, samples)?;

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        stats.p50 = Some(percentile(&sorted, 50.0));
        stats.p95 = Some(percentile(&sorted, 95.0));
        stats.p99 = Some(percentile(&sorted, 99.0));
        Ok(stats)
    }
}

/// Percentile of already sorted data, `pct` in `[0, 100]`.
///
/// Interpolates linearly between the two closest ranks. Returns 0.0 for
/// empty input.
pub fn percentile(sorted_data: &[f64], pct: f64) -> f64 {
    if sorted_data.is_empty() {
        return 0.0;
    }

    let rank = pct.clamp(0.0, 100.0) / 100.0 * (sorted_data.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if upper >= sorted_data.len() {
        return sorted_data[sorted_data.len() - 1];
    }

    let weight = rank - lower as f64;
    sorted_data[lower] * (1.0 - weight) + sorted_data[upper] * weight
}

/// Statistics for all three signals of a run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub rtt: SignalStats,
    pub loss_rate: SignalStats,
    pub bandwidth: SignalStats,
}

impl StatisticsReport {
    pub fn from_series(series: &TimeSeries) -> Result<Self> {
        Ok(Self {
            rtt: SignalStats::with_percentiles("rtt", series.rtt_ms())?,
            loss_rate: SignalStats::from_samples("loss_rate", series.loss_rate())?,
            bandwidth: SignalStats::from_samples("bandwidth", series.bandwidth_mbps())?,
        })
    }

    /// Human-readable console summary, one entry per line
    pub fn summary_lines(&self) -> Vec<String> {
        let rtt = &self.rtt;
        let mut lines = vec![format!("  RTT: {:.2} ± {:.2} ms", rtt.mean, rtt.std)];
        if let (Some(p50), Some(p95), Some(p99)) = (rtt.p50, rtt.p95, rtt.p99) {
            lines.push(format!(
                "       [P50: {:.2}, P95: {:.2}, P99: {:.2}]",
                p50, p95, p99
            ));
        }
        lines.push(format!(
            "  Loss rate: {:.2} ± {:.2} %",
            self.loss_rate.mean * 100.0,
            self.loss_rate.std * 100.0
        ));
        lines.push(format!(
            "  Bandwidth: {:.2} ± {:.2} Mbps",
            self.bandwidth.mean, self.bandwidth.std
        ));
        lines
    }
}

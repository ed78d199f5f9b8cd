//! Core types for trace analysis

use crate::errors::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};

/// Sinusoidal signal with additive Gaussian noise, clipped to a range
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalParams {
    /// Mean level of the signal
    pub base: f64,
    /// Peak deviation of the sinusoid from `base`
    pub amplitude: f64,
    /// Divisor applied to the timestamp inside `sin`
    pub period: f64,
    /// Standard deviation of the Gaussian noise
    pub noise_std: f64,
    /// Lower clip bound
    pub min: f64,
    /// Upper clip bound
    pub max: f64,
}

impl SignalParams {
    /// Noise-free value at time `t`, before clipping
    pub fn deterministic_at(&self, t: f64) -> f64 {
        self.base + self.amplitude * (t / self.period).sin()
    }

    pub fn clip(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Validate SignalParams parameters
    pub fn validate(&self, name: &str) -> Result<()> {
        let fields = [
            self.base,
            self.amplitude,
            self.period,
            self.noise_std,
            self.min,
            self.max,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(AnalyzerError::InvalidParameter(format!(
                "{name}: all signal parameters must be finite"
            )));
        }

        if self.period == 0.0 {
            return Err(AnalyzerError::InvalidParameter(format!(
                "{name}: period must be non-zero"
            )));
        }

        if self.noise_std < 0.0 {
            return Err(AnalyzerError::InvalidParameter(format!(
                "{name}: noise_std must be >= 0, got {}",
                self.noise_std
            )));
        }

        if self.min > self.max {
            return Err(AnalyzerError::InvalidParameter(format!(
                "{name}: min ({}) cannot exceed max ({})",
                self.min, self.max
            )));
        }

        Ok(())
    }

    pub fn rtt() -> Self {
        Self {
            base: 50.0,
            amplitude: 30.0,
            period: 10.0,
            noise_std: 5.0,
            min: 10.0,
            max: 200.0,
        }
    }

    pub fn loss_rate() -> Self {
        Self {
            base: 0.05,
            amplitude: 0.03,
            period: 15.0,
            noise_std: 0.01,
            min: 0.0,
            max: 0.3,
        }
    }

    pub fn bandwidth() -> Self {
        Self {
            base: 100.0,
            amplitude: 20.0,
            period: 20.0,
            noise_std: 5.0,
            min: 20.0,
            max: 150.0,
        }
    }
}

/// Shape of a synthetic trace: sample count, time span and per-signal parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceProfile {
    /// Number of samples per signal
    pub samples: usize,
    /// Time span covered by the timestamps, in seconds
    pub duration: f64,
    pub rtt: SignalParams,
    pub loss_rate: SignalParams,
    pub bandwidth: SignalParams,
}

impl Default for TraceProfile {
    fn default() -> Self {
        Self {
            samples: 1000,
            duration: 100.0,
            rtt: SignalParams::rtt(),
            loss_rate: SignalParams::loss_rate(),
            bandwidth: SignalParams::bandwidth(),
        }
    }
}

impl TraceProfile {
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(AnalyzerError::InvalidParameter(
                "samples must be greater than 0".to_string(),
            ));
        }

        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(AnalyzerError::InvalidParameter(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }

        self.rtt.validate("rtt")?;
        self.loss_rate.validate("loss_rate")?;
        self.bandwidth.validate("bandwidth")?;
        Ok(())
    }

    /// Evenly spaced timestamps over `[0, duration]`, both ends included
    pub fn timestamps(&self) -> Vec<f64> {
        match self.samples {
            0 => Vec::new(),
            1 => vec![0.0],
            n => {
                let step = self.duration / (n - 1) as f64;
                (0..n).map(|i| i as f64 * step).collect()
            }
        }
    }
}

/// Time series of link quality samples
///
/// All four vectors have the same length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    timestamps: Vec<f64>,
    rtt_ms: Vec<f64>,
    loss_rate: Vec<f64>,
    bandwidth_mbps: Vec<f64>,
}

impl TimeSeries {
    pub fn new(
        timestamps: Vec<f64>,
        rtt_ms: Vec<f64>,
        loss_rate: Vec<f64>,
        bandwidth_mbps: Vec<f64>,
    ) -> Result<Self> {
        let expected = timestamps.len();
        for (signal, len) in [
            ("rtt", rtt_ms.len()),
            ("loss_rate", loss_rate.len()),
            ("bandwidth", bandwidth_mbps.len()),
        ] {
            if len != expected {
                return Err(AnalyzerError::LengthMismatch {
                    signal,
                    expected,
                    actual: len,
                });
            }
        }

        Ok(Self {
            timestamps,
            rtt_ms,
            loss_rate,
            bandwidth_mbps,
        })
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    /// Round-trip time in milliseconds
    pub fn rtt_ms(&self) -> &[f64] {
        &self.rtt_ms
    }

    /// Loss rate as a fraction
    pub fn loss_rate(&self) -> &[f64] {
        &self.loss_rate
    }

    /// Bandwidth in Mbps
    pub fn bandwidth_mbps(&self) -> &[f64] {
        &self.bandwidth_mbps
    }

    /// Time span covered by the series, `(first, last)`
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((*self.timestamps.first()?, *self.timestamps.last()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        let profile = TraceProfile::default();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.samples, 1000);
    }

    #[test]
    fn test_timestamps_linspace() {
        let ts = TraceProfile::default().timestamps();
        assert_eq!(ts.len(), 1000);
        assert_eq!(ts[0], 0.0);
        assert!((ts[999] - 100.0).abs() < 1e-9);
        assert!(ts.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_signal_validation() {
        let mut params = SignalParams::rtt();
        params.period = 0.0;
        assert!(params.validate("rtt").is_err());

        let mut params = SignalParams::rtt();
        params.noise_std = -1.0;
        assert!(params.validate("rtt").is_err());

        let mut params = SignalParams::bandwidth();
        params.min = 200.0;
        assert!(params.validate("bandwidth").is_err());

        let mut params = SignalParams::loss_rate();
        params.base = f64::NAN;
        assert!(params.validate("loss_rate").is_err());
    }

    #[test]
    fn test_profile_rejects_zero_samples() {
        let profile = TraceProfile {
            samples: 0,
            ..Default::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(AnalyzerError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_time_series_length_mismatch() {
        let err = TimeSeries::new(
            vec![0.0, 1.0],
            vec![10.0, 20.0],
            vec![0.1],
            vec![50.0, 60.0],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::LengthMismatch {
                signal: "loss_rate",
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_clip() {
        let params = SignalParams::loss_rate();
        assert_eq!(params.clip(-0.2), 0.0);
        assert_eq!(params.clip(0.5), 0.3);
        assert_eq!(params.clip(0.1), 0.1);
    }
}

//! Synthetic trace source
//!
//! Trace files are not parsed yet: the path handed to [`analyze_trace`] is
//! only reported, and the series is synthesized from a [`TraceProfile`].

use crate::errors::{AnalyzerError, Result};
use crate::types::{SignalParams, TimeSeries, TraceProfile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::path::Path;
use tracing::{debug, info};

/// Produce the time series for a trace file.
///
/// The file at `trace_path` is not read; the series comes from `profile`.
pub fn analyze_trace(
    trace_path: &Path,
    profile: &TraceProfile,
    seed: Option<u64>,
) -> Result<TimeSeries> {
    println!("Analyzing trace file: {}", trace_path.display());
    info!(
        "Trace file {} is not parsed, synthesizing {} samples",
        trace_path.display(),
        profile.samples
    );
    generate(profile, seed)
}

/// Synthesize a time series from `profile`.
///
/// With `Some(seed)` the noise is drawn from a seeded RNG and the output is
/// reproducible; otherwise the thread RNG is used.
pub fn generate(profile: &TraceProfile, seed: Option<u64>) -> Result<TimeSeries> {
    match seed {
        Some(seed) => {
            debug!("Generating trace with seed {}", seed);
            generate_with_rng(profile, &mut StdRng::seed_from_u64(seed))
        }
        None => generate_with_rng(profile, &mut rand::thread_rng()),
    }
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    profile: &TraceProfile,
    rng: &mut R,
) -> Result<TimeSeries> {
    profile.validate()?;

    let timestamps = profile.timestamps();
    let rtt = sample_signal(&profile.rtt, &timestamps, rng)?;
    let loss_rate = sample_signal(&profile.loss_rate, &timestamps, rng)?;
    let bandwidth = sample_signal(&profile.bandwidth, &timestamps, rng)?;

    debug!("Generated {} samples", timestamps.len());
    TimeSeries::new(timestamps, rtt, loss_rate, bandwidth)
}

fn sample_signal<R: Rng + ?Sized>(
    params: &SignalParams,
    timestamps: &[f64],
    rng: &mut R,
) -> Result<Vec<f64>> {
    let noise = Normal::new(0.0, params.noise_std)
        .map_err(|e| AnalyzerError::InvalidParameter(format!("noise distribution: {e}")))?;

    Ok(timestamps
        .iter()
        .map(|&t| params.clip(params.deterministic_at(t) + noise.sample(rng)))
        .collect())
}

//! Sample statistics for recorded run times.
//!
//! A benchmark produces one `Duration` per measured run. This module reduces
//! that sample sequence to the figures the report needs: arithmetic mean,
//! sample standard deviation (Bessel's correction), and a per-operation
//! margin of error at a fixed confidence level.

use std::time::Duration;

/// Critical value for a ~99.9% confidence interval.
pub const Z_CRITICAL: f64 = 3.291;

/// Reduced statistics over a sequence of run times, in microseconds.
#[derive(Debug, Clone, Copy)]
pub struct SampleStats {
    /// Arithmetic mean of the samples.
    pub mean_us: f64,
    /// Sample standard deviation (divides by `n - 1`).
    pub std_dev_us: f64,
    /// Number of samples reduced.
    pub len: usize,
}

impl SampleStats {
    /// Reduce recorded run times to summary statistics.
    ///
    /// Panics if fewer than 2 samples are given; sample variance is
    /// undefined for a single observation.
    pub fn from_samples(samples: &[Duration]) -> Self {
        assert!(
            samples.len() >= 2,
            "sample variance requires at least 2 runs, got {}",
            samples.len()
        );

        let times_us: Vec<f64> = samples.iter().map(|d| d.as_nanos() as f64 / 1_000.0).collect();
        let len = times_us.len();

        let mean_us = times_us.iter().sum::<f64>() / len as f64;

        let variance = times_us
            .iter()
            .map(|t| {
                let diff = t - mean_us;
                diff * diff
            })
            .sum::<f64>()
            / (len - 1) as f64;

        Self {
            mean_us,
            std_dev_us: variance.sqrt(),
            len,
        }
    }

    /// Half-width of the confidence interval around the mean, normalized to
    /// a single operation so results with different iteration counts stay
    /// comparable.
    pub fn margin_of_error(&self, ops_per_run: usize) -> f64 {
        margin_of_error_us(self.std_dev_us, self.len, ops_per_run)
    }
}

/// `(z * stddev / sqrt(runs)) / ops_per_run` at the fixed critical value.
pub fn margin_of_error_us(std_dev_us: f64, runs: usize, ops_per_run: usize) -> f64 {
    (Z_CRITICAL * std_dev_us / (runs as f64).sqrt()) / ops_per_run as f64
}

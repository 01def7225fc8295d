//! The benchmark sampler: warmup, measured runs, and the report record.
//!
//! A [`Workload`] owns whatever engine state its cycles need (a world, a
//! cached query, ...). The sampler never looks inside it; it only drives the
//! setup → run → teardown sequence, timing the `run` call with a monotonic
//! clock and reducing the recorded samples via [`SampleStats`].

use std::fmt;
use std::time::{Duration, Instant};

use crate::stats::SampleStats;

/// Operations performed by one `run` call of a full-sized workload.
pub const ITERATIONS: usize = 100_000;
/// Measured cycles per benchmark.
pub const RUNS: usize = 50;
/// Unmeasured cycles executed before measurement starts.
pub const WARMUP_RUNS: usize = 5;

/// A benchmark body plus the state it runs against.
///
/// `setup` and `teardown` default to no-ops for workloads that manage their
/// state entirely inside `run`.
pub trait Workload {
    /// Label used in the report.
    fn name(&self) -> &'static str;

    /// Brief description of what this workload exercises.
    fn description(&self) -> &'static str;

    /// Operations performed by one `run` call, for per-op normalization.
    fn ops_per_run(&self) -> usize {
        ITERATIONS
    }

    /// Prepare state for one cycle. Runs outside the timed region.
    fn setup(&mut self) {}

    /// The timed body.
    fn run(&mut self);

    /// Release state after one cycle. Runs outside the timed region.
    fn teardown(&mut self) {}
}

/// Summary record for one completed benchmark. Immutable once computed.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Workload label.
    pub name: &'static str,
    /// Average time for one full run (one batch of operations).
    pub avg_us: f64,
    /// Average time for a single operation: `avg_us / iterations`.
    pub per_op_us: f64,
    /// Sample standard deviation of the run times.
    pub stddev_us: f64,
    /// Per-operation margin of error at ~99.9% confidence.
    pub error_us: f64,
    /// Measured runs that produced the record.
    pub runs: usize,
    /// Operations per run.
    pub iterations: usize,
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Benchmark: {:<25}", self.name)?;
        writeln!(f, "  Mode: AverageTime, Time: us")?;
        writeln!(
            f,
            "  Score: {:.6} ± {:.6} us/op  (batch avg: {:.3} us, stddev: {:.3} us)",
            self.per_op_us, self.error_us, self.avg_us, self.stddev_us
        )?;
        writeln!(f, "---------------------------------------------------")
    }
}

/// Runs workloads through warmup and measured cycles.
pub struct Sampler {
    runs: usize,
    warmup_runs: usize,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(RUNS, WARMUP_RUNS)
    }
}

impl Sampler {
    /// Create a sampler with explicit cycle counts.
    ///
    /// Panics if `runs < 2`: the reduction needs a defined sample variance.
    pub fn new(runs: usize, warmup_runs: usize) -> Self {
        assert!(runs >= 2, "sampler needs at least 2 measured runs, got {runs}");
        Self { runs, warmup_runs }
    }

    /// Execute the full warmup → measure → reduce sequence for one workload.
    pub fn sample<W: Workload + ?Sized>(&self, workload: &mut W) -> BenchmarkResult {
        for _ in 0..self.warmup_runs {
            workload.setup();
            workload.run();
            workload.teardown();
        }

        let mut samples: Vec<Duration> = Vec::with_capacity(self.runs);
        for _ in 0..self.runs {
            workload.setup();
            let start = Instant::now();
            workload.run();
            samples.push(start.elapsed());
            workload.teardown();
        }

        let ops = workload.ops_per_run();
        let stats = SampleStats::from_samples(&samples);

        BenchmarkResult {
            name: workload.name(),
            avg_us: stats.mean_us,
            per_op_us: stats.mean_us / ops as f64,
            stddev_us: stats.std_dev_us,
            error_us: stats.margin_of_error(ops),
            runs: self.runs,
            iterations: ops,
        }
    }
}

//! Heap profiling for workload cycles, via dhat.
//!
//! Profiling adds overhead, so it sits behind a feature:
//!
//! ```bash
//! cargo run --release --features memory_profiling
//! ```
//!
//! The detailed profile lands in `dhat-heap.json`; load it at
//! <https://nnethercote.github.io/dh_view/dh_view.html>. The binary must
//! install `dhat::Alloc` as the global allocator for the numbers to be real.

use std::fmt;

use crate::sampler::Workload;

/// Heap activity observed during one profiled workload cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryReport {
    /// Total bytes allocated during the cycle.
    pub bytes_allocated: u64,
    /// Total number of allocations.
    pub allocation_count: u64,
    /// Peak heap usage in bytes.
    pub peak_bytes: u64,
}

impl MemoryReport {
    /// Bytes allocated per benchmark operation.
    pub fn bytes_per_op(&self, ops: usize) -> f64 {
        if ops == 0 {
            0.0
        } else {
            self.bytes_allocated as f64 / ops as f64
        }
    }

    /// Allocations per benchmark operation.
    pub fn allocs_per_op(&self, ops: usize) -> f64 {
        if ops == 0 {
            0.0
        } else {
            self.allocation_count as f64 / ops as f64
        }
    }
}

impl fmt::Display for MemoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "allocated: {} bytes ({} allocs), peak: {} bytes",
            self.bytes_allocated, self.allocation_count, self.peak_bytes
        )
    }
}

#[cfg(feature = "memory_profiling")]
struct HeapProfiler {
    _profiler: dhat::Profiler,
}

#[cfg(feature = "memory_profiling")]
impl HeapProfiler {
    fn start() -> Self {
        Self {
            _profiler: dhat::Profiler::new_heap(),
        }
    }

    fn finish(self) -> MemoryReport {
        let stats = dhat::HeapStats::get();
        MemoryReport {
            bytes_allocated: stats.total_bytes as u64,
            allocation_count: stats.total_blocks as u64,
            peak_bytes: stats.max_bytes as u64,
        }
    }
}

#[cfg(not(feature = "memory_profiling"))]
struct HeapProfiler;

#[cfg(not(feature = "memory_profiling"))]
impl HeapProfiler {
    fn start() -> Self {
        Self
    }

    fn finish(self) -> MemoryReport {
        MemoryReport::default()
    }
}

/// Run one setup → run → teardown cycle under the heap profiler.
///
/// Without the `memory_profiling` feature the cycle still runs, but the
/// report comes back zeroed.
pub fn profile_workload<W: Workload + ?Sized>(workload: &mut W) -> MemoryReport {
    let profiler = HeapProfiler::start();
    workload.setup();
    workload.run();
    workload.teardown();
    profiler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workloads::CreateEmpty;

    #[test]
    fn report_display_lists_all_figures() {
        let report = MemoryReport {
            bytes_allocated: 1024,
            allocation_count: 10,
            peak_bytes: 512,
        };
        let text = report.to_string();
        assert!(text.contains("1024 bytes"));
        assert!(text.contains("10 allocs"));
        assert!(text.contains("peak: 512"));
    }

    #[test]
    fn per_op_figures_divide_by_operation_count() {
        let report = MemoryReport {
            bytes_allocated: 10_000,
            allocation_count: 100,
            peak_bytes: 5_000,
        };
        assert!((report.bytes_per_op(100) - 100.0).abs() < f64::EPSILON);
        assert!((report.allocs_per_op(100) - 1.0).abs() < f64::EPSILON);
        assert_eq!(report.bytes_per_op(0), 0.0);
    }

    #[test]
    fn profiling_still_runs_the_cycle() {
        let mut workload = CreateEmpty::with_ops(16);
        // Report contents depend on the feature flag; the cycle must run
        // either way.
        let _report = profile_workload(&mut workload);
    }
}

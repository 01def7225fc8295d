//! Fixed-format benchmark report on stdout.
//!
//! Runs every registered workload through the default sampler and prints
//! one report block per benchmark. Takes no arguments and always exits 0.

use std::io::{self};

use crossterm::{ExecutableCommand, style};

use hecs_bench::sampler::{ITERATIONS, RUNS, Sampler, WARMUP_RUNS, Workload};
use hecs_bench::workloads::{CreateBatch, CreateEmpty, CreateWithComponents, QueryIter};

#[cfg(feature = "memory_profiling")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn main() {
    let mut stdout = io::stdout();
    stdout
        .execute(style::SetAttribute(style::Attribute::Bold))
        .unwrap();
    println!("== hecs microbenchmarks ==");
    stdout
        .execute(style::SetAttribute(style::Attribute::Reset))
        .unwrap();
    println!("  Runs       : {RUNS}  |  Warmup: {WARMUP_RUNS}  |  Iterations: {ITERATIONS}");
    println!("---------------------------------------------------");

    let sampler = Sampler::default();
    let mut workloads: Vec<Box<dyn Workload>> = vec![
        Box::new(CreateEmpty::new()),
        Box::new(CreateWithComponents::new()),
        Box::new(CreateBatch::new()),
        Box::new(QueryIter::new()),
    ];

    for workload in &mut workloads {
        let result = sampler.sample(workload.as_mut());
        print!("{result}");
    }

    #[cfg(feature = "memory_profiling")]
    report_memory(&mut workloads);
}

/// One profiled cycle per workload, appended after the timing report.
#[cfg(feature = "memory_profiling")]
fn report_memory(workloads: &mut [Box<dyn Workload>]) {
    use hecs_bench::memory::profile_workload;

    println!("Memory (one cycle per workload):");
    for workload in workloads {
        let ops = workload.ops_per_run();
        let report = profile_workload(workload.as_mut());
        println!(
            "  {:<25} {}  ({:.1} bytes/op, {:.3} allocs/op)",
            workload.name(),
            report,
            report.bytes_per_op(ops),
            report.allocs_per_op(ops)
        );
    }
    println!("---------------------------------------------------");
}

//! Microbenchmark harness for the `hecs` entity-component-system.
//!
//! This crate times the entity-creation and query paths of `hecs` with a
//! small hand-rolled sampler:
//!
//! - **Workloads**: spawn loops and query iteration over a `hecs::World`
//! - **Sampler**: warmup + measured setup/run/teardown cycles
//! - **Statistics**: mean, Bessel-corrected stddev, per-operation margin of error
//! - **Memory tracking**: heap allocation profiling via dhat
//!
//! All ECS behavior (entity allocation, component storage, query execution)
//! is the engine's; this crate only drives it and reduces the timings.
//!
//! # Running
//!
//! ```bash
//! # Fixed-format report on stdout
//! cargo run --release
//!
//! # Criterion sweeps over entity counts
//! cargo bench
//!
//! # With memory profiling (slower)
//! cargo run --release --features memory_profiling
//! ```

pub mod components;
pub mod memory;
pub mod sampler;
pub mod stats;
pub mod workloads;

//! ECS workloads driven by the sampler.
//!
//! Each workload owns a `hecs::World` (and whatever else its cycles need)
//! and exposes the engine path it measures through the [`Workload`] trait:
//!
//! - **Entity creation**: one-at-a-time spawns, component-carrying spawns,
//!   and batched spawns
//! - **Query iteration**: mutating iteration over a populated world

pub mod entity_creation;
pub mod query;

pub use crate::sampler::Workload;
pub use entity_creation::{CreateBatch, CreateEmpty, CreateWithComponents};
pub use query::QueryIter;

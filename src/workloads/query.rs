//! Query-iteration workload.
//!
//! `setup` populates a fresh world with one entity per operation, each
//! carrying the full archetype. The timed region is a single mutating pass
//! over the matching entities.

use hecs::World;
use std::hint::black_box;

use crate::components::{BundleFactory, Health, Ideology};
use crate::sampler::{ITERATIONS, Workload};

const WORLD_SEED: u64 = 12345;

/// Iterates all `(Health, Ideology)` entities, bumping three fields each.
pub struct QueryIter {
    world: World,
    ops: usize,
    checksum: i32,
}

impl QueryIter {
    pub fn new() -> Self {
        Self::with_ops(ITERATIONS)
    }

    pub fn with_ops(ops: usize) -> Self {
        Self {
            world: World::new(),
            ops,
            checksum: 0,
        }
    }
}

impl Default for QueryIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Workload for QueryIter {
    fn name(&self) -> &'static str {
        "query"
    }

    fn description(&self) -> &'static str {
        "mutating iteration over Health + Ideology"
    }

    fn ops_per_run(&self) -> usize {
        self.ops
    }

    fn setup(&mut self) {
        let mut factory = BundleFactory::with_seed(WORLD_SEED);
        self.world = World::new();
        self.world
            .spawn_batch((0..self.ops).map(|_| factory.bundle()))
            .for_each(drop);
    }

    fn run(&mut self) {
        // Fold the updated fields into an accumulator so the optimizer
        // cannot elide the writes.
        let mut acc = self.checksum;
        for (_entity, (health, ideology)) in
            self.world.query_mut::<(&mut Health, &mut Ideology)>()
        {
            health.value += 1;
            ideology.color += 1;
            ideology.drift_speed += 1;
            acc ^= health.value ^ ideology.color ^ ideology.drift_speed;
        }
        self.checksum = black_box(acc);
    }

    fn teardown(&mut self) {
        self.world.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_populates_one_entity_per_operation() {
        let mut workload = QueryIter::with_ops(512);
        workload.setup();
        assert_eq!(workload.world.len(), 512);
    }

    #[test]
    fn run_touches_every_matching_entity() {
        let mut workload = QueryIter::with_ops(64);
        workload.setup();

        let before: Vec<(Health, Ideology)> = workload
            .world
            .query_mut::<(&Health, &Ideology)>()
            .into_iter()
            .map(|(_, (h, i))| (*h, *i))
            .collect();

        workload.run();

        let after: Vec<(Health, Ideology)> = workload
            .world
            .query_mut::<(&Health, &Ideology)>()
            .into_iter()
            .map(|(_, (h, i))| (*h, *i))
            .collect();

        assert_eq!(before.len(), 64);
        for ((h0, i0), (h1, i1)) in before.iter().zip(after.iter()) {
            assert_eq!(h1.value, h0.value + 1);
            assert_eq!(i1.color, i0.color + 1);
            assert_eq!(i1.drift_speed, i0.drift_speed + 1);
            assert_eq!(i1.stability, i0.stability);
        }
    }

    #[test]
    fn repeated_setup_rebuilds_identical_worlds() {
        let mut workload = QueryIter::with_ops(32);
        workload.setup();
        let first: Vec<Health> = workload
            .world
            .query_mut::<&Health>()
            .into_iter()
            .map(|(_, h)| *h)
            .collect();

        workload.run();
        workload.teardown();
        workload.setup();
        let second: Vec<Health> = workload
            .world
            .query_mut::<&Health>()
            .into_iter()
            .map(|(_, h)| *h)
            .collect();

        assert_eq!(first, second);
    }
}

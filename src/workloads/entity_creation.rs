//! Entity-creation workloads.
//!
//! Every cycle gets a fresh `hecs::World` from `setup`, so measured runs
//! always spawn into an empty engine. The timed region covers only the
//! spawn loop itself.

use hecs::World;
use std::hint::black_box;

use crate::components::archetype_bundle;
use crate::sampler::{ITERATIONS, Workload};

/// Spawns empty entities, one `World::spawn` call per operation.
pub struct CreateEmpty {
    world: World,
    ops: usize,
}

impl CreateEmpty {
    pub fn new() -> Self {
        Self::with_ops(ITERATIONS)
    }

    pub fn with_ops(ops: usize) -> Self {
        Self {
            world: World::new(),
            ops,
        }
    }
}

impl Default for CreateEmpty {
    fn default() -> Self {
        Self::new()
    }
}

impl Workload for CreateEmpty {
    fn name(&self) -> &'static str {
        "create"
    }

    fn description(&self) -> &'static str {
        "spawn entities with no components"
    }

    fn ops_per_run(&self) -> usize {
        self.ops
    }

    fn setup(&mut self) {
        // Replacing the world drops the previous cycle's entities, so the
        // default no-op teardown is enough here.
        self.world = World::new();
    }

    fn run(&mut self) {
        for _ in 0..self.ops {
            black_box(self.world.spawn(()));
        }
    }
}

/// Spawns entities carrying the two-component bundle, one at a time.
pub struct CreateWithComponents {
    world: World,
    ops: usize,
}

impl CreateWithComponents {
    pub fn new() -> Self {
        Self::with_ops(ITERATIONS)
    }

    pub fn with_ops(ops: usize) -> Self {
        Self {
            world: World::new(),
            ops,
        }
    }
}

impl Default for CreateWithComponents {
    fn default() -> Self {
        Self::new()
    }
}

impl Workload for CreateWithComponents {
    fn name(&self) -> &'static str {
        "createWith2Components"
    }

    fn description(&self) -> &'static str {
        "spawn entities with Health + Ideology"
    }

    fn ops_per_run(&self) -> usize {
        self.ops
    }

    fn setup(&mut self) {
        self.world = World::new();
    }

    fn run(&mut self) {
        for _ in 0..self.ops {
            black_box(self.world.spawn(archetype_bundle()));
        }
    }

    fn teardown(&mut self) {
        self.world.clear();
    }
}

/// Spawns the same bundles through the engine's bulk path,
/// `World::spawn_batch`.
pub struct CreateBatch {
    world: World,
    ops: usize,
}

impl CreateBatch {
    pub fn new() -> Self {
        Self::with_ops(ITERATIONS)
    }

    pub fn with_ops(ops: usize) -> Self {
        Self {
            world: World::new(),
            ops,
        }
    }
}

impl Default for CreateBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Workload for CreateBatch {
    fn name(&self) -> &'static str {
        "createWith2ComponentsBatch"
    }

    fn description(&self) -> &'static str {
        "spawn Health + Ideology bundles via spawn_batch"
    }

    fn ops_per_run(&self) -> usize {
        self.ops
    }

    fn setup(&mut self) {
        self.world = World::new();
    }

    fn run(&mut self) {
        // The batch iterator spawns lazily; drain it so every entity exists
        // inside the timed region.
        self.world
            .spawn_batch((0..self.ops).map(|_| archetype_bundle()))
            .for_each(|entity| {
                black_box(entity);
            });
    }

    fn teardown(&mut self) {
        self.world.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Health, Ideology};

    #[test]
    fn create_empty_spawns_every_entity() {
        let mut workload = CreateEmpty::with_ops(128);
        workload.setup();
        workload.run();
        assert_eq!(workload.world.len(), 128);
        workload.teardown();
    }

    #[test]
    fn setup_resets_the_world_between_cycles() {
        let mut workload = CreateEmpty::with_ops(64);
        for _ in 0..3 {
            workload.setup();
            workload.run();
            workload.teardown();
        }
        workload.setup();
        assert_eq!(workload.world.len(), 0);
    }

    #[test]
    fn create_with_components_attaches_both() {
        let mut workload = CreateWithComponents::with_ops(32);
        workload.setup();
        workload.run();

        let archetype_size = workload
            .world
            .query_mut::<(&Health, &Ideology)>()
            .into_iter()
            .count();
        assert_eq!(archetype_size, 32);
        workload.teardown();
        assert_eq!(workload.world.len(), 0);
    }

    #[test]
    fn batch_spawn_matches_one_at_a_time() {
        let mut batched = CreateBatch::with_ops(256);
        batched.setup();
        batched.run();

        let mut single = CreateWithComponents::with_ops(256);
        single.setup();
        single.run();

        assert_eq!(batched.world.len(), single.world.len());
        let bundles = batched
            .world
            .query_mut::<(&Health, &Ideology)>()
            .into_iter()
            .count();
        assert_eq!(bundles, 256);
    }
}

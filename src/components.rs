//! Component types attached to benchmark entities.
//!
//! These are plain data; `hecs` accepts any `Send + Sync + 'static` type as
//! a component. Two components of different sizes give the creation and
//! query workloads a small archetype to exercise.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Scalar health value (4 bytes).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Health {
    pub value: i32,
}

/// Faction ideology state (12 bytes).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ideology {
    pub color: i32,
    pub drift_speed: i32,
    pub stability: i32,
}

/// The fixed two-component bundle spawned by the creation workloads.
pub fn archetype_bundle() -> (Health, Ideology) {
    (
        Health { value: 100 },
        Ideology {
            color: 0xFF_0000,
            drift_speed: 10,
            stability: 50,
        },
    )
}

/// Produces randomized bundles from a fixed seed, so populated worlds are
/// identical across runs and processes.
pub struct BundleFactory {
    rng: ChaCha8Rng,
}

impl BundleFactory {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn bundle(&mut self) -> (Health, Ideology) {
        let rng = &mut self.rng;
        (
            Health {
                value: rng.gen_range(1..=100),
            },
            Ideology {
                color: rng.gen_range(0..=0xFF_FF_FF),
                drift_speed: rng.gen_range(1..=20),
                stability: rng.gen_range(0..=100),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_is_deterministic_for_a_seed() {
        let mut a = BundleFactory::with_seed(12345);
        let mut b = BundleFactory::with_seed(12345);
        for _ in 0..100 {
            assert_eq!(a.bundle(), b.bundle());
        }
    }

    #[test]
    fn factory_values_stay_in_range() {
        let mut factory = BundleFactory::with_seed(7);
        for _ in 0..1000 {
            let (health, ideology) = factory.bundle();
            assert!((1..=100).contains(&health.value));
            assert!((0..=0xFF_FF_FF).contains(&ideology.color));
            assert!((1..=20).contains(&ideology.drift_speed));
            assert!((0..=100).contains(&ideology.stability));
        }
    }
}

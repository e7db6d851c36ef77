//! Randomness for the cosmetic spin overshoot.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of unit samples in `[0, 1)` used to scale the random overshoot.
pub trait OvershootSource {
    fn next_unit(&mut self) -> f32;
}

/// Adapter over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngOvershoot<R>(pub R);

impl RngOvershoot<SmallRng> {
    pub fn from_os_rng() -> Self {
        Self(SmallRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> OvershootSource for RngOvershoot<R> {
    fn next_unit(&mut self) -> f32 {
        self.0.random::<f32>()
    }
}

/// Always returns the same sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedOvershoot(pub f32);

impl OvershootSource for FixedOvershoot {
    fn next_unit(&mut self) -> f32 {
        self.0
    }
}

impl<T: OvershootSource + ?Sized> OvershootSource for Box<T> {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Deterministic per-session randomness. The seed is kept around so a
/// session can be reproduced after the fact.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Uniformly random in-bounds cell of a `width` x `height` grid.
    pub fn random_point(&mut self, width: i32, height: i32) -> Point {
        Point::new(self.random_range(0..width), self.random_range(0..height))
    }
}

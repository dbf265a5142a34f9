//! Input vectors for the dot product scenarios.
//!
//! Generators are explicit handles: nothing here keeps process-wide state, so
//! tests can hand a seeded source to the runner and get the same vectors back.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies two vectors of equal length.
pub trait VectorSource {
    /// Draw two independent vectors of length `n`.
    fn generate(&mut self, n: usize) -> (Vec<f64>, Vec<f64>);
}

/// Elements drawn independently and uniformly from `[0, 1)`.
pub struct UniformSource {
    rng: StdRng,
}

impl UniformSource {
    /// Reproducible source: the same seed always yields the same vectors.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    fn vector(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.rng.random::<f64>()).collect()
    }
}

impl VectorSource for UniformSource {
    fn generate(&mut self, n: usize) -> (Vec<f64>, Vec<f64>) {
        let a = self.vector(n);
        let b = self.vector(n);
        log::debug!("generated two vectors of {} elements", n);
        (a, b)
    }
}

//! Random number generation behind a small trait.
//!
//! The reducer only ever asks for uniformly distributed integers, so the
//! seam is a single method. Production code wraps the thread-local RNG;
//! `--seed` runs and tests wrap a seeded `StdRng`.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer uniformly chosen from the closed interval `[min, max]`.
    ///
    /// Callers must guarantee `min <= max`.
    fn uniform_int(&mut self, min: u64, max: u64) -> u64;
}

/// Adapter from any `rand::Rng` to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local, non-cryptographic RNG.
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngSource<StdRng> {
    /// Deterministic RNG for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_int(&mut self, min: u64, max: u64) -> u64 {
        debug_assert!(min <= max, "empty range [{min}, {max}]");
        if min == max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

//! Uniform randomness over `[0, 1]`, injectable for deterministic tests.

use rand::Rng;

/// A source of uniformly distributed values in the closed range `[0, 1]`.
///
/// Every [`rand::Rng`] is a source, so a seeded `StdRng` gives reproducible
/// draws. Sharing one source between threads is the caller's concern.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> UniformSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random_range(0.0..=1.0)
    }
}

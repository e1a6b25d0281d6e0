//! Injectable randomness for trending selection.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Source of the random choices made during selection.
///
/// Production uses [`ThreadRandom`]; tests supply a seeded or scripted
/// implementation.
pub trait RandomSource {
    /// Index in `0..len`. Only called with `len > 0`.
    fn index(&mut self, len: usize) -> usize;

    /// `amount` distinct indices in `0..len`, `amount <= len`.
    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize>;
}

/// Thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut rand::thread_rng(), len, amount.min(len)).into_vec()
    }
}

/// Reproducible generator seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Seed a new generator.
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn sample(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.0, len, amount.min(len)).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_samples_are_distinct_and_reproducible() {
        let first = SeededRandom::new(7).sample(10, 3);
        let second = SeededRandom::new(7).sample(10, 3);
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 3);
        assert!(first.iter().all(|i| *i < 10));
    }

    #[test]
    fn sample_never_exceeds_population() {
        assert_eq!(ThreadRandom.sample(2, 5).len(), 2);
    }
}

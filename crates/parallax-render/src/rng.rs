//! Deterministic RNG wrapper using PCG32.
//!
//! Every random draw in the engine goes through this type so that the point
//! scatter stream and the noise permutation tables are pinned to one fully
//! specified algorithm, keeping output reproducible across platforms.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct SeededRng {
    inner: Pcg32,
}

impl SeededRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating it into both halves of
    /// the PCG32 state.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random index in `[0, bound]`.
    #[inline]
    pub fn next_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..=bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(43);
        let diverged = (0..10).any(|_| a.next_f64() != b.next_f64());
        assert!(diverged);
    }

    #[test]
    fn next_f64_is_half_open_unit() {
        let mut rng = SeededRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn next_index_respects_bound() {
        let mut rng = SeededRng::new(7);
        for bound in 0..20 {
            let idx = rng.next_index(bound);
            assert!(idx <= bound);
        }
    }
}

// src/services/random.rs
// DOCUMENTATION: Injectable randomness
// PURPOSE: Candidate and headline selection without an ambient global RNG

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform numbers in [0, 1)
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// floor(u * len), clamped into [0, len); `len` must be non-zero
    fn pick_index(&mut self, len: usize) -> usize {
        let u = self.next_unit();
        ((u * len as f64).floor() as usize).min(len.saturating_sub(1))
    }
}

/// `StdRng`-backed source; seed it for reproducible picks
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_pick_index_bounds() {
        assert_eq!(Fixed(0.0).pick_index(4), 0);
        assert_eq!(Fixed(0.49).pick_index(4), 1);
        assert_eq!(Fixed(0.999_999).pick_index(4), 3);
        // a misbehaving source returning 1.0 must not index past the end
        assert_eq!(Fixed(1.0).pick_index(4), 3);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        for _ in 0..16 {
            assert_eq!(a.pick_index(10), b.pick_index(10));
        }
    }

    #[test]
    fn test_every_index_reachable() {
        let mut rng = SeededRandom::from_seed(7);
        let mut seen = [0usize; 6];
        for _ in 0..6000 {
            let index = rng.pick_index(seen.len());
            assert!(index < seen.len());
            seen[index] += 1;
        }
        assert!(seen.iter().all(|&count| count > 0), "{:?}", seen);
    }
}

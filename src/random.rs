/*
 * Random Module
 *
 * Owns the random source used to size new boxes. The generator is seeded
 * once (from OS entropy in the app, from a fixed seed in tests) and lives as
 * long as the simulation loop.
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SandboxError;

pub struct RandomGenerator {
    rng: StdRng,
}

impl RandomGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in the closed interval `[min, max]`.
    pub fn random_int(&mut self, min: i32, max: i32) -> Result<i32, SandboxError> {
        if min > max {
            return Err(SandboxError::InvalidRange { min, max });
        }
        Ok(self.rng.gen_range(min..=max))
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_range_and_look_uniform() {
        let mut rng = RandomGenerator::from_seed(0x5eed);
        let (min, max) = (4, 20);
        let draws = 10_000;
        let bins = (max - min + 1) as usize;
        let mut counts = vec![0usize; bins];

        for _ in 0..draws {
            let r = rng.random_int(min, max).unwrap();
            assert!((min..=max).contains(&r), "{r} out of range");
            counts[(r - min) as usize] += 1;
        }

        let expected = draws as f64 / bins as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();

        // 16 degrees of freedom; 50 sits far beyond the 0.1% critical value.
        assert!(chi_square < 50.0, "chi-square {chi_square} counts {counts:?}");
        assert!(counts.iter().all(|&c| c > 0));
    }

    #[test]
    fn single_value_range() {
        let mut rng = RandomGenerator::from_seed(1);
        for _ in 0..32 {
            assert_eq!(rng.random_int(7, 7), Ok(7));
        }
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut rng = RandomGenerator::from_seed(1);
        assert_eq!(
            rng.random_int(20, 4),
            Err(SandboxError::InvalidRange { min: 20, max: 4 })
        );
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomGenerator::from_seed(42);
        let mut b = RandomGenerator::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.random_int(4, 20), b.random_int(4, 20));
        }
    }
}

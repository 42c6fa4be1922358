//! Thread-local RNG adapter.

use rand::Rng;

use crate::domain::RandomPort;

/// Random values backed by `rand::thread_rng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Creates the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RandomPort for ThreadRandom {
    fn index(&self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..upper)
    }

    fn amount(&self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_stay_in_range() {
        let random = ThreadRandom::new();
        for _ in 0..100 {
            assert!(random.index(5) < 5);
            let amount = random.amount(10.0, 20.0);
            assert!((10.0..=20.0).contains(&amount));
        }
        assert_eq!(random.index(0), 0);
        assert!((random.amount(3.0, 1.0) - 3.0).abs() < f64::EPSILON);
    }
}

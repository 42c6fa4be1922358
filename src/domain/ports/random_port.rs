//! Random value port definition.

/// Port for randomized mock values.
pub trait RandomPort: Send + Sync {
    /// Returns an index in `0..upper`. `upper` must be positive.
    fn index(&self, upper: usize) -> usize;

    /// Returns an amount in `min..=max`.
    fn amount(&self, min: f64, max: f64) -> f64;
}

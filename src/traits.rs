//! Core traits for streaming accumulators
//!
//! Every accumulator implements the base [`Accumulator`] trait. Accumulators
//! that track the first two moments additionally implement [`Moments`].

use core::fmt::Debug;

use crate::math;

/// Error during accumulator merge operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// The combined observation count does not fit in a `u64`
    CountOverflow {
        left: u64,
        right: u64,
    },
}

impl core::fmt::Display for MergeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MergeError::CountOverflow { left, right } => {
                write!(f, "count overflow: {} + {} exceeds u64::MAX", left, right)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MergeError {}

/// Core trait for all streaming accumulators
///
/// There is deliberately no `clear`: start over with a fresh instance.
pub trait Accumulator: Clone + Debug {
    /// Incorporate one observation
    fn update(&mut self, value: f64);

    /// Merge another accumulator into this one
    ///
    /// On error `self` is left unchanged.
    fn merge(&mut self, other: &Self) -> Result<(), MergeError>;

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of observations incorporated
    fn count(&self) -> u64;

    /// Check if no observation has been incorporated yet
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Accumulators tracking mean and variance
///
/// "No data" is reported with NaN rather than zero, so callers can test
/// with [`f64::is_nan`].
pub trait Moments: Accumulator {
    /// Arithmetic mean, NaN when empty
    fn mean(&self) -> f64;

    /// Population variance (divides by N), NaN when empty
    fn variance(&self) -> f64;

    /// Unbiased sample variance (divides by N - 1), NaN with fewer than two
    /// observations
    fn sample_variance(&self) -> f64;

    /// Population standard deviation
    fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Sample standard deviation
    fn sample_stddev(&self) -> f64 {
        math::sqrt(self.sample_variance())
    }
}

//! Running mean and variance
//!
//! Computes streaming mean and variance using Welford's numerically stable
//! online algorithm. Supports merging for distributed computation.

use crate::traits::{Accumulator, MergeError, Moments};

/// Running mean and variance using Welford's algorithm
///
/// Tracks the observation count, the running mean and the running sum of
/// squared deviations from the mean (M2) with O(1) memory. Accumulating a
/// plain sum and sum of squares cancels catastrophically for large inputs;
/// Welford's recurrence does not.
///
/// Queries made before any observation return NaN, never zero.
///
/// `OnlineVariance` is not synchronized. Wrap it in a lock to share it
/// between threads.
///
/// # Example
///
/// ```
/// use streamvar::OnlineVariance;
///
/// let mut v = OnlineVariance::new();
/// assert!(v.mean().is_nan());
///
/// for value in [1.0, 2.0, 3.0] {
///     v.update(value);
/// }
///
/// assert_eq!(v.count(), 3);
/// assert_eq!(v.mean(), 2.0);
/// assert!((v.variance() - 2.0 / 3.0).abs() < 1e-15);
/// assert_eq!(v.sample_variance(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OnlineVariance {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from mean (M2 in Welford's algorithm)
    m2: f64,
}

impl OnlineVariance {
    /// Create a new empty accumulator
    pub const fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    /// Add a value
    ///
    /// Any float is accepted. NaN and infinite values are not filtered and
    /// propagate through the arithmetic.
    #[inline]
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        // second delta uses the updated mean
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Get the number of values
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the mean, NaN if no value has been added
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// Get the population variance
    ///
    /// Divides M2 by N. With no values this is `0.0 / 0.0`, which is NaN.
    /// Use [`sample_variance`](Self::sample_variance) if the data is a sample.
    pub fn variance(&self) -> f64 {
        self.m2 / self.count as f64
    }

    /// Get the sample variance
    ///
    /// This is the unbiased estimator (Bessel's correction), dividing M2 by
    /// N - 1. NaN with no values. With one value M2 is exactly zero, so the
    /// result is `0.0 / 0.0`, also NaN.
    pub fn sample_variance(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        self.m2 / (self.count - 1) as f64
    }

    /// Get the population standard deviation
    pub fn stddev(&self) -> f64 {
        Moments::stddev(self)
    }

    /// Get the sample standard deviation
    pub fn sample_stddev(&self) -> f64 {
        Moments::sample_stddev(self)
    }

    /// Get the sum of squared deviations from the mean
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Get the sum of all values
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }

    /// Merge with another accumulator using the parallel algorithm
    ///
    /// Uses Chan et al.'s pairwise update. Fails without modifying `self`
    /// if the combined count overflows.
    pub fn merge_stats(&mut self, other: &Self) -> Result<(), MergeError> {
        if other.count == 0 {
            return Ok(());
        }

        if self.count == 0 {
            *self = *other;
            return Ok(());
        }

        let combined_count =
            self.count
                .checked_add(other.count)
                .ok_or(MergeError::CountOverflow {
                    left: self.count,
                    right: other.count,
                })?;

        let n = combined_count as f64;
        let delta = other.mean - self.mean;

        self.mean += delta * (other.count as f64 / n);
        self.m2 += other.m2 + delta * delta * (self.count as f64 * other.count as f64 / n);
        self.count = combined_count;

        Ok(())
    }
}

impl Accumulator for OnlineVariance {
    fn update(&mut self, value: f64) {
        OnlineVariance::update(self, value);
    }

    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        let (left, right) = (self.count, other.count);
        match self.merge_stats(other) {
            Ok(()) => {
                trace!("merged variance accumulators: {} + {} observations", left, right);
                Ok(())
            }
            Err(err) => {
                warn!("variance merge rejected: {}", err);
                Err(err)
            }
        }
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl Moments for OnlineVariance {
    fn mean(&self) -> f64 {
        OnlineVariance::mean(self)
    }

    fn variance(&self) -> f64 {
        OnlineVariance::variance(self)
    }

    fn sample_variance(&self) -> f64 {
        OnlineVariance::sample_variance(self)
    }
}

impl Extend<f64> for OnlineVariance {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.update(value));
    }
}

impl<'a> Extend<&'a f64> for OnlineVariance {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        iter.into_iter().for_each(|&value| self.update(value));
    }
}

impl FromIterator<f64> for OnlineVariance {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OnlineVariance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use super::float_repr::Float;
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("OnlineVariance", 3)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("mean", &Float(self.mean))?;
        state.serialize_field("m2", &Float(self.m2))?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OnlineVariance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use super::float_repr::Float;

        #[derive(serde::Deserialize)]
        struct VarianceData {
            count: u64,
            mean: Float,
            m2: Float,
        }

        let data = VarianceData::deserialize(deserializer)?;
        Ok(OnlineVariance {
            count: data.count,
            mean: data.mean.0,
            m2: data.m2.0,
        })
    }
}

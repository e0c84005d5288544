//! Running mean and variance with extremes

use super::OnlineVariance;
use crate::traits::{Accumulator, MergeError, Moments};

/// Running mean, variance, minimum and maximum
///
/// Owns an [`OnlineVariance`] for the moments and tracks the extremes next to
/// it. Before the first update [`min`](Self::min) is `+inf` and
/// [`max`](Self::max) is `-inf`, so the first observation always replaces
/// both. Use [`min_max`](Self::min_max) to get `None` instead of the
/// sentinels.
///
/// Fields are private and [`Default`] goes through [`new`](Self::new), so an
/// instance with zeroed extremes cannot be built.
///
/// # Example
///
/// ```
/// use streamvar::OnlineVarianceMinMax;
///
/// let mut v = OnlineVarianceMinMax::new();
/// assert_eq!(v.min(), f64::INFINITY);
/// assert_eq!(v.max(), f64::NEG_INFINITY);
///
/// for value in [1.0, 2.0, 3.0] {
///     v.update(value);
/// }
///
/// assert_eq!(v.mean(), 2.0);
/// assert_eq!(v.sample_variance(), 1.0);
/// assert_eq!(v.min_max(), Some((1.0, 3.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OnlineVarianceMinMax {
    moments: OnlineVariance,
    min: f64,
    max: f64,
}

impl Default for OnlineVarianceMinMax {
    fn default() -> Self {
        Self::new()
    }
}

impl OnlineVarianceMinMax {
    /// Create a new empty accumulator
    pub const fn new() -> Self {
        Self {
            moments: OnlineVariance::new(),
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a value
    #[inline]
    pub fn update(&mut self, value: f64) {
        self.moments.update(value);
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Get the number of values
    pub fn count(&self) -> u64 {
        self.moments.count()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }

    /// Get the mean, NaN if no value has been added
    pub fn mean(&self) -> f64 {
        self.moments.mean()
    }

    /// Get the population variance, NaN if no value has been added
    pub fn variance(&self) -> f64 {
        self.moments.variance()
    }

    /// Get the sample variance, NaN with fewer than two values
    pub fn sample_variance(&self) -> f64 {
        self.moments.sample_variance()
    }

    /// Get the population standard deviation
    pub fn stddev(&self) -> f64 {
        self.moments.stddev()
    }

    /// Get the sample standard deviation
    pub fn sample_stddev(&self) -> f64 {
        self.moments.sample_stddev()
    }

    /// Get the sum of all values
    pub fn sum(&self) -> f64 {
        self.moments.sum()
    }

    /// Get the minimum value, `+inf` if no value has been added
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the maximum value, `-inf` if no value has been added
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get `(min, max)`, or `None` if no non-NaN value has been added
    pub fn min_max(&self) -> Option<(f64, f64)> {
        // still at the sentinels when empty or when every value was NaN
        if self.min > self.max {
            None
        } else {
            Some((self.min, self.max))
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> Option<f64> {
        self.min_max().map(|(min, max)| max - min)
    }

    /// Borrow the underlying moment accumulator
    pub fn inner(&self) -> &OnlineVariance {
        &self.moments
    }

    /// Merge with another accumulator
    ///
    /// Moments are combined with [`OnlineVariance::merge_stats`]; extremes
    /// take the smaller minimum and larger maximum.
    pub fn merge_stats(&mut self, other: &Self) -> Result<(), MergeError> {
        self.moments.merge_stats(&other.moments)?;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        Ok(())
    }
}

impl From<OnlineVarianceMinMax> for OnlineVariance {
    fn from(v: OnlineVarianceMinMax) -> Self {
        v.moments
    }
}

impl Accumulator for OnlineVarianceMinMax {
    fn update(&mut self, value: f64) {
        OnlineVarianceMinMax::update(self, value);
    }

    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        let (left, right) = (self.count(), other.count());
        match self.merge_stats(other) {
            Ok(()) => {
                trace!(
                    "merged min/max accumulators: {} + {} observations, range [{}, {}]",
                    left,
                    right,
                    self.min,
                    self.max
                );
                Ok(())
            }
            Err(err) => {
                warn!("min/max merge rejected: {}", err);
                Err(err)
            }
        }
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.moments.count()
    }
}

impl Moments for OnlineVarianceMinMax {
    fn mean(&self) -> f64 {
        self.moments.mean()
    }

    fn variance(&self) -> f64 {
        self.moments.variance()
    }

    fn sample_variance(&self) -> f64 {
        self.moments.sample_variance()
    }
}

impl Extend<f64> for OnlineVarianceMinMax {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.update(value));
    }
}

impl<'a> Extend<&'a f64> for OnlineVarianceMinMax {
    fn extend<I: IntoIterator<Item = &'a f64>>(&mut self, iter: I) {
        iter.into_iter().for_each(|&value| self.update(value));
    }
}

impl FromIterator<f64> for OnlineVarianceMinMax {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OnlineVarianceMinMax {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use super::float_repr::Float;
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("OnlineVarianceMinMax", 3)?;
        state.serialize_field("moments", &self.moments)?;
        state.serialize_field("min", &Float(self.min))?;
        state.serialize_field("max", &Float(self.max))?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OnlineVarianceMinMax {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use super::float_repr::Float;

        #[derive(serde::Deserialize)]
        struct MinMaxData {
            moments: OnlineVariance,
            min: Float,
            max: Float,
        }

        let data = MinMaxData::deserialize(deserializer)?;
        Ok(OnlineVarianceMinMax {
            moments: data.moments,
            min: data.min.0,
            max: data.max.0,
        })
    }
}

//! Single-pass mean and variance
//!
//! This module provides accumulators that compute descriptive statistics
//! over a stream in one pass with constant memory, without keeping the
//! observations.
//!
//! # Accumulators
//!
//! - [`OnlineVariance`]: count, mean, population and sample variance
//! - [`OnlineVarianceMinMax`]: the above plus minimum and maximum
//!
//! # Example
//!
//! ```
//! use streamvar::variance::OnlineVarianceMinMax;
//!
//! let mut stats = OnlineVarianceMinMax::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     stats.update(value);
//! }
//!
//! println!("Mean: {}", stats.mean());
//! println!("Stddev: {}", stats.stddev());
//! println!("Min: {}", stats.min());
//! println!("Max: {}", stats.max());
//! ```

#[cfg(feature = "serde")]
mod float_repr;
mod min_max;
mod online;

pub use min_max::OnlineVarianceMinMax;
pub use online::OnlineVariance;

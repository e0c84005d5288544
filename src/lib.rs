//! # Streamvar
//!
//! Single-pass mean, variance, minimum and maximum for streams of `f64`.
//!
//! Streamvar keeps a count, a running mean and a running sum of squared
//! deviations (Welford's algorithm) instead of the observations themselves,
//! so every update and every query is O(1) in time and memory.
//!
//! ## Features
//!
//! - **Numerically stable**: Welford's recurrence, no sum-of-squares cancellation
//! - **Sentinel results**: NaN before the first observation, never a fake zero
//! - **Extremes**: optional min/max tracking via [`OnlineVarianceMinMax`]
//! - **Mergeable**: combine partial accumulators with Chan et al.'s formula
//!
//! ## Quick Start
//!
//! ```rust
//! use streamvar::prelude::*;
//!
//! let mut latency = OnlineVarianceMinMax::new();
//! for ms in [12.0, 15.0, 11.0, 40.0] {
//!     latency.update(ms);
//! }
//! println!(
//!     "mean {:.1}ms, stddev {:.1}ms, max {}ms",
//!     latency.mean(),
//!     latency.stddev(),
//!     latency.max()
//! );
//! ```
//!
//! ## Distributed Computing
//!
//! Accumulators implement the [`Accumulator`](traits::Accumulator) trait,
//! which includes a `merge` operation:
//!
//! ```rust
//! use streamvar::OnlineVariance;
//! use streamvar::traits::Accumulator;
//!
//! let mut worker1 = OnlineVariance::new();
//! let mut worker2 = OnlineVariance::new();
//!
//! worker1.update(1.0);
//! worker2.update(3.0);
//!
//! worker1.merge(&worker2).unwrap();
//! assert_eq!(worker1.mean(), 2.0);
//! ```
//!
//! ## Thread Safety
//!
//! Accumulators are plain values with no internal locking. Share one between
//! threads behind a `Mutex` or merge per-thread accumulators at the end.
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization
//! - `log`: Log merges through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

mod math;

pub mod traits;
pub mod variance;

pub mod prelude {
    pub use crate::traits::*;
    pub use crate::variance::{OnlineVariance, OnlineVarianceMinMax};
}

pub use variance::{OnlineVariance, OnlineVarianceMinMax};

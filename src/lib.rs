// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # entropy-binning
//!
//! Maximum-entropy binning of ordinal integer data into a fixed number of contiguous bins.
//!
//! ## Quick Start
//!
//! ```rust
//! use entropy_binning::{bin_array, bin_sequence};
//! use ndarray::array;
//!
//! // One sequence, three bins
//! let ages = [18, 19, 19, 21, 22, 22, 22, 25, 30, 31];
//! let labels = bin_sequence(&ages, 3).unwrap();
//! assert!(labels.iter().all(|&l| (0..3).contains(&l)));
//!
//! // Each row of an array binned on its own
//! let a = array![[0, 1, 2, 3], [5, 5, 6, 9]];
//! let b = bin_array(&a, 2, Some(1)).unwrap();
//! assert_eq!(b.shape(), a.shape());
//! ```
//!
//! ## Approach
//!
//! For data with a natural order (ages, counts, ranked categories) only groupings of
//! consecutive values are meaningful. Given `nbins`, the search enumerates every way of
//! splitting the observed value range `[amin, amax]` into `nbins` contiguous groups and
//! keeps the one whose bin occupancy has the highest Shannon entropy (bits), i.e. the
//! most even spread of samples over bins. Ties go to the first partition in generation
//! order, so results are reproducible.
//!
//! The search is exact and exhaustive: a range of `L` integers has `C(L-1, nbins-1)`
//! candidate partitions. [`BinningConfig::max_candidates`] bounds that cost.
//!
//! Do not use this for continuous data; quantiles give a good binning there directly.
//! Discrete non-integer data can be mapped to integers first with [`rank_encode`].
//!
//! ## Missing Values
//!
//! Floating point inputs may contain `NaN` as a missing marker; `Option<i64>` and
//! [`Value`] inputs use `None` / `Value::Missing`. Missing elements are ignored by the
//! search and stay missing in the output.
//!
//! ## Feature Flags
//!
//! - `parallel` (default): bin independent lanes of an array on the rayon thread pool.

pub mod binning;
pub mod config;
pub mod error;

pub use binning::{
    BinningOutcome, Binner, OrdinalElement, Partition, Value, bin_array, bin_sequence,
    rank_encode,
};
pub use config::BinningConfig;
pub use error::{BinningError, Result};

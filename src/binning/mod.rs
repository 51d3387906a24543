// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Binning module: the partition search core and its array adapter.

pub mod apply;
pub mod array;
pub mod combinations;
pub mod encode;
pub mod evaluate;
pub mod partition;
pub mod search;
pub mod traits;
pub mod value;

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::config::BinningConfig;
use crate::error::Result;

pub use apply::{apply_binning, apply_partition};
pub use combinations::Combinations;
pub use encode::rank_encode;
pub use evaluate::{evaluate_binning, shannon_entropy_bits};
pub use partition::{Partition, PartitionGenerator, count_partitions};
pub use search::BinningOutcome;
pub use traits::OrdinalElement;
pub use value::{Value, ValueRange};

/// Maximum-entropy binner for ordinal integer data.
///
/// Holds a [`BinningConfig`] and exposes the search on sequences and arrays.
#[derive(Debug, Clone, Default)]
pub struct Binner {
    config: BinningConfig,
}

impl Binner {
    pub fn new(config: BinningConfig) -> Self {
        Self { config }
    }

    /// Binner with default settings and `nbins` target bins.
    pub fn with_nbins(nbins: usize) -> Self {
        Self::new(BinningConfig::new(nbins))
    }

    pub fn config(&self) -> &BinningConfig {
        &self.config
    }

    /// Run the search on a sequence and return the winning partition with its score.
    pub fn search<T: OrdinalElement>(&self, a: &[T]) -> Result<BinningOutcome> {
        search::search(a, &self.config)
    }

    /// Find and apply the maximum-entropy binning of a sequence.
    pub fn bin_sequence<T: OrdinalElement>(&self, a: &[T]) -> Result<Vec<T>> {
        search::bin_values(a, &self.config)
    }

    /// Find and apply the maximum-entropy binning of an array, globally or per lane
    /// depending on the configured axis.
    pub fn bin_array<T, S, D>(&self, a: &ArrayBase<S, D>) -> Result<Array<T, D>>
    where
        T: OrdinalElement,
        S: Data<Elem = T>,
        D: Dimension,
    {
        array::bin_ndarray(a, &self.config)
    }
}

/// Find and apply the maximum-entropy binning of an integer sequence.
///
/// # Arguments
///
/// * `a` - Input sequence; every element must be integer-like or missing (`NaN`)
/// * `nbins` - Number of target bins
///
/// # Returns
///
/// The binned sequence: each non-missing element replaced by its bin label in
/// `0..nbins`, missing elements left missing.
///
/// # Example
///
/// ```rust
/// use entropy_binning::bin_sequence;
///
/// let b = bin_sequence(&[0, 0, 0, 0, 1, 1, 2, 2, 2, 2], 2).unwrap();
/// assert_eq!(b, vec![0, 0, 0, 0, 1, 1, 1, 1, 1, 1]);
/// ```
pub fn bin_sequence<T: OrdinalElement>(a: &[T], nbins: usize) -> Result<Vec<T>> {
    Binner::with_nbins(nbins).bin_sequence(a)
}

/// Find and apply the maximum-entropy binning of an integer array.
///
/// # Arguments
///
/// * `a` - Input array; every element must be integer-like or missing (`NaN`)
/// * `nbins` - Number of target bins
/// * `axis` - Axis along which to bin; if `None`, one binning is chosen from all values
///
/// # Returns
///
/// An array of the same shape holding bin labels.
pub fn bin_array<T, S, D>(
    a: &ArrayBase<S, D>,
    nbins: usize,
    axis: Option<usize>,
) -> Result<Array<T, D>>
where
    T: OrdinalElement,
    S: Data<Elem = T>,
    D: Dimension,
{
    Binner::new(BinningConfig::new(nbins).with_axis(axis)).bin_array(a)
}

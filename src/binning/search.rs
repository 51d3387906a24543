// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exhaustive maximum-entropy search over contiguous partitions.
//!
//! Every partition of the value range into `nbins` contiguous groups is scored by the
//! entropy (bits) of the resulting bin occupancy, and the highest-scoring one is applied.
//! Candidates are compared with a strict `>`, so among equally good partitions the one
//! generated first wins; the generation order is lexicographic in the cut positions.

use tracing::{debug, instrument, trace, warn};

use crate::binning::apply::{apply_binning, labels_to_elements, to_values};
use crate::binning::evaluate::score_partition;
use crate::binning::partition::{Partition, PartitionGenerator, count_partitions};
use crate::binning::traits::OrdinalElement;
use crate::binning::value::{Value, ValueCounts, ValueRange};
use crate::config::BinningConfig;
use crate::error::{BinningError, Result};

/// Candidate counts above this are logged as a warning before the search starts.
const CANDIDATE_NOTICE_THRESHOLD: u128 = 1_000_000;

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct BinningOutcome {
    /// The winning partition.
    pub partition: Partition,
    /// Entropy of the winning partition, in bits.
    pub entropy: f64,
    /// Number of candidate partitions that were scored.
    pub candidates: u128,
    /// Group label per input element; `None` where the input was missing.
    pub labels: Vec<Option<usize>>,
}

impl BinningOutcome {
    /// Labels converted into the element type `T`.
    pub fn binned<T: OrdinalElement>(&self) -> Result<Vec<T>> {
        labels_to_elements(&self.labels)
    }
}

/// Validate `a`, then search its value range for the maximum-entropy partition.
pub fn search<T: OrdinalElement>(a: &[T], config: &BinningConfig) -> Result<BinningOutcome> {
    let values = to_values(a)?;
    search_values(&values, config)
}

/// Find and apply the maximum-entropy binning of `a`, keeping its element type.
pub fn bin_values<T: OrdinalElement>(a: &[T], config: &BinningConfig) -> Result<Vec<T>> {
    let values = to_values(a)?;
    let range = ValueRange::from_values(&values)?;
    check_bin_count(config.nbins, &range)?;
    // nbins >= 1 past the bin count check
    let top = config.nbins - 1;
    if T::from_label(Some(top)).is_none() {
        return Err(BinningError::Unrepresentable { label: Some(top) });
    }
    search_values(&values, config)?.binned()
}

/// Search over already validated values.
///
/// # Errors
///
/// - `EmptyInput` if every value is missing.
/// - `InfeasibleBinCount` if `nbins` is zero or larger than the width of the value range.
/// - `TooManyCandidates` if the number of partitions exceeds `config.max_candidates`.
#[instrument(skip(values, config), fields(len = values.len(), nbins = config.nbins))]
pub fn search_values(values: &[Value], config: &BinningConfig) -> Result<BinningOutcome> {
    let nbins = config.nbins;
    let range = ValueRange::from_values(values)?;
    check_bin_count(nbins, &range)?;
    config.validate()?;

    let total = count_partitions(range.len(), nbins);
    debug!(amin = range.min, amax = range.max, candidates = ?total, "searching partitions");
    if let Some(limit) = config.max_candidates {
        match total {
            Some(n) if n <= limit => {}
            _ => {
                return Err(BinningError::TooManyCandidates {
                    candidates: total,
                    limit,
                });
            }
        }
    }
    if total.is_none_or(|n| n > CANDIDATE_NOTICE_THRESHOLD) {
        warn!(candidates = ?total, "exhaustive search over a very large candidate set");
    }

    let counts = ValueCounts::from_values(values);
    let (best, scored) = PartitionGenerator::new(range, nbins)
        .map(|partition| {
            let h = score_partition(&counts, &partition);
            trace!(%partition, entropy = h, "scored candidate");
            (partition, h)
        })
        .fold((None, 0u128), |(best, scored), (partition, h)| {
            (keep_first_max(best, partition, h), scored + 1)
        });

    let (partition, entropy) = best.ok_or(BinningError::InfeasibleBinCount {
        nbins,
        available: range.len(),
    })?;
    debug!(%partition, entropy, scored, "selected partition");

    let labels = apply_binning(values, &partition);
    Ok(BinningOutcome {
        partition,
        entropy,
        candidates: scored,
        labels,
    })
}

// Replace the incumbent only on a strictly higher score; the first candidate always wins
// over an empty incumbent, whatever its entropy.
fn keep_first_max(
    best: Option<(Partition, f64)>,
    partition: Partition,
    h: f64,
) -> Option<(Partition, f64)> {
    match best {
        Some((_, best_h)) if h <= best_h => best,
        _ => Some((partition, h)),
    }
}

fn check_bin_count(nbins: usize, range: &ValueRange) -> Result<()> {
    let available = range.len();
    if nbins == 0 || nbins as u128 > available {
        return Err(BinningError::InfeasibleBinCount { nbins, available });
    }
    Ok(())
}

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::binning::apply::apply_binning;
use crate::binning::partition::Partition;
use crate::binning::value::{Value, ValueCounts};

/// Shannon entropy in bits of the distribution given by `counts`.
///
/// Computes H = -Σ p_i log2 p_i with p_i = n_i / N. Empty groups contribute nothing
/// (0 · log2 0 is taken as 0), and an all-zero histogram has entropy 0.
pub fn shannon_entropy_bits(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let n_f = total as f64;
    let mut h = 0.0_f64;
    for &cnt in counts {
        let p = (cnt as f64) / n_f;
        if p > 0.0 {
            h -= p * p.log2();
        }
    }
    h
}

/// Histogram of group labels obtained by mapping `values` through `partition`.
///
/// The result has one slot per group; missing values are ignored.
pub fn group_counts(values: &[Value], partition: &Partition) -> Vec<usize> {
    let mut counts = vec![0usize; partition.nbins()];
    for label in apply_binning(values, partition).into_iter().flatten() {
        counts[label] += 1;
    }
    counts
}

/// Entropy (bits) of the bin occupancy obtained by applying `partition` to `values`.
pub fn evaluate_binning(values: &[Value], partition: &Partition) -> f64 {
    shannon_entropy_bits(&group_counts(values, partition))
}

/// Same histogram as [`group_counts`], read from precomputed value counts.
pub fn group_counts_from(counts: &ValueCounts, partition: &Partition) -> Vec<usize> {
    partition
        .groups()
        .map(|group| counts.count_between(*group.start(), *group.end()))
        .collect()
}

/// Same score as [`evaluate_binning`], computed without another pass over the samples.
pub fn score_partition(counts: &ValueCounts, partition: &Partition) -> f64 {
    shannon_entropy_bits(&group_counts_from(counts, partition))
}

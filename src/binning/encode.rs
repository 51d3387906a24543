// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cmp::Ordering;

use crate::error::{BinningError, Result};

/// Map discrete, ordered data to dense integer ranks.
///
/// Each element is replaced by the position of its value among the sorted distinct values,
/// so `[0.3, 0.1, 0.3, 0.7]` becomes `[1, 0, 1, 2]`. Use this to bin discrete data that is
/// not integer-valued (e.g. a grid of real numbers): rank first, then bin the ranks.
///
/// Values that are not comparable with themselves (such as `NaN`) are rejected.
pub fn rank_encode<T: PartialOrd + Copy>(data: &[T]) -> Result<Vec<i64>> {
    if let Some(index) = data.iter().position(|x| x.partial_cmp(x).is_none()) {
        return Err(BinningError::InvalidInput {
            index,
            value: f64::NAN,
        });
    }

    let mut distinct: Vec<T> = data.to_vec();
    distinct.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    distinct.dedup_by(|a, b| a == b);

    Ok(data
        .iter()
        .map(|x| distinct.partition_point(|d| d < x) as i64)
        .collect())
}

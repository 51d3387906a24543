// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::binning::partition::Partition;
use crate::binning::traits::OrdinalElement;
use crate::binning::value::Value;
use crate::error::{BinningError, Result};

/// Map each value to the label of the group containing it.
///
/// Missing values, and values outside the partitioned range, map to `None`.
pub fn apply_binning(values: &[Value], partition: &Partition) -> Vec<Option<usize>> {
    values
        .iter()
        .map(|v| v.present().and_then(|x| partition.group_of(x)))
        .collect()
}

/// Convert group labels back into the caller's element type.
pub fn labels_to_elements<T: OrdinalElement>(labels: &[Option<usize>]) -> Result<Vec<T>> {
    labels
        .iter()
        .map(|&label| T::from_label(label).ok_or(BinningError::Unrepresentable { label }))
        .collect()
}

/// Apply a known partition to a sequence of elements.
///
/// Elements are validated the same way as for the search; the output keeps the input
/// element type and length.
pub fn apply_partition<T: OrdinalElement>(a: &[T], partition: &Partition) -> Result<Vec<T>> {
    let values = to_values(a)?;
    labels_to_elements(&apply_binning(&values, partition))
}

/// Validate elements and convert them into [`Value`]s.
///
/// Fails on the first element that is not integer-like.
pub fn to_values<T: OrdinalElement>(a: &[T]) -> Result<Vec<Value>> {
    a.iter()
        .enumerate()
        .map(|(index, &x)| {
            x.to_value().ok_or(BinningError::InvalidInput {
                index,
                value: x.as_f64(),
            })
        })
        .collect()
}

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::error::{BinningError, Result};

/// A single validated sample: an integer or the missing marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    Present(i64),
    Missing,
}

impl Value {
    pub fn present(self) -> Option<i64> {
        match self {
            Value::Present(v) => Some(v),
            Value::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl From<Option<i64>> for Value {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Value::Missing, Value::Present)
    }
}

/// The closed integer interval `[amin, amax]` spanned by the non-missing values of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    pub fn new(min: i64, max: i64) -> Self {
        debug_assert!(min <= max, "range bounds out of order");
        Self { min, max }
    }

    /// Compute the range of the non-missing values.
    ///
    /// Returns `EmptyInput` when every value is missing.
    pub fn from_values(values: &[Value]) -> Result<Self> {
        let mut bounds: Option<(i64, i64)> = None;
        for v in values.iter().filter_map(|v| v.present()) {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        bounds
            .map(|(min, max)| Self { min, max })
            .ok_or(BinningError::EmptyInput)
    }

    /// Number of consecutive integers in the range (`L`); up to `2^64` for the full `i64` range.
    pub fn len(&self) -> u128 {
        u128::from(self.max.abs_diff(self.min)) + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn values(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }
}

/// Histogram of the distinct non-missing values of a sequence, stored for range-sum queries.
///
/// Values are sorted ascending; `cumulative[i]` is the number of samples whose value is
/// at most `values[i]`. Counting the samples that fall into a contiguous group is then a
/// pair of binary searches instead of a pass over the whole sequence.
#[derive(Debug, Clone)]
pub struct ValueCounts {
    values: Vec<i64>,
    cumulative: Vec<usize>,
}

impl ValueCounts {
    pub fn from_values(values: &[Value]) -> Self {
        let counts = count_frequencies(values);
        let mut sorted = Vec::with_capacity(counts.len());
        let mut cumulative = Vec::with_capacity(counts.len());
        let mut acc = 0usize;
        for (value, cnt) in counts {
            acc += cnt;
            sorted.push(value);
            cumulative.push(acc);
        }
        Self {
            values: sorted,
            cumulative,
        }
    }

    /// Total number of non-missing samples.
    pub fn total(&self) -> usize {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Number of distinct non-missing values actually observed.
    pub fn distinct(&self) -> usize {
        self.values.len()
    }

    /// Number of samples with a value in `[lo, hi]`.
    pub fn count_between(&self, lo: i64, hi: i64) -> usize {
        if lo > hi {
            return 0;
        }
        let below_lo = self.values.partition_point(|&v| v < lo);
        let upto_hi = self.values.partition_point(|&v| v <= hi);
        self.cumulative_before(upto_hi) - self.cumulative_before(below_lo)
    }

    fn cumulative_before(&self, idx: usize) -> usize {
        if idx == 0 { 0 } else { self.cumulative[idx - 1] }
    }
}

/// Count the occurrences of each non-missing value, ordered by value.
pub fn count_frequencies(values: &[Value]) -> BTreeMap<i64, usize> {
    let mut frequency_map = BTreeMap::new();
    for v in values.iter().filter_map(|v| v.present()) {
        *frequency_map.entry(v).or_insert(0) += 1;
    }
    frequency_map
}

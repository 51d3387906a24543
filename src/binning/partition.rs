// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::ops::RangeInclusive;

use crate::binning::combinations::{Combinations, binomial};
use crate::binning::value::ValueRange;
use crate::error::{BinningError, Result};

/// An ordered split of a [`ValueRange`] into contiguous, non-empty groups.
///
/// Group `i` covers `starts[i] ..= starts[i + 1] - 1` (the last group ends at the range
/// maximum). The group index is the label assigned to every value inside the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    starts: Vec<i64>,
    max: i64,
}

impl Partition {
    /// The trivial partition with the whole range in one group.
    pub fn single(range: ValueRange) -> Self {
        Self {
            starts: vec![range.min],
            max: range.max,
        }
    }

    /// Split `range` before each of the given cut positions.
    ///
    /// A cut at position `c` (with `1 <= c < range.len()`) separates `range.min + c - 1`
    /// from `range.min + c`. Cuts must be strictly increasing.
    pub fn from_cuts(range: ValueRange, cuts: &[usize]) -> Self {
        debug_assert!(cuts.windows(2).all(|w| w[0] < w[1]));
        let mut starts = Vec::with_capacity(cuts.len() + 1);
        starts.push(range.min);
        starts.extend(cuts.iter().map(|&c| range.min + c as i64));
        Self {
            starts,
            max: range.max,
        }
    }

    /// Build a partition from explicit groups.
    ///
    /// Groups must be non-empty and each must start right after the previous one ends.
    pub fn from_groups(groups: &[RangeInclusive<i64>]) -> Result<Self> {
        let Some(last) = groups.last() else {
            return Err(BinningError::InvalidConfig(
                "a partition needs at least one group".to_string(),
            ));
        };
        for (i, group) in groups.iter().enumerate() {
            if group.is_empty() {
                return Err(BinningError::InvalidConfig(format!(
                    "group {i} ({}..={}) is empty",
                    group.start(),
                    group.end()
                )));
            }
        }
        for (i, pair) in groups.windows(2).enumerate() {
            if pair[0].end().checked_add(1) != Some(*pair[1].start()) {
                return Err(BinningError::InvalidConfig(format!(
                    "groups {i} and {} are not contiguous",
                    i + 1
                )));
            }
        }
        Ok(Self {
            starts: groups.iter().map(|g| *g.start()).collect(),
            max: *last.end(),
        })
    }

    /// Number of groups.
    pub fn nbins(&self) -> usize {
        self.starts.len()
    }

    /// The full range covered by the partition.
    pub fn range(&self) -> ValueRange {
        ValueRange::new(self.starts[0], self.max)
    }

    /// Values covered by group `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.nbins()`.
    pub fn group(&self, index: usize) -> RangeInclusive<i64> {
        let end = match self.starts.get(index + 1) {
            Some(&next) => next - 1,
            None => self.max,
        };
        self.starts[index]..=end
    }

    pub fn groups(&self) -> impl Iterator<Item = RangeInclusive<i64>> + '_ {
        (0..self.nbins()).map(|i| self.group(i))
    }

    /// Group label of `value`, or `None` if it lies outside the partitioned range.
    pub fn group_of(&self, value: i64) -> Option<usize> {
        if value < self.starts[0] || value > self.max {
            return None;
        }
        Some(self.starts.partition_point(|&s| s <= value) - 1)
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, group) in self.groups().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if group.start() == group.end() {
                write!(f, "[{}]", group.start())?;
            } else {
                write!(f, "[{}..={}]", group.start(), group.end())?;
            }
        }
        write!(f, "}}")
    }
}

/// Lazy sequence of every contiguous partition of a range into `nbins` groups.
///
/// A partition is fixed by choosing `nbins - 1` of the `L - 1` inner boundaries of the
/// range; the boundaries are enumerated as lexicographically ordered combinations, so
/// `[0, 2]` into two groups yields `{[0], [1..=2]}` before `{[0..=1], [2]}`.
///
/// The generator is empty when `nbins` is zero or exceeds the range length.
#[derive(Debug, Clone)]
pub struct PartitionGenerator {
    range: ValueRange,
    cuts: Option<Combinations>,
}

impl PartitionGenerator {
    pub fn new(range: ValueRange, nbins: usize) -> Self {
        let boundaries = usize::try_from(range.len() - 1).unwrap_or(usize::MAX);
        let cuts = (nbins >= 1).then(|| Combinations::new(boundaries, nbins - 1));
        Self { range, cuts }
    }

    /// Number of partitions this generator yields in total.
    pub fn candidate_count(&self) -> Option<u128> {
        match &self.cuts {
            Some(cuts) => cuts.total(),
            None => Some(0),
        }
    }
}

impl Iterator for PartitionGenerator {
    type Item = Partition;

    fn next(&mut self) -> Option<Self::Item> {
        let ixs = self.cuts.as_mut()?.next()?;
        // Combination indices are 0-based over the boundaries; cut positions start at 1.
        let cuts: Vec<usize> = ixs.into_iter().map(|i| i + 1).collect();
        Some(Partition::from_cuts(self.range, &cuts))
    }
}

/// Number of contiguous partitions of a range of `range_len` integers into `nbins` groups,
/// i.e. `C(L - 1, nbins - 1)`. Returns `None` on overflow.
pub fn count_partitions(range_len: u128, nbins: usize) -> Option<u128> {
    if nbins == 0 || nbins as u128 > range_len {
        return Some(0);
    }
    binomial(u64::try_from(range_len - 1).ok()?, nbins as u64 - 1)
}

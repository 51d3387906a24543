// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Failure modes of the binning entry points.
///
/// All variants describe caller-input contract violations. They are fatal to the
/// call that detected them and are returned before any partial result is produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BinningError {
    /// A non-missing element is not an integer (fractional, infinite, or outside `i64`).
    #[error("input has to be integer or integer-like: element {index} is {value}")]
    InvalidInput { index: usize, value: f64 },

    /// Zero bins requested, or more bins than integer values in `[amin, amax]`.
    #[error("cannot split {available} integer value(s) into {nbins} contiguous non-empty bins")]
    InfeasibleBinCount { nbins: usize, available: u128 },

    /// The sequence holds no non-missing element, so no value range exists.
    #[error("input contains no non-missing values")]
    EmptyInput,

    /// The exhaustive search would score more candidates than the configured limit.
    /// `candidates` is `None` when the count does not fit in a `u128`.
    #[error("{} candidate partitions exceed the limit of {limit}", fmt_candidates(.candidates))]
    TooManyCandidates {
        candidates: Option<u128>,
        limit: u128,
    },

    /// A group label, or the missing marker (`None`), does not fit the caller's element type.
    #[error("{} cannot be represented by the element type", fmt_label(.label))]
    Unrepresentable { label: Option<usize> },

    #[error("axis {axis} is out of bounds for an array of dimension {ndim}")]
    AxisOutOfBounds { axis: usize, ndim: usize },

    #[error("shape error: {0}")]
    Shape(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn fmt_candidates(candidates: &Option<u128>) -> String {
    match candidates {
        Some(n) => n.to_string(),
        None => "more than u128::MAX".to_string(),
    }
}

fn fmt_label(label: &Option<usize>) -> String {
    match label {
        Some(l) => format!("label {l}"),
        None => "the missing marker".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, BinningError>;

// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{BinningError, Result};

/// Default upper bound on the number of candidate partitions a single search may score.
pub const DEFAULT_MAX_CANDIDATES: u128 = 100_000_000;

/// Configuration for a [`Binner`](crate::binning::Binner).
#[derive(Debug, Clone, PartialEq)]
pub struct BinningConfig {
    /// Number of target bins. Default: 2.
    pub nbins: usize,
    /// Axis along which each 1D lane is binned independently.
    /// None flattens the array and picks one global binning.
    pub axis: Option<usize>,
    /// Maximum number of candidate partitions to score. None means unlimited.
    pub max_candidates: Option<u128>,
    /// Bin independent lanes on the rayon thread pool (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            nbins: 2,
            axis: None,
            max_candidates: Some(DEFAULT_MAX_CANDIDATES),
            parallel: true,
        }
    }
}

impl BinningConfig {
    #[must_use]
    pub fn new(nbins: usize) -> Self {
        Self {
            nbins,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_nbins(mut self, nbins: usize) -> Self {
        self.nbins = nbins;
        self
    }

    #[must_use]
    pub const fn with_axis(mut self, axis: Option<usize>) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub const fn with_max_candidates(mut self, limit: Option<u128>) -> Self {
        self.max_candidates = limit;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InfeasibleBinCount` if `nbins` is zero and `InvalidConfig` if
    /// `max_candidates` is set to zero.
    pub fn validate(&self) -> Result<()> {
        if self.nbins == 0 {
            return Err(BinningError::InfeasibleBinCount {
                nbins: 0,
                available: 0,
            });
        }
        if self.max_candidates == Some(0) {
            return Err(BinningError::InvalidConfig(
                "max_candidates must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

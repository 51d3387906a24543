// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array, ArrayBase, Axis, Data, Dimension};
use tracing::instrument;

use crate::binning::search::bin_values;
use crate::binning::traits::OrdinalElement;
use crate::config::BinningConfig;
use crate::error::{BinningError, Result};

/// Bin an N-dimensional array.
///
/// With `config.axis == None` the array is flattened (logical order), a single binning is
/// chosen from all its values, and the result is reshaped back. With `Some(axis)` every
/// 1D lane along `axis` is searched and binned independently.
#[instrument(skip(a, config), fields(shape = ?a.shape(), nbins = config.nbins, axis = ?config.axis))]
pub fn bin_ndarray<T, S, D>(a: &ArrayBase<S, D>, config: &BinningConfig) -> Result<Array<T, D>>
where
    T: OrdinalElement,
    S: Data<Elem = T>,
    D: Dimension,
{
    let Some(axis) = config.axis else {
        let flat: Vec<T> = a.iter().copied().collect();
        let binned = bin_values(&flat, config)?;
        return Array::from_shape_vec(a.raw_dim(), binned)
            .map_err(|e| BinningError::Shape(e.to_string()));
    };

    if axis >= a.ndim() {
        return Err(BinningError::AxisOutOfBounds {
            axis,
            ndim: a.ndim(),
        });
    }

    let lanes: Vec<Vec<T>> = a
        .lanes(Axis(axis))
        .into_iter()
        .map(|lane| lane.to_vec())
        .collect();
    let binned = map_lanes(&lanes, config)?;

    let mut out = a.to_owned();
    for (mut dst, src) in out.lanes_mut(Axis(axis)).into_iter().zip(binned) {
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s;
        }
    }
    Ok(out)
}

/// Bin each lane independently, preserving lane order.
///
/// Lanes share no state, so with the `parallel` feature they are distributed over the
/// rayon pool. Errors are reported for the first failing lane in lane order.
pub fn map_lanes<T: OrdinalElement>(
    lanes: &[Vec<T>],
    config: &BinningConfig,
) -> Result<Vec<Vec<T>>> {
    #[cfg(feature = "parallel")]
    if config.parallel {
        use rayon::prelude::*;
        let results: Vec<Result<Vec<T>>> = lanes
            .par_iter()
            .map(|lane| bin_values(lane, config))
            .collect();
        return results.into_iter().collect();
    }

    lanes.iter().map(|lane| bin_values(lane, config)).collect()
}

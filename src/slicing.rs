//! Slice selection and extraction.
//!
//! This is the only part of the tool with real logic in it: deciding which
//! indices to show and cutting the matching 2D cross-sections out of both
//! volumes. The slicing math is logged so the operator can verify which
//! slices they are actually looking at.

use log::info;
use ndarray::{Array2, ArrayD, Axis, Ix2};

use crate::common::Direction;
use crate::error::AlignError;

/// Number of slices sampled across the axis when no explicit index is given.
pub const DEFAULT_NUM_SLICES: usize = 6;

/// A single column of the displayed grid: the same slice index cut from both
/// volumes.
#[derive(Debug)]
pub struct SlicePair {
    pub index: usize,
    pub top: Array2<f64>,
    pub bottom: Array2<f64>,
}

/// The full 2 x N grid handed to a renderer.
///
/// `row_axis` and `col_axis` are the in-scan axes that ended up as the
/// vertical and horizontal axes of each cell, so the renderer can label them.
#[derive(Debug)]
pub struct SliceGrid {
    pub axis: Direction,
    pub row_axis: usize,
    pub col_axis: usize,
    pub columns: Vec<SlicePair>,
}

/// Checks that the two volumes agree in rank and in every axis extent.
pub fn check_same_shape(a: &ArrayD<f64>, b: &ArrayD<f64>) -> Result<(), AlignError> {
    if a.shape() != b.shape() {
        return Err(AlignError::ShapeMismatch {
            shape_1: a.shape().to_vec(),
            shape_2: b.shape().to_vec(),
        });
    }
    Ok(())
}

/// Computes the ordered list of slice indices to show.
///
/// A non-negative `requested` index selects exactly that slice, after a
/// bounds check against the axis extent. A negative one asks for automatic
/// mode: `num_auto` indices spread evenly along the axis with stride
/// `axis_len / (num_auto + 1)`, which skips both ends of the scan where
/// slices are usually empty.
///
/// Automatic mode refuses axes shorter than `num_auto + 1` voxels instead of
/// quietly producing fewer columns than asked for.
pub fn plan_slices(
    axis_len: usize,
    requested: i64,
    num_auto: usize,
) -> Result<Vec<usize>, AlignError> {
    if requested >= 0 {
        let index = requested as usize;
        if index >= axis_len {
            return Err(AlignError::SliceIndexOutOfRange {
                index,
                extent: axis_len,
            });
        }
        return Ok(vec![index]);
    }

    if num_auto == 0 || axis_len < num_auto + 1 {
        return Err(AlignError::DegenerateAutoSlice {
            extent: axis_len,
            wanted: num_auto,
        });
    }
    let stride = axis_len / (num_auto + 1);
    let indices: Vec<usize> = (1..=num_auto).map(|k| k * stride).collect();
    info!(
        "axis extent: {}, stride: {}, slice indices: {:?}",
        axis_len, stride, indices
    );
    Ok(indices)
}

/// Cuts one 2D cross-section out of a volume.
///
/// The chosen axis is held fixed at `index`; the remaining two axes keep
/// their original ascending order, so slicing a (X,Y,Z) volume along Z gives
/// an (X,Y) slice.
pub fn extract_slice(
    data: &ArrayD<f64>,
    axis: Direction,
    index: usize,
) -> Result<Array2<f64>, AlignError> {
    let ndim = data.ndim();
    if ndim != 3 {
        return Err(AlignError::Dimensionality { ndim });
    }
    let extent = data.shape()[axis.to_usize()];
    if index >= extent {
        return Err(AlignError::SliceIndexOutOfRange { index, extent });
    }
    let slice = data.index_axis(Axis(axis.to_usize()), index);
    // enforce 2D
    let slice = slice
        .into_dimensionality::<Ix2>()
        .map_err(|_| AlignError::Dimensionality { ndim })?;
    Ok(slice.to_owned())
}

/// Builds the 2 x N grid for a pair of equal-shaped volumes.
///
/// Row 0 holds the slices of `vol_1`, row 1 those of `vol_2`, one column per
/// entry of `indices`, in order.
pub fn build_grid(
    vol_1: &ArrayD<f64>,
    vol_2: &ArrayD<f64>,
    axis: Direction,
    indices: &[usize],
) -> Result<SliceGrid, AlignError> {
    let (row_axis, col_axis) = axis.display_axes();
    let mut columns = Vec::with_capacity(indices.len());
    for &index in indices {
        let top = extract_slice(vol_1, axis, index)?;
        let bottom = extract_slice(vol_2, axis, index)?;
        columns.push(SlicePair { index, top, bottom });
    }
    Ok(SliceGrid {
        axis,
        row_axis,
        col_axis,
        columns,
    })
}

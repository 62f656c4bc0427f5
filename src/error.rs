//! Error types for the alignment check workflow.

use thiserror::Error;

/// Everything that can go wrong between loading the images and showing them.
///
/// None of these are recovered from: the binary prints the message and exits,
/// since an inconsistency between the two scans is exactly what the operator
/// needs to see.
#[derive(Error, Debug)]
pub enum AlignError {
    /// The file is missing, unreadable or not a valid nifti container.
    #[error("could not load nifti file: {0}")]
    Load(#[from] nifti::error::NiftiError),

    /// The two volumes do not share rank and per-axis extents.
    #[error("image shapes differ: {shape_1:?} vs {shape_2:?}")]
    ShapeMismatch {
        shape_1: Vec<usize>,
        shape_2: Vec<usize>,
    },

    /// An explicit slice index points past the end of the chosen axis.
    #[error("slice index {index} is out of range for axis extent {extent}")]
    SliceIndexOutOfRange { index: usize, extent: usize },

    /// The axis is too short to sample the requested number of slices.
    #[error("axis extent {extent} cannot provide {wanted} evenly spaced slices")]
    DegenerateAutoSlice { extent: usize, wanted: usize },

    /// Slicing is only defined for 3D volumes.
    #[error("expected a 3D volume, got {ndim} dimensions")]
    Dimensionality { ndim: usize },

    /// Axis numbers outside 0..=2 do not name a voxel axis.
    #[error("axis must be 0, 1 or 2, got {axis}")]
    InvalidAxis { axis: usize },

    /// The display window could not be created or crashed.
    #[error("display failed: {0}")]
    Render(String),
}

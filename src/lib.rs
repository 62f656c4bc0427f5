//! Library for comparing two nifti files slice by slice.
//!
//! The pieces here load a pair of volumetric images, pick a set of slice
//! indices along one axis, pull the matching 2D cross-sections out of both
//! volumes and hand them to a renderer as a two-row grid. The header and
//! affine are read but never applied, so what is shown is pure voxel space.

pub mod common;
pub mod error;
pub mod loader;
pub mod render;
pub mod slicing;
pub mod viewer;

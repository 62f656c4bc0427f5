//! Loading nifti files into memory.

use std::path::Path;

use nalgebra::Matrix4;
use ndarray::ArrayD;
use nifti::{IntoNdArray, NiftiHeader, NiftiObject, ReaderOptions};

use crate::error::AlignError;

/// A volumetric image as read from disk.
///
/// The header and the header-derived affine come along for inspection but are
/// never applied: the whole point of the tool is to compare the two scans in
/// raw voxel space. The shape of `data` is fixed at load time.
#[derive(Debug)]
pub struct VolumeImage {
    pub data: ArrayD<f64>,
    pub header: NiftiHeader,
    pub affine: Matrix4<f64>,
}

impl VolumeImage {
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }
}

/// Reads a nifti file and returns its voxel data, header and affine.
///
/// Consuming the reader object into its volume drops the file handle and any
/// reader-side buffering, so the returned array is the only in-memory copy.
///
/// # Arguments
///
/// * `path` - Path to a `.nii` or `.nii.gz` file.
///
/// # Returns
///
/// A `VolumeImage`, or `AlignError::Load` if the file is missing, unreadable
/// or not a valid nifti container.
pub fn load_nifti<P: AsRef<Path>>(path: P) -> Result<VolumeImage, AlignError> {
    let obj = ReaderOptions::new().read_file(path.as_ref())?;
    let header = obj.header().clone();
    let affine = header.affine::<f64>();
    let data = obj.into_volume().into_ndarray::<f64>()?;
    Ok(VolumeImage {
        data,
        header,
        affine,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;
    use nifti::writer::WriterOptions;
    use tempfile::tempdir;

    #[test]
    fn round_trips_shape_and_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vol.nii");

        let data: Vec<f64> = (0..3 * 4 * 5).map(|v| v as f64).collect();
        let array = Array3::from_shape_vec((3, 4, 5), data).unwrap();
        WriterOptions::new(&path).write_nifti(&array).unwrap();

        let vol = load_nifti(&path).unwrap();
        assert_eq!(vol.shape(), &[3, 4, 5]);
        assert_eq!(vol.data[[0, 0, 0]], 0.0);
        assert_eq!(vol.data[[2, 3, 4]], 59.0);
    }

    #[test]
    fn affine_has_homogeneous_last_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vol.nii");

        let array = Array3::<f64>::zeros((2, 2, 2));
        WriterOptions::new(&path).write_nifti(&array).unwrap();

        let vol = load_nifti(&path).unwrap();
        assert_eq!(vol.affine[(3, 0)], 0.0);
        assert_eq!(vol.affine[(3, 1)], 0.0);
        assert_eq!(vol.affine[(3, 2)], 0.0);
        assert_eq!(vol.affine[(3, 3)], 1.0);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_nifti("/no/such/file.nii").unwrap_err();
        assert!(matches!(err, AlignError::Load(_)));
    }
}

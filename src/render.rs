//! Renderer abstraction over the slice grid.
//!
//! Keeping the display behind a trait lets the tests capture the produced
//! grid in memory instead of opening a window.

use ndarray::Array2;

use crate::error::AlignError;
use crate::slicing::SliceGrid;

/// Renders a labeled two-row grid of grayscale slices.
pub trait GridRenderer {
    /// Shows the grid. For interactive renderers this blocks until the
    /// operator closes the display.
    fn show(&mut self, grid: SliceGrid) -> Result<(), AlignError>;
}

/// Rescales a slice to 8-bit grayscale, row-major.
///
/// The slice's first axis becomes the vertical image axis and its second the
/// horizontal one. Intensities are stretched so the slice minimum maps to 0
/// and the maximum to 255; a flat slice comes out all black.
///
/// # Returns
///
/// The pixel bytes plus the image width and height.
pub fn to_grayscale(slice: &Array2<f64>) -> (Vec<u8>, usize, usize) {
    let height = slice.nrows();
    let width = slice.ncols();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in slice.iter() {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    let range = max - min;

    let pixels = slice
        .iter()
        .map(|&v| {
            if range > 0.0 {
                (((v - min) / range) * 255.0).round() as u8
            } else {
                0
            }
        })
        .collect();
    (pixels, width, height)
}

/// Test renderer that keeps the grid instead of displaying it.
#[derive(Debug, Default)]
pub struct CaptureRenderer {
    pub captured: Option<SliceGrid>,
}

impl GridRenderer for CaptureRenderer {
    fn show(&mut self, grid: SliceGrid) -> Result<(), AlignError> {
        self.captured = Some(grid);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Direction;
    use crate::slicing::{build_grid, plan_slices};
    use ndarray::{arr2, Array3};

    #[test]
    fn grayscale_stretches_min_to_zero_and_max_to_full() {
        let slice = arr2(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let (pixels, width, height) = to_grayscale(&slice);
        assert_eq!((width, height), (3, 2));
        assert_eq!(pixels, vec![0, 51, 102, 153, 204, 255]);
    }

    #[test]
    fn flat_slice_renders_black() {
        let slice = Array2::from_elem((4, 4), 7.5);
        let (pixels, _, _) = to_grayscale(&slice);
        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn capture_renderer_keeps_the_grid() {
        let vol_1 = Array3::<f64>::zeros((64, 64, 40)).into_dyn();
        let vol_2 = Array3::<f64>::zeros((64, 64, 40)).into_dyn();
        let indices = plan_slices(40, -1, 6).unwrap();
        let grid = build_grid(&vol_1, &vol_2, Direction::Z, &indices).unwrap();

        let mut renderer = CaptureRenderer::default();
        renderer.show(grid).unwrap();

        let captured = renderer.captured.expect("grid should be captured");
        assert_eq!(captured.columns.len(), 6);
        assert_eq!(captured.columns[0].top.dim(), (64, 64));
    }
}

//! Interactive window display built on eframe.

use eframe::egui;

use crate::error::AlignError;
use crate::render::{to_grayscale, GridRenderer};
use crate::slicing::SliceGrid;

/// Opens a native window with the slice grid and blocks until it is closed.
pub struct WindowRenderer {
    title: String,
}

impl WindowRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl GridRenderer for WindowRenderer {
    fn show(&mut self, grid: SliceGrid) -> Result<(), AlignError> {
        let app = ViewerApp::new(grid);
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(app.preferred_size()),
            ..Default::default()
        };
        eframe::run_native(&self.title, options, Box::new(move |_cc| Box::new(app)))
            .map_err(|e| AlignError::Render(e.to_string()))
    }
}

struct Cell {
    label: String,
    image: egui::ColorImage,
    texture: Option<egui::TextureHandle>,
}

impl Cell {
    fn new(label: String, slice: &ndarray::Array2<f64>) -> Self {
        let (pixels, width, height) = to_grayscale(slice);
        Self {
            label,
            image: egui::ColorImage::from_gray([width, height], &pixels),
            texture: None,
        }
    }
}

struct ViewerApp {
    axis_label: String,
    rows: [Vec<Cell>; 2],
}

impl ViewerApp {
    fn new(grid: SliceGrid) -> Self {
        let axis_label = format!(
            "Slicing axis-[{}]. Vertical: axis-[{}] in scan, horizontal: axis-[{}] in scan.",
            grid.axis, grid.row_axis, grid.col_axis
        );
        let mut top_row = Vec::with_capacity(grid.columns.len());
        let mut bottom_row = Vec::with_capacity(grid.columns.len());
        for pair in &grid.columns {
            top_row.push(Cell::new(format!("scan 1, slice {}", pair.index), &pair.top));
            bottom_row.push(Cell::new(
                format!("scan 2, slice {}", pair.index),
                &pair.bottom,
            ));
        }
        Self {
            axis_label,
            rows: [top_row, bottom_row],
        }
    }

    /// Rough initial window size so the whole grid is visible without
    /// scrolling for typical scan dimensions.
    fn preferred_size(&self) -> [f32; 2] {
        let (cell_w, cell_h) = self
            .rows[0]
            .first()
            .map(|c| (c.image.size[0] as f32, c.image.size[1] as f32))
            .unwrap_or((128.0, 128.0));
        let cols = self.rows[0].len() as f32;
        [cols * (cell_w + 16.0) + 16.0, 2.0 * (cell_h + 48.0) + 48.0]
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(&self.axis_label);
            egui::ScrollArea::both().show(ui, |ui| {
                egui::Grid::new("slice_grid").show(ui, |ui| {
                    for row in &mut self.rows {
                        for cell in row.iter_mut() {
                            let texture = cell.texture.get_or_insert_with(|| {
                                ctx.load_texture(
                                    cell.label.clone(),
                                    cell.image.clone(),
                                    egui::TextureOptions::NEAREST,
                                )
                            });
                            ui.vertical(|ui| {
                                ui.image((texture.id(), texture.size_vec2()));
                                ui.small(cell.label.as_str());
                            });
                        }
                        ui.end_row();
                    }
                });
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Direction;
    use crate::slicing::{build_grid, plan_slices};
    use ndarray::Array3;

    #[test]
    fn viewer_builds_one_cell_per_slice_and_row() {
        let vol_1 = Array3::<f64>::zeros((64, 64, 40)).into_dyn();
        let vol_2 = Array3::<f64>::zeros((64, 64, 40)).into_dyn();
        let indices = plan_slices(40, -1, 6).unwrap();
        let grid = build_grid(&vol_1, &vol_2, Direction::Z, &indices).unwrap();

        let app = ViewerApp::new(grid);
        assert_eq!(app.rows[0].len(), 6);
        assert_eq!(app.rows[1].len(), 6);
        // width x height of each cell follows the free axes of the volume
        assert_eq!(app.rows[0][0].image.size, [64, 64]);
        assert_eq!(app.rows[1][5].label, "scan 2, slice 30");
    }
}

//! Quick commandline utility to check whether two nifti files are aligned in
//! voxel space.
//!
//! Loads both scans, checks that their voxel grids have the same shape, then
//! shows the same slices from both in a two-row window (first scan on top).
//! The nifti headers are read but never applied, so if the slices line up
//! here the scans are aligned in the image space itself, independent of any
//! header transform.

use clap::Parser;
use log::debug;
use std::process;

use alignii::common::Direction;
use alignii::error::AlignError;
use alignii::loader::load_nifti;
use alignii::render::GridRenderer;
use alignii::slicing::{build_grid, check_same_shape, plan_slices, DEFAULT_NUM_SLICES};
use alignii::viewer::WindowRenderer;

// use clap to create commandline interface
#[derive(Parser, Debug)]
#[command(author, about, version)]
struct Args {
    /// path to the first nifti file
    #[arg(long, default_value = "./flair.nii.gz")]
    i1: String,

    /// path to the second nifti file
    #[arg(long, default_value = "./seg.nii.gz")]
    i2: String,

    /// index of the slice to show; -1 samples a spread of slices instead
    #[arg(short, long, default_value_t = -1)]
    slice: i64,

    /// Number for the axis to slice along:
    ///     0 -> X, 1 -> Y, 2 -> Z
    #[arg(short, long, default_value_t = 2)]
    axis: usize,

    /// how many slices to show in automatic mode
    #[arg(short, long, default_value_t = DEFAULT_NUM_SLICES)]
    num_slices: usize,
}

fn run(args: &Args) -> Result<(), AlignError> {
    let axis = Direction::from_index(args.axis)?;

    let vol_1 = load_nifti(&args.i1)?;
    println!("Image #1 shape: {:?}", vol_1.shape());
    debug!("Image #1 affine:{}", vol_1.affine);
    let vol_2 = load_nifti(&args.i2)?;
    println!("Image #2 shape: {:?}", vol_2.shape());
    debug!("Image #2 affine:{}", vol_2.affine);

    check_same_shape(&vol_1.data, &vol_2.data)?;

    let extent = *vol_1
        .shape()
        .get(axis.to_usize())
        .ok_or(AlignError::Dimensionality {
            ndim: vol_1.data.ndim(),
        })?;
    let indices = plan_slices(extent, args.slice, args.num_slices)?;

    let grid = build_grid(&vol_1.data, &vol_2.data, axis, &indices)?;
    // blocks until the operator closes the window
    WindowRenderer::new("alignii").show(grid)
}

/// Main function that parses commandline arguments and runs the program.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error! {}", e);
        process::exit(-2);
    }
}

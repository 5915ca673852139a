use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use halftone_core::consts::DEFAULT_BOX_SIZE;
use halftone_core::io::image_io::load_image;
use halftone_core::sampler::RegionGrid;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image (JPEG, PNG, GIF, ...)
    pub file: PathBuf,

    /// Box size used to describe the grid
    #[arg(short, long, default_value_t = DEFAULT_BOX_SIZE)]
    pub box_size: u32,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let frame = load_image(&args.file)
        .with_context(|| format!("Error reading image {}", args.file.display()))?;
    let (width, height) = (frame.width(), frame.height());
    let grid = RegionGrid::new(width, height, args.box_size);
    let (skip_x, skip_y) = grid.remainder(width, height);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", width, height);
    println!("Bit depth:   {}", frame.original_bit_depth);
    println!("Box size:    {} px", grid.box_size);
    println!(
        "Grid:        {}x{} ({} regions)",
        grid.columns,
        grid.rows,
        grid.region_count()
    );
    if skip_x > 0 || skip_y > 0 {
        println!("Ignored:     {} px right, {} px bottom", skip_x, skip_y);
    }

    Ok(())
}

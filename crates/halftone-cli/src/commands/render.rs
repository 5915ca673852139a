use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use halftone_core::consts::{DEFAULT_BOX_SIZE, DEFAULT_LUMA_THRESHOLD, DEFAULT_SCALE};
use halftone_core::geometry::SizingPolicy;
use halftone_core::io::image_io::{load_image, svg_output_path};
use halftone_core::luma::LumaWeighting;
use halftone_core::pipeline::config::{FillMode, HalftoneConfig};
use halftone_core::pipeline::{render_halftone_reported, PipelineStage, ProgressReporter};
use halftone_core::sink::SvgSink;

use crate::progress::BarReporter;
use crate::summary::print_render_summary;

#[derive(Clone, ValueEnum)]
pub enum LumaArg {
    Bt601,
    Bt709,
}

#[derive(Clone, ValueEnum)]
pub enum SizingArg {
    /// Darkness sets the dot radius
    Linear,
    /// Darkness sets the dot area
    Area,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Input image (JPEG, PNG, GIF, ...)
    pub file: PathBuf,

    /// Output SVG file (default: input path with a .svg extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Halftone config file (TOML); replaces the options below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Box size for dots, in source pixels
    #[arg(short, long, default_value_t = DEFAULT_BOX_SIZE)]
    pub box_size: u32,

    /// Scale of the SVG canvas relative to the source image
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Don't draw dots at or above this luma (0.0 to 1.0)
    #[arg(short, long, default_value_t = DEFAULT_LUMA_THRESHOLD)]
    pub threshold: f64,

    /// Fill every dot with black instead of the region's average color
    #[arg(long)]
    pub black: bool,

    /// Luma weighting
    #[arg(short, long, value_enum, default_value = "bt601")]
    pub luma: LumaArg,

    /// How luma maps to dot size
    #[arg(long, value_enum, default_value = "linear")]
    pub sizing: SizingArg,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid halftone config")?
    } else {
        build_config_from_args(args)
    };
    config.validate()?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| svg_output_path(&args.file));

    print_render_summary(&args.file, &output, &config);

    let reporter = BarReporter::new()?;
    reporter.begin_stage(PipelineStage::Reading, None);
    let frame = load_image(&args.file)
        .with_context(|| format!("Error reading image {}", args.file.display()))?;
    reporter.finish_stage();
    config.validate_for(frame.width(), frame.height())?;

    let mut sink = SvgSink::create(&output)
        .with_context(|| format!("Unable to open SVG file {}", output.display()))?;
    let summary = render_halftone_reported(&frame, &config, &mut sink, &reporter)?;
    reporter.done();

    println!("\n{summary}");
    println!("Output saved to {}", output.display());

    Ok(())
}

fn build_config_from_args(args: &RenderArgs) -> HalftoneConfig {
    let luma_weighting = match args.luma {
        LumaArg::Bt601 => LumaWeighting::Bt601,
        LumaArg::Bt709 => LumaWeighting::Bt709,
    };
    let sizing = match args.sizing {
        SizingArg::Linear => SizingPolicy::Linear,
        SizingArg::Area => SizingPolicy::Area,
    };
    let fill = if args.black {
        FillMode::Black
    } else {
        FillMode::Average
    };

    HalftoneConfig {
        box_size: args.box_size,
        luma_threshold: args.threshold,
        fill,
        luma_weighting,
        sizing,
        scale: args.scale,
    }
}

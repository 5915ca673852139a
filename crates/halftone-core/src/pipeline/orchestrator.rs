use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::consts::PARALLEL_CELL_THRESHOLD;
use crate::error::{HalftoneError, Result};
use crate::frame::SourceImage;
use crate::geometry::dot_radius;
use crate::sampler::{average_color, GridCell, RegionGrid};
use crate::sink::{DotCollector, DrawingSink};

use super::config::{FillMode, HalftoneConfig};
use super::types::{DotDescriptor, Fill, NoOpReporter, PipelineStage, ProgressReporter, RenderSummary};

/// Sample one region and decide its dot.
///
/// Returns `None` when the region's luma reaches the threshold.
pub fn evaluate_region<I: SourceImage + ?Sized>(
    image: &I,
    config: &HalftoneConfig,
    grid: &RegionGrid,
    cell: GridCell,
) -> Option<DotDescriptor> {
    let color = average_color(image, grid.box_size, cell);
    let luma = config.luma_weighting.luma_of(color);
    let radius = dot_radius(
        luma,
        config.luma_threshold,
        grid.box_size,
        config.scale,
        config.sizing,
    )?;

    let (x0, y0) = grid.origin(cell);
    let half = grid.box_half();
    let fill = match config.fill {
        FillMode::Average => Fill::Color(color),
        FillMode::Black => Fill::Black,
    };

    Some(DotDescriptor {
        cx: (x0 + half) * config.scale,
        cy: (y0 + half) * config.scale,
        radius,
        fill,
    })
}

/// Render `image` into `sink` with a thread-safe progress reporter.
///
/// The sink sees `start`, then one `circle` per visible region in grid
/// column order, then `finish`. Large grids are sampled in parallel, one
/// column per task, and emitted in the same order as the sequential walk.
pub fn render_halftone_reported<I, S>(
    image: &I,
    config: &HalftoneConfig,
    sink: &mut S,
    reporter: &dyn ProgressReporter,
) -> Result<RenderSummary>
where
    I: SourceImage + ?Sized,
    S: DrawingSink + ?Sized,
{
    config.validate()?;

    let grid = RegionGrid::for_image(image, config.box_size);
    let (canvas_width, canvas_height) = config
        .canvas_size(image.width(), image.height())
        .ok_or(HalftoneError::InvalidScale(config.scale))?;
    info!(
        width = image.width(),
        height = image.height(),
        box_size = config.box_size,
        regions = grid.region_count(),
        "Rendering halftone"
    );

    sink.start(canvas_width, canvas_height)?;

    let columns = grid.columns as usize;
    reporter.begin_stage(PipelineStage::Sampling, Some(columns));

    let mut dots = 0usize;
    if grid.region_count() >= PARALLEL_CELL_THRESHOLD {
        debug!(columns, "Sampling columns in parallel");
        let done = AtomicUsize::new(0);
        let per_column: Vec<Vec<DotDescriptor>> = (0..grid.columns)
            .into_par_iter()
            .map(|column| {
                let column_dots = grid
                    .column_cells(column)
                    .filter_map(|cell| evaluate_region(image, config, &grid, cell))
                    .collect();
                reporter.advance(done.fetch_add(1, Ordering::Relaxed) + 1);
                column_dots
            })
            .collect();
        reporter.finish_stage();

        reporter.begin_stage(PipelineStage::Writing, None);
        for dot in per_column.iter().flatten() {
            sink.circle(dot)?;
            dots += 1;
        }
    } else {
        for column in 0..grid.columns {
            for cell in grid.column_cells(column) {
                if let Some(dot) = evaluate_region(image, config, &grid, cell) {
                    sink.circle(&dot)?;
                    dots += 1;
                }
            }
            reporter.advance(column as usize + 1);
        }
        reporter.finish_stage();
        reporter.begin_stage(PipelineStage::Writing, None);
    }

    sink.finish()?;
    reporter.finish_stage();

    let summary = RenderSummary {
        grid,
        canvas_width,
        canvas_height,
        dots,
        suppressed: grid.region_count() - dots,
    };
    info!(
        dots = summary.dots,
        suppressed = summary.suppressed,
        "Halftone rendering complete"
    );
    Ok(summary)
}

/// Render `image` into `sink`.
pub fn render_halftone<I, S>(image: &I, config: &HalftoneConfig, sink: &mut S) -> Result<RenderSummary>
where
    I: SourceImage + ?Sized,
    S: DrawingSink + ?Sized,
{
    render_halftone_reported(image, config, sink, &NoOpReporter)
}

/// Run the pipeline and return the dots in emission order.
pub fn collect_dots<I: SourceImage + ?Sized>(
    image: &I,
    config: &HalftoneConfig,
) -> Result<Vec<DotDescriptor>> {
    let mut collector = DotCollector::default();
    render_halftone(image, config, &mut collector)?;
    Ok(collector.dots)
}

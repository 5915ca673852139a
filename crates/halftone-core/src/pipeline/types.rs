use crate::sampler::{RegionColor, RegionGrid};

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Reading,
    Sampling,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading image"),
            Self::Sampling => write!(f, "Sampling regions"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Paint used for a dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    Color(RegionColor),
    Black,
}

impl std::fmt::Display for Fill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Color(color) => write!(f, "{color}"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// One circle to draw, in output canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DotDescriptor {
    pub cx: u32,
    pub cy: u32,
    pub radius: u32,
    pub fill: Fill,
}

impl DotDescriptor {
    /// Inline style for the circle. Dots are never stroked.
    pub fn style(&self) -> String {
        format!("fill:{};stroke:none", self.fill)
    }
}

/// Outcome of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSummary {
    pub grid: RegionGrid,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Dots handed to the sink
    pub dots: usize,
    /// Regions dropped by the luma threshold
    pub suppressed: usize,
}

impl std::fmt::Display for RenderSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} regions drawn ({} at or above threshold skipped)",
            self.dots,
            self.grid.region_count(),
            self.suppressed
        )
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of work items
    /// (grid columns while sampling), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// `items_done` work items of the current stage have completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `render_halftone` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

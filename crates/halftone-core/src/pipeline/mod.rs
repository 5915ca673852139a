pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{collect_dots, evaluate_region, render_halftone, render_halftone_reported};
pub use types::{DotDescriptor, Fill, PipelineStage, ProgressReporter, RenderSummary};

//! Destinations for rendered dots.

mod collector;
mod svg_sink;

pub use collector::DotCollector;
pub use svg_sink::SvgSink;

use crate::error::Result;
use crate::pipeline::DotDescriptor;

/// Receives the canvas and its circles from the pipeline.
///
/// Calls arrive in a fixed order: `start` once, `circle` zero or more times,
/// then `finish` once.
pub trait DrawingSink {
    fn start(&mut self, width: u32, height: u32) -> Result<()>;
    fn circle(&mut self, dot: &DotDescriptor) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

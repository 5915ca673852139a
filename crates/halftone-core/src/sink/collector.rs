use crate::error::{HalftoneError, Result};
use crate::pipeline::DotDescriptor;

use super::DrawingSink;

/// Keeps every dot in memory.
#[derive(Clone, Debug, Default)]
pub struct DotCollector {
    /// Canvas size given to `start`
    pub canvas: Option<(u32, u32)>,
    pub dots: Vec<DotDescriptor>,
    pub finished: bool,
}

impl DrawingSink for DotCollector {
    fn start(&mut self, width: u32, height: u32) -> Result<()> {
        if self.canvas.is_some() {
            return Err(HalftoneError::SinkState("canvas already started".into()));
        }
        self.canvas = Some((width, height));
        Ok(())
    }

    fn circle(&mut self, dot: &DotDescriptor) -> Result<()> {
        if self.canvas.is_none() || self.finished {
            return Err(HalftoneError::SinkState("circle outside an open canvas".into()));
        }
        self.dots.push(*dot);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.canvas.is_none() {
            return Err(HalftoneError::SinkState("finish before start".into()));
        }
        self.finished = true;
        Ok(())
    }
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use svg::node::element::Circle;
use svg::Document;
use tracing::debug;

use crate::error::{HalftoneError, Result};
use crate::pipeline::DotDescriptor;

use super::DrawingSink;

/// Serializes dots as an SVG document.
///
/// The canvas carries explicit `width` and `height` attributes so output
/// coordinates line up with (scaled) source pixels. Nothing is written to
/// the underlying writer until `finish`.
pub struct SvgSink<W: Write> {
    writer: W,
    document: Option<Document>,
    circles: usize,
}

impl SvgSink<BufWriter<File>> {
    /// Create (or truncate) `path` and write the document there.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> SvgSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document: None,
            circles: 0,
        }
    }

    /// Number of circles added so far.
    pub fn circle_count(&self) -> usize {
        self.circles
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DrawingSink for SvgSink<W> {
    fn start(&mut self, width: u32, height: u32) -> Result<()> {
        if self.document.is_some() {
            return Err(HalftoneError::SinkState("SVG canvas already started".into()));
        }
        self.document = Some(Document::new().set("width", width).set("height", height));
        Ok(())
    }

    fn circle(&mut self, dot: &DotDescriptor) -> Result<()> {
        let document = self
            .document
            .take()
            .ok_or_else(|| HalftoneError::SinkState("circle before SVG canvas start".into()))?;
        let circle = Circle::new()
            .set("cx", dot.cx)
            .set("cy", dot.cy)
            .set("r", dot.radius)
            .set("style", dot.style());
        self.document = Some(document.add(circle));
        self.circles += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = self
            .document
            .take()
            .ok_or_else(|| HalftoneError::SinkState("finish before SVG canvas start".into()))?;
        svg::write(&mut self.writer, &document)?;
        self.writer.flush()?;
        debug!(circles = self.circles, "SVG document written");
        Ok(())
    }
}

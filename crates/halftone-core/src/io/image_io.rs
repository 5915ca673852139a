use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::SVG_EXTENSION;
use crate::error::Result;
use crate::frame::RgbFrame;

/// Load an image file (PNG, JPEG, GIF, TIFF, ...) into an `RgbFrame`.
///
/// The format is guessed from the file contents and extension.
pub fn load_image(path: &Path) -> Result<RgbFrame> {
    let img = image::open(path)?;
    let frame = RgbFrame::from_dynamic(&img);
    debug!(
        path = %path.display(),
        width = frame.width(),
        height = frame.height(),
        bit_depth = frame.original_bit_depth,
        "Image loaded"
    );
    Ok(frame)
}

/// Decode an in-memory encoded image into an `RgbFrame`.
pub fn decode_image(bytes: &[u8]) -> Result<RgbFrame> {
    let img = image::load_from_memory(bytes)?;
    Ok(RgbFrame::from_dynamic(&img))
}

/// Default output path: the input with its extension replaced by `.svg`.
///
/// Everything from the last `.` of the file name is the extension, so a
/// dotfile such as `.png` becomes `.svg`.
pub fn svg_output_path(input: &Path) -> PathBuf {
    let Some(name) = input.file_name().and_then(|n| n.to_str()) else {
        return input.with_extension(SVG_EXTENSION);
    };
    let stem = name.rfind('.').map_or(name, |dot| &name[..dot]);
    input.with_file_name(format!("{stem}.{SVG_EXTENSION}"))
}

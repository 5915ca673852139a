#![allow(dead_code)]

use halftone_core::frame::RgbFrame;

/// A frame filled with one 8-bit color.
pub fn solid_frame(width: u32, height: u32, rgb: [u8; 3]) -> RgbFrame {
    RgbFrame::from_fn_rgb8(width, height, |_, _| rgb)
}

/// A frame whose gray level depends only on the box column and row it
/// falls in: `levels[column + row * columns]`.
pub fn boxed_gray_frame(box_size: u32, columns: u32, rows: u32, levels: &[u8]) -> RgbFrame {
    assert_eq!(levels.len(), (columns * rows) as usize);
    RgbFrame::from_fn_rgb8(box_size * columns, box_size * rows, |x, y| {
        let v = levels[(x / box_size + (y / box_size) * columns) as usize];
        [v, v, v]
    })
}

/// Deterministic pseudo-random colors, for parity checks.
pub fn noise_frame(width: u32, height: u32, seed: u32) -> RgbFrame {
    RgbFrame::from_fn_rgb8(width, height, |x, y| {
        let mut h = x
            .wrapping_mul(374_761_393)
            .wrapping_add(y.wrapping_mul(668_265_263))
            .wrapping_add(seed.wrapping_mul(2_246_822_519));
        h = (h ^ (h >> 13)).wrapping_mul(1_274_126_177);
        let b = h.to_le_bytes();
        [b[0], b[1], b[2]]
    })
}

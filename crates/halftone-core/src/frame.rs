use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};

use crate::consts::{CHANNEL_MAX_16BIT, CHANNEL_SCALE_16_TO_8};

/// 16-bit-per-channel RGB pixel buffer.
pub type Rgb16Buffer = ImageBuffer<Rgb<u16>, Vec<u16>>;

/// Read-only pixel access used by the region sampler.
///
/// Channels are reported at 16-bit depth (0..=65535). Implementors must be
/// `Sync` so large grids can be sampled from several threads.
pub trait SourceImage: Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Red, green and blue of the pixel at column `x`, row `y`.
    fn rgb16(&self, x: u32, y: u32) -> [u16; 3];
}

/// A decoded source image, widened to 16 bits per channel.
#[derive(Clone, Debug)]
pub struct RgbFrame {
    pub data: Rgb16Buffer,
    /// Bit depth per channel of the decoded source (8 or 16)
    pub original_bit_depth: u8,
}

impl RgbFrame {
    pub fn new(data: Rgb16Buffer, bit_depth: u8) -> Self {
        Self {
            data,
            original_bit_depth: bit_depth,
        }
    }

    /// Build a frame from 8-bit samples; each channel is widened by 0x101.
    pub fn from_fn_rgb8<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; 3],
    {
        let data = ImageBuffer::from_fn(width, height, |x, y| Rgb(f(x, y).map(widen_8_to_16)));
        Self::new(data, 8)
    }

    pub fn from_rgb8(img: &RgbImage) -> Self {
        Self::from_fn_rgb8(img.width(), img.height(), |x, y| img.get_pixel(x, y).0)
    }

    /// Convert any decoded image, premultiplying color by alpha.
    ///
    /// Fully transparent pixels therefore sample as black.
    pub fn from_dynamic(img: &DynamicImage) -> Self {
        let color = img.color();
        let bit_depth = (color.bits_per_pixel() / u16::from(color.channel_count())) as u8;
        let rgba = img.to_rgba16();
        let data = ImageBuffer::from_fn(rgba.width(), rgba.height(), |x, y| {
            let [r, g, b, a] = rgba.get_pixel(x, y).0;
            Rgb([premultiply(r, a), premultiply(g, a), premultiply(b, a)])
        });
        Self::new(data, bit_depth)
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }
}

impl SourceImage for RgbFrame {
    fn width(&self) -> u32 {
        self.data.width()
    }

    fn height(&self) -> u32 {
        self.data.height()
    }

    fn rgb16(&self, x: u32, y: u32) -> [u16; 3] {
        self.data.get_pixel(x, y).0
    }
}

impl SourceImage for Rgb16Buffer {
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn rgb16(&self, x: u32, y: u32) -> [u16; 3] {
        self.get_pixel(x, y).0
    }
}

fn widen_8_to_16(v: u8) -> u16 {
    (u64::from(v) * CHANNEL_SCALE_16_TO_8) as u16
}

fn premultiply(channel: u16, alpha: u16) -> u16 {
    (u32::from(channel) * u32::from(alpha) / CHANNEL_MAX_16BIT) as u16
}

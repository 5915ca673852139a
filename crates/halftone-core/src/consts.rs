/// Minimum grid cell count to evaluate columns with Rayon parallelism.
pub const PARALLEL_CELL_THRESHOLD: usize = 4_096;

/// ITU-R BT.601 luma coefficient for the red channel.
pub const BT601_R: f64 = 0.299;

/// ITU-R BT.601 luma coefficient for the green channel.
pub const BT601_G: f64 = 0.587;

/// Blue coefficient of the BT.601 weighting as used by existing halftone
/// output. Note this is 0.144, not the 0.114 of the standard.
pub const BT601_B: f64 = 0.144;

/// ITU-R BT.709 luma coefficient for the red channel.
pub const BT709_R: f64 = 0.2126;

/// ITU-R BT.709 luma coefficient for the green channel.
pub const BT709_G: f64 = 0.7152;

/// ITU-R BT.709 luma coefficient for the blue channel.
pub const BT709_B: f64 = 0.0722;

/// Maximum value of an 8-bit channel, used to normalize luma to [0, 1].
pub const CHANNEL_MAX_8BIT: f64 = 255.0;

/// Divisor taking a 16-bit channel to 8 bits (65535 / 255).
pub const CHANNEL_SCALE_16_TO_8: u64 = 0x101;

/// Maximum value of a 16-bit channel.
pub const CHANNEL_MAX_16BIT: u32 = 0xffff;

/// Empirical correction applied to the area sizing policy so the largest
/// dots can approach the box half-width.
pub const AREA_RADIUS_CORRECTION: f64 = 1.7;

/// Default side length of a sampling box, in source pixels.
pub const DEFAULT_BOX_SIZE: u32 = 50;

/// Default factor between source pixels and output canvas units.
pub const DEFAULT_SCALE: u32 = 1;

/// Default luma threshold; regions at or above it get no dot.
pub const DEFAULT_LUMA_THRESHOLD: f64 = 1.0;

/// File extension given to rendered output when no path is specified.
pub const SVG_EXTENSION: &str = "svg";

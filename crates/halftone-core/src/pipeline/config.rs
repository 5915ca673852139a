use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BOX_SIZE, DEFAULT_LUMA_THRESHOLD, DEFAULT_SCALE};
use crate::error::{HalftoneError, Result};
use crate::geometry::SizingPolicy;
use crate::luma::LumaWeighting;

/// How dots are filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillMode {
    /// Each dot takes its region's average color.
    #[default]
    Average,
    /// Every dot is solid black.
    Black,
}

impl std::fmt::Display for FillMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Average => write!(f, "Average color"),
            Self::Black => write!(f, "Black"),
        }
    }
}

/// Parameters of one halftone run. Fields missing from a TOML file fall
/// back to their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HalftoneConfig {
    /// Side of each sampling box, in source pixels.
    pub box_size: u32,
    /// Regions with luma at or above this get no dot (0.0..=1.0).
    pub luma_threshold: f64,
    pub fill: FillMode,
    pub luma_weighting: LumaWeighting,
    pub sizing: SizingPolicy,
    /// Output canvas units per source pixel.
    pub scale: u32,
}

impl Default for HalftoneConfig {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_BOX_SIZE,
            luma_threshold: DEFAULT_LUMA_THRESHOLD,
            fill: FillMode::Average,
            luma_weighting: LumaWeighting::Bt601,
            sizing: SizingPolicy::Linear,
            scale: DEFAULT_SCALE,
        }
    }
}

impl HalftoneConfig {
    /// Reject parameters the pipeline cannot run with.
    ///
    /// Box sizes are not checked: a zero or oversized box just yields an
    /// empty grid.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.luma_threshold) {
            return Err(HalftoneError::InvalidThreshold(self.luma_threshold));
        }
        if self.scale == 0 {
            return Err(HalftoneError::InvalidScale(self.scale));
        }
        Ok(())
    }

    /// `validate`, plus a check that the scaled canvas for a `width` x
    /// `height` source fits in `u32`.
    pub fn validate_for(&self, width: u32, height: u32) -> Result<()> {
        self.validate()?;
        if self.canvas_size(width, height).is_none() {
            return Err(HalftoneError::InvalidScale(self.scale));
        }
        Ok(())
    }

    pub fn box_half(&self) -> u32 {
        self.box_size / 2
    }

    /// Output canvas size for a source image of `width` x `height`, or
    /// `None` if scaling overflows.
    ///
    /// Every dot center and radius is bounded by the canvas, so a canvas
    /// that fits means the dot coordinates fit too.
    pub fn canvas_size(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        Some((width.checked_mul(self.scale)?, height.checked_mul(self.scale)?))
    }
}

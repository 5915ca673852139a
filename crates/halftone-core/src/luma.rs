use serde::{Deserialize, Serialize};

use crate::consts::{BT601_B, BT601_G, BT601_R, BT709_B, BT709_G, BT709_R, CHANNEL_MAX_8BIT};
use crate::sampler::RegionColor;

/// Weighting applied to RGB when computing luma.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LumaWeighting {
    #[default]
    Bt601,
    Bt709,
}

impl std::fmt::Display for LumaWeighting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bt601 => write!(f, "BT.601"),
            Self::Bt709 => write!(f, "BT.709"),
        }
    }
}

impl LumaWeighting {
    /// Red, green and blue coefficients of this weighting.
    pub fn coefficients(self) -> [f64; 3] {
        match self {
            Self::Bt601 => [BT601_R, BT601_G, BT601_B],
            Self::Bt709 => [BT709_R, BT709_G, BT709_B],
        }
    }

    /// Luma of 8-bit channel values, normalized by 255.
    ///
    /// Inputs are expected in 0..=255; nothing outside that is guarded.
    pub fn luma(self, r: u32, g: u32, b: u32) -> f64 {
        let [wr, wg, wb] = self.coefficients();
        ((wr * r as f64) + (wg * g as f64) + (wb * b as f64)) / CHANNEL_MAX_8BIT
    }

    pub fn luma_of(self, color: RegionColor) -> f64 {
        self.luma(color.r.into(), color.g.into(), color.b.into())
    }
}

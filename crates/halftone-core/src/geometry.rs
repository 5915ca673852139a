//! Mapping from region luma to dot size.

use serde::{Deserialize, Serialize};

use crate::consts::AREA_RADIUS_CORRECTION;

/// How luma is turned into a dot radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizingPolicy {
    /// Darkness is proportional to the radius.
    #[default]
    Linear,
    /// Darkness is proportional to the dot's area.
    Area,
}

impl std::fmt::Display for SizingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Area => write!(f, "Area"),
        }
    }
}

impl SizingPolicy {
    /// Untruncated radius for `luma`, in output units.
    ///
    /// `box_half` is half the box side (already truncated) and `scale` the
    /// output scale factor.
    pub fn radius(self, luma: f64, box_half: u32, scale: u32) -> f64 {
        let extent = (u64::from(box_half) * u64::from(scale)) as f64;
        let darkness = 1.0 - luma;
        match self {
            Self::Linear => darkness * extent,
            Self::Area => {
                (darkness / std::f64::consts::PI).sqrt() * AREA_RADIUS_CORRECTION * extent
            }
        }
    }
}

/// A region is drawn only while its luma stays strictly below the threshold.
pub fn is_visible(luma: f64, threshold: f64) -> bool {
    luma < threshold
}

/// Integer radius of the dot for a region, or `None` if it is suppressed.
///
/// A radius that truncates to 0 is still `Some(0)`; only the threshold
/// drops a dot.
pub fn dot_radius(
    luma: f64,
    threshold: f64,
    box_size: u32,
    scale: u32,
    policy: SizingPolicy,
) -> Option<u32> {
    if !is_visible(luma, threshold) {
        return None;
    }
    let radius = policy.radius(luma, box_size / 2, scale);
    Some(radius as u32)
}

//! Perceived-brightness normalization.
//!
//! Two fully saturated hues can differ wildly in how bright they look on an
//! LED: pure green reads far brighter than pure blue at the same channel
//! levels. This module rescales a color so its luma (an ITU-R-like weighted
//! sum of the channels) approximates a target value, which makes hue sweeps
//! appear uniformly bright.

use crate::convert::{DEFAULT_LIGHTNESS, DEFAULT_SATURATION, hsl_to_rgb_components};
use crate::rgb::{PackedRgb, Rgb8};
use libm::{fminf, roundf};

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Returns the perceived brightness of a color in 0.0-255.0.
///
/// Uses the classic luma weighting `0.299 r + 0.587 g + 0.114 b`.
#[inline]
pub fn luma(rgb: Rgb8) -> f32 {
    LUMA_R * rgb.r as f32 + LUMA_G * rgb.g as f32 + LUMA_B * rgb.b as f32
}

/// Rescales a color so its [`luma`] approximates `target` (0-255).
///
/// Each channel is multiplied by `target / luma` and capped at 255, so the
/// target is only reached exactly when no channel clips. Black is returned
/// unchanged for any target: it has no hue to brighten, and scaling it would
/// divide by a zero luma.
pub fn scale_to_luma(rgb: Rgb8, target: f32) -> Rgb8 {
    let current = luma(rgb);
    if current == 0.0 {
        return rgb;
    }

    let scale = target / current;
    Rgb8 {
        r: roundf(fminf(255.0, rgb.r as f32 * scale)) as u8,
        g: roundf(fminf(255.0, rgb.g as f32 * scale)) as u8,
        b: roundf(fminf(255.0, rgb.b as f32 * scale)) as u8,
    }
}

/// Converts a hue to a packed `0xRRGGBB` color whose perceived brightness
/// approximates `brightness` (0-255).
///
/// The base color is the fully saturated pure color for the hue (saturation
/// 100, lightness 50), then rescaled via [`scale_to_luma`]. Hues whose base
/// color cannot reach the target without clipping (a brightness of 200 on
/// pure blue, say) come out as bright as their clipped channels allow.
#[inline]
pub fn hue_to_rgb_with_brightness(hue: f32, brightness: f32) -> PackedRgb {
    let base = hsl_to_rgb_components(hue, DEFAULT_SATURATION, DEFAULT_LIGHTNESS);
    scale_to_luma(base, brightness).packed()
}

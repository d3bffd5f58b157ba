//! HSL to RGB conversion.
//!
//! Implements the standard hue-sector algorithm: chroma from saturation and
//! lightness, a second-largest component from the position within the hue
//! sector, then a lightness offset applied to all three channels.
//!
//! All functions are total. Hue is wrapped into [0,360) degrees before sector
//! selection, so negative and oversized hues behave like their wrapped
//! equivalent. Saturation and lightness are expected in [0,100] but are not
//! validated; out-of-range values produce degenerate colors rather than errors
//! (the final integer cast saturates every channel into 0-255).

use crate::rgb::{PackedRgb, Rgb8};
use libm::{fabsf, fmodf, roundf};

/// Saturation used by the hue-only entry points, in percent.
pub const DEFAULT_SATURATION: f32 = 100.0;

/// Lightness used by the hue-only entry points, in percent.
pub const DEFAULT_LIGHTNESS: f32 = 50.0;

/// Wraps a hue angle into [0,360) degrees.
#[inline]
fn wrap_hue(hue: f32) -> f32 {
    let wrapped = fmodf(hue, 360.0);
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Converts HSL components to an 8-bit RGB triple.
///
/// * `hue` - color angle in degrees, wrapped into [0,360)
/// * `saturation` - 0 (gray) to 100 (fully saturated)
/// * `lightness` - 0 (black) through 50 (pure color) to 100 (white)
pub fn hsl_to_rgb_components(hue: f32, saturation: f32, lightness: f32) -> Rgb8 {
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    let chroma = (1.0 - fabsf(2.0 * l - 1.0)) * s;
    let h_prime = wrap_hue(hue) / 60.0;
    let x = chroma * (1.0 - fabsf(fmodf(h_prime, 2.0) - 1.0));

    let (r1, g1, b1) = if h_prime < 1.0 {
        (chroma, x, 0.0)
    } else if h_prime < 2.0 {
        (x, chroma, 0.0)
    } else if h_prime < 3.0 {
        (0.0, chroma, x)
    } else if h_prime < 4.0 {
        (0.0, x, chroma)
    } else if h_prime < 5.0 {
        (x, 0.0, chroma)
    } else if h_prime < 6.0 {
        (chroma, 0.0, x)
    } else {
        // Only reachable for non-finite hue; contributes black.
        (0.0, 0.0, 0.0)
    };

    let m = l - chroma / 2.0;
    Rgb8 {
        r: roundf((r1 + m) * 255.0) as u8,
        g: roundf((g1 + m) * 255.0) as u8,
        b: roundf((b1 + m) * 255.0) as u8,
    }
}

/// Converts HSL components to a packed `0xRRGGBB` color.
#[inline]
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> PackedRgb {
    hsl_to_rgb_components(hue, saturation, lightness).packed()
}

/// Converts a hue to a packed `0xRRGGBB` color at full saturation and half
/// lightness, i.e. the fully saturated pure color for that hue.
#[inline]
pub fn hue_to_rgb(hue: f32) -> PackedRgb {
    hsl_to_rgb(hue, DEFAULT_SATURATION, DEFAULT_LIGHTNESS)
}

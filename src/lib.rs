#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Rgb8`**: an RGB color with 8-bit integer channels
//! - **`PackedRgb`**: the same color packed into one `0xRRGGBB` word for a display driver
//! - **`hsl_to_rgb`**: general HSL to RGB conversion
//! - **`hue_to_rgb`**: hue-only shortcut at full saturation and half lightness
//! - **`hue_to_rgb_with_brightness`**: hue conversion rescaled to a target perceived brightness
//!
//! Hue is an angle in degrees and wraps modulo 360; saturation and lightness
//! are percentages in 0-100; brightness targets are in 0-255 luma units. All
//! functions are pure and total: out-of-range saturation or lightness yields a
//! degenerate color rather than an error, and every output channel lands in
//! 0-255.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod brightness;
pub mod convert;
pub mod rgb;

pub use brightness::{hue_to_rgb_with_brightness, luma, scale_to_luma};
pub use convert::{
    DEFAULT_LIGHTNESS, DEFAULT_SATURATION, hsl_to_rgb, hsl_to_rgb_components, hue_to_rgb,
};
pub use rgb::{PackedRgb, Rgb8};

pub const RGB_OFF: Rgb8 = Rgb8::new(0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_surface_connects_end_to_end() {
        assert_eq!(hue_to_rgb(0.0).value(), 0xFF0000);
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0).value(), 0x00FF00);
        assert_eq!(RGB_OFF.packed().value(), 0x000000);

        let dim = hue_to_rgb_with_brightness(240.0, 20.0);
        assert!(luma(Rgb8::from(dim)) < 29.0);

        let srgb: Srgb = Rgb8::new(255, 0, 0).into();
        assert_eq!(srgb.red, 1.0);
    }
}

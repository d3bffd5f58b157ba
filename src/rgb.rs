//! RGB value types and display-driver packing.
//!
//! [`Rgb8`] is an integer RGB triple with 8-bit channels. [`PackedRgb`] is the
//! same triple packed into one `0xRRGGBB` word, the format most LED display
//! drivers consume. Conversions to and from `palette::Srgb` are provided for
//! use with animation code built on the `palette` ecosystem.

use palette::Srgb;

/// An RGB color with 8-bit integer channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb8 {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
}

impl Rgb8 {
    /// Creates a color from individual channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the channels into a single `0xRRGGBB` word.
    #[inline]
    pub const fn packed(self) -> PackedRgb {
        PackedRgb(((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32)
    }
}

impl From<[u8; 3]> for Rgb8 {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb8> for [u8; 3] {
    #[inline]
    fn from(rgb: Rgb8) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl From<Rgb8> for Srgb {
    #[inline]
    fn from(rgb: Rgb8) -> Self {
        Srgb::new(
            rgb.r as f32 / 255.0,
            rgb.g as f32 / 255.0,
            rgb.b as f32 / 255.0,
        )
    }
}

impl From<Srgb> for Rgb8 {
    /// Converts from 0.0-1.0 float channels, rounding to the nearest integer.
    /// Out-of-range channels saturate into 0-255.
    #[inline]
    fn from(srgb: Srgb) -> Self {
        Self {
            r: libm::roundf(srgb.red * 255.0) as u8,
            g: libm::roundf(srgb.green * 255.0) as u8,
            b: libm::roundf(srgb.blue * 255.0) as u8,
        }
    }
}

/// Three 8-bit RGB channels packed into one integer as `0xRRGGBB`.
///
/// This is the wire value handed to a display driver. Only the low 24 bits
/// are meaningful; the top byte is always zero when produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedRgb(u32);

impl PackedRgb {
    /// Creates a packed color from a raw `0xRRGGBB` word.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw `0xRRGGBB` word.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Extracts the red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Extracts the green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Extracts the blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl From<Rgb8> for PackedRgb {
    #[inline]
    fn from(rgb: Rgb8) -> Self {
        rgb.packed()
    }
}

impl From<PackedRgb> for Rgb8 {
    #[inline]
    fn from(packed: PackedRgb) -> Self {
        Self {
            r: packed.r(),
            g: packed.g(),
            b: packed.b(),
        }
    }
}

impl core::fmt::Display for PackedRgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn packing_places_channels_in_rrggbb_order() {
        let packed = Rgb8::new(0x12, 0x34, 0x56).packed();
        assert_eq!(packed.value(), 0x123456);
    }

    #[test]
    fn channel_accessors_invert_packing() {
        let packed = PackedRgb::new(0xAABBCC);
        assert_eq!(packed.r(), 0xAA);
        assert_eq!(packed.g(), 0xBB);
        assert_eq!(packed.b(), 0xCC);

        let rgb = Rgb8::from(packed);
        assert_eq!(rgb, Rgb8::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn array_conversions_preserve_channel_order() {
        let rgb = Rgb8::from([1, 2, 3]);
        assert_eq!(rgb, Rgb8::new(1, 2, 3));
        assert_eq!(<[u8; 3]>::from(rgb), [1, 2, 3]);
    }

    #[test]
    fn srgb_interop_round_trips_exactly() {
        let rgb = Rgb8::new(255, 128, 0);
        let srgb = Srgb::from(rgb);
        assert_eq!(Rgb8::from(srgb), rgb);
    }

    #[test]
    fn srgb_conversion_saturates_out_of_range_channels() {
        let rgb = Rgb8::from(Srgb::new(1.5, -0.25, 0.5));
        assert_eq!(rgb, Rgb8::new(255, 0, 128));
    }

    #[test]
    fn display_formats_as_hex_triplet() {
        assert_eq!(format!("{}", Rgb8::new(255, 0, 128).packed()), "#FF0080");
        assert_eq!(format!("{}", Rgb8::new(0, 0, 0).packed()), "#000000");
    }
}

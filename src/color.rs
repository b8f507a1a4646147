//! Flattening of premultiplied 16-bit RGBA samples into `RRGGBB` fill colors.

use std::fmt;

/// Largest value of a 16-bit color sample.
const SAMPLE_MAX: u32 = 0xFFFF;

/// A 6-digit uppercase `RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    fn from_channels(r: u8, g: u8, b: u8) -> Self {
        HexColor(format!("{:02X}{:02X}{:02X}", r, g, b))
    }

    /// The color as `RRGGBB`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How a pixel's alpha is folded into its fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaMode {
    /// Alpha is reduced to a whole fraction with integer division: fully
    /// opaque pixels keep their color, every other pixel becomes black.
    #[default]
    Truncate,
    /// The premultiplied color is composited over a white background.
    BlendWhite,
}

/// Flatten a premultiplied 16-bit RGBA sample to a hex color.
///
/// # Examples
///
/// ```
/// use pixelsheet::color::to_hex_color;
///
/// assert_eq!(to_hex_color(0xFFFF, 0x8080, 0, 0xFFFF).as_str(), "FF8000");
/// assert_eq!(to_hex_color(0xFFFF, 0xFFFF, 0xFFFF, 0).as_str(), "000000");
/// ```
pub fn to_hex_color(r: u32, g: u32, b: u32, a: u32) -> HexColor {
    let alpha_frac = (a / SAMPLE_MAX) as f64;
    let channel = |c: u32| (c as f64 / SAMPLE_MAX as f64 * 255.0 * alpha_frac) as u8;
    HexColor::from_channels(channel(r), channel(g), channel(b))
}

/// Flatten a premultiplied 16-bit RGBA sample using the given alpha mode.
pub fn to_hex_color_with(mode: AlphaMode, r: u32, g: u32, b: u32, a: u32) -> HexColor {
    match mode {
        AlphaMode::Truncate => to_hex_color(r, g, b, a),
        AlphaMode::BlendWhite => blend_white(r, g, b, a),
    }
}

fn blend_white(r: u32, g: u32, b: u32, a: u32) -> HexColor {
    let transparency = 1.0 - a.min(SAMPLE_MAX) as f64 / SAMPLE_MAX as f64;
    let channel = |c: u32| {
        let v = c as f64 / SAMPLE_MAX as f64 * 255.0 + 255.0 * transparency;
        v.clamp(0.0, 255.0) as u8
    };
    HexColor::from_channels(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_opaque_extremes() {
        assert_eq!(to_hex_color(0, 0, 0, 0xFFFF).as_str(), "000000");
        assert_eq!(to_hex_color(0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF).as_str(), "FFFFFF");
        assert_eq!(to_hex_color(0xFFFF, 0, 0, 0xFFFF).as_str(), "FF0000");
    }

    #[test]
    fn test_widened_8bit_values_survive() {
        // 8-bit v widened as v * 0x101 maps back to v
        for v in [0u32, 1, 0x7F, 0x80, 0xAB, 0xFE, 0xFF] {
            let hex = to_hex_color(v * 0x101, 0, 0, 0xFFFF);
            assert_eq!(hex.as_str(), format!("{:02X}0000", v));
        }
    }

    #[test]
    fn test_partial_alpha_truncates_to_black() {
        assert_eq!(to_hex_color(0x8000, 0x8000, 0x8000, 0x8000).as_str(), "000000");
        assert_eq!(to_hex_color(0xFFFE, 0xFFFE, 0xFFFE, 0xFFFE).as_str(), "000000");
    }

    #[test]
    fn test_blend_white() {
        assert_eq!(to_hex_color_with(AlphaMode::BlendWhite, 0, 0, 0, 0).as_str(), "FFFFFF");
        // Half-transparent premultiplied black lands on mid gray
        assert_eq!(
            to_hex_color_with(AlphaMode::BlendWhite, 0, 0, 0, 0x8000).as_str(),
            "7F7F7F"
        );
        // Half-transparent premultiplied quarter red
        assert_eq!(
            to_hex_color_with(AlphaMode::BlendWhite, 0x4000, 0, 0, 0x8000).as_str(),
            "BF7F7F"
        );
    }

    #[test]
    fn test_display_matches_as_str() {
        let hex = to_hex_color(0x1212, 0x3434, 0x5656, 0xFFFF);
        assert_eq!(hex.to_string(), "123456");
        assert_eq!(hex.as_ref(), "123456");
    }

    proptest! {
        #[test]
        fn hex_is_six_uppercase_digits(r in 0u32..=0xFFFF, g in 0u32..=0xFFFF, b in 0u32..=0xFFFF, a in 0u32..=0xFFFF) {
            let hex = to_hex_color(r, g, b, a);
            prop_assert_eq!(hex.as_str().len(), 6);
            prop_assert!(hex.as_str().bytes().all(|c| matches!(c, b'0'..=b'9' | b'A'..=b'F')));
        }

        #[test]
        fn zero_alpha_is_black(r in 0u32..=0xFFFF, g in 0u32..=0xFFFF, b in 0u32..=0xFFFF) {
            let hex = to_hex_color(r, g, b, 0);
            prop_assert_eq!(hex.as_str(), "000000");
        }

        #[test]
        fn opaque_ignores_alpha_mode(r in 0u32..=0xFFFF, g in 0u32..=0xFFFF, b in 0u32..=0xFFFF) {
            prop_assert_eq!(
                to_hex_color_with(AlphaMode::BlendWhite, r, g, b, 0xFFFF),
                to_hex_color(r, g, b, 0xFFFF)
            );
        }

        #[test]
        fn blend_white_is_six_uppercase_digits(r in 0u32..=0xFFFF, g in 0u32..=0xFFFF, b in 0u32..=0xFFFF, a in 0u32..=0xFFFF) {
            let hex = to_hex_color_with(AlphaMode::BlendWhite, r, g, b, a);
            prop_assert!(hex.as_str().bytes().all(|c| matches!(c, b'0'..=b'9' | b'A'..=b'F')));
        }
    }
}

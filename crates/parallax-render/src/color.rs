//! Color algebra: hex parsing, linear interpolation, and the blend equation.

use parallax_spec::BlendFactor;
use thiserror::Error;

/// Error parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("hex color must look like #RRGGBB or #RRGGBBAA, got {0:?}")]
    Malformed(String),
}

/// RGBA color with f64 components (0.0 to 1.0 range at rest).
///
/// Components may leave [0, 1] during blend math; clamping only happens at
/// the 8-bit boundary in [`Color::to_rgba8`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create opaque black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create opaque white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` hex string.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let malformed = || ColorParseError::Malformed(hex.to_string());

        let digits = hex.strip_prefix('#').ok_or_else(malformed)?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(malformed());
        }
        if !digits.is_ascii() {
            return Err(malformed());
        }

        let channel = |range: std::ops::Range<usize>| -> Result<f64, ColorParseError> {
            let byte = u8::from_str_radix(&digits[range], 16).map_err(|_| malformed())?;
            Ok(byte as f64 / 255.0)
        };

        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if digits.len() == 8 { channel(6..8)? } else { 1.0 };

        Ok(Self { r, g, b, a })
    }

    /// Linearly interpolate toward another color: `self * (1 - t) + other * t`.
    ///
    /// Applied independently to all four channels, without clamping `t`; the
    /// blend equation feeds this intermediate values and does its own math
    /// unclamped.
    pub fn mix(&self, other: &Color, t: f64) -> Color {
        Color {
            r: self.r * (1.0 - t) + other.r * t,
            g: self.g * (1.0 - t) + other.g * t,
            b: self.b * (1.0 - t) + other.b * t,
            a: self.a * (1.0 - t) + other.a * t,
        }
    }

    /// Convert to 8-bit RGBA, clamping each channel to [0, 1].
    pub fn to_rgba8(&self) -> [u8; 4] {
        let quantize = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Resolve one blend factor to per-channel RGB weights.
fn factor(which: BlendFactor, dst: &Color, src: &Color) -> [f64; 3] {
    match which {
        BlendFactor::Zero => [0.0; 3],
        BlendFactor::One => [1.0; 3],
        BlendFactor::SrcColor => [src.r, src.g, src.b],
        BlendFactor::OneMinusSrcColor => [1.0 - src.r, 1.0 - src.g, 1.0 - src.b],
        BlendFactor::DstColor => [dst.r, dst.g, dst.b],
        BlendFactor::OneMinusDstColor => [1.0 - dst.r, 1.0 - dst.g, 1.0 - dst.b],
        BlendFactor::SrcAlpha => [src.a; 3],
        BlendFactor::OneMinusSrcAlpha => [1.0 - src.a; 3],
        BlendFactor::DstAlpha => [dst.a; 3],
        BlendFactor::OneMinusDstAlpha => [1.0 - dst.a; 3],
    }
}

/// Combine an accumulated pixel with a layer's contribution:
///
/// `result = dst ⊙ factor(dst_factor) + src ⊙ factor(src_factor)`
///
/// componentwise over RGB. The output alpha is always forced to 1 and no
/// clamping is applied after summation; channels may exceed [0, 1] until the
/// presentation boundary quantizes them.
pub fn blend(dst: &Color, src: &Color, dst_factor: BlendFactor, src_factor: BlendFactor) -> Color {
    let df = factor(dst_factor, dst, src);
    let sf = factor(src_factor, dst, src);
    Color {
        r: dst.r * df[0] + src.r * sf[0],
        g: dst.g * df[1] + src.g * sf[1],
        b: dst.b * df[2] + src.b * sf[2],
        a: 1.0,
    }
}

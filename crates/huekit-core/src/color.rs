//! Normalized RGBA color value.
//!
//! [`Color`] is the only entity in huekit: four `f32` channels that are
//! conceptually in `[0, 1]`. Construction does not clamp; callers may pass
//! out-of-range values and operations that produce output (hex encoding)
//! clamp at their own boundary.
//!
//! Colors are `Copy` values. Every operation returns a new color.
//!
//! ```
//! use huekit_core::Color;
//!
//! let red = Color::opaque(1.0, 0.0, 0.0);
//! let faded = red.with_alpha(0.5);
//! assert_eq!(faded.a, 0.5);
//! assert_eq!(red.a, 1.0);
//! ```
//!
//! # Memory Layout
//!
//! `#[repr(C)]` with channels in R, G, B, A order, matching `[f32; 4]`.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::hex;

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel (1.0 = opaque).
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from four channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color (alpha = 1.0).
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Creates a color from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(rgba: [f32; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Creates a color from 8-bit channels, each divided by 255.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Builds a color from a platform component list.
    ///
    /// Three components are read as opaque RGB, four or more as RGBA
    /// (anything past the fourth is ignored). Fewer than three fails with
    /// [`Error::ComponentExtractionFailed`].
    ///
    /// ```
    /// use huekit_core::{Color, Error};
    ///
    /// assert_eq!(Color::from_components(&[1.0, 0.0, 0.0]), Ok(Color::opaque(1.0, 0.0, 0.0)));
    /// assert_eq!(
    ///     Color::from_components(&[0.5, 1.0]),
    ///     Err(Error::ComponentExtractionFailed { found: 2 })
    /// );
    /// ```
    pub fn from_components(components: &[f32]) -> Result<Self> {
        match *components {
            [r, g, b] => Ok(Self::opaque(r, g, b)),
            [r, g, b, a, ..] => Ok(Self::new(r, g, b, a)),
            _ => {
                debug!(found = components.len(), "too few color components");
                Err(Error::ComponentExtractionFailed {
                    found: components.len(),
                })
            }
        }
    }

    /// Returns `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns `[r, g, b]`, dropping alpha.
    #[inline]
    pub const fn rgb(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns a copy with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Applies `f` to r, g and b. Alpha is carried through unchanged.
    #[inline]
    pub fn map_rgb(self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), self.a)
    }

    /// Combines two colors channel by channel, alpha included.
    #[inline]
    pub fn zip_with(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.r, other.r),
            f(self.g, other.g),
            f(self.b, other.b),
            f(self.a, other.a),
        )
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from(rgba: [f32; 4]) -> Self {
        Self::from_array(rgba)
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl From<(f32, f32, f32, f32)> for Color {
    #[inline]
    fn from((r, g, b, a): (f32, f32, f32, f32)) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Formats as 8 uppercase hex digits, `RRGGBBAA`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(*self, true))
    }
}

/// Parses a 6 or 8 digit hex string, see [`hex::decode`].
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hex::decode(s)
    }
}

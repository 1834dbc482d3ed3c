//! Boundary to platform color objects.
//!
//! UI toolkits hand out opaque color handles whose components have to be
//! extracted through toolkit calls. huekit never looks inside those handles:
//! an adapter implements [`PlatformColor`] for the handle type, and the core
//! works only on [`Color`].
//!
//! ```
//! use huekit_core::{Color, PlatformColor, Result};
//!
//! /// A toolkit color that stores a variable-length component list.
//! struct NativeColor(Vec<f32>);
//!
//! impl PlatformColor for NativeColor {
//!     fn to_rgba(&self) -> Result<Color> {
//!         Color::from_components(&self.0)
//!     }
//!
//!     fn from_rgba(color: Color) -> Self {
//!         NativeColor(color.to_array().to_vec())
//!     }
//! }
//!
//! let gray = NativeColor(vec![0.5, 1.0]);
//! assert!(gray.to_rgba().is_err());
//! ```

use crate::color::Color;
use crate::error::Result;
use crate::hex;

/// Conversion between a platform color handle and a normalized [`Color`].
pub trait PlatformColor: Sized {
    /// Extracts normalized RGBA components.
    ///
    /// # Errors
    ///
    /// [`Error::ComponentExtractionFailed`](crate::Error::ComponentExtractionFailed)
    /// if the platform cannot supply at least three components.
    fn to_rgba(&self) -> Result<Color>;

    /// Builds a platform handle from a normalized color.
    fn from_rgba(color: Color) -> Self;
}

/// A plain `[r, g, b, a]` array is its own handle and never fails.
impl PlatformColor for [f32; 4] {
    #[inline]
    fn to_rgba(&self) -> Result<Color> {
        Ok(Color::from_array(*self))
    }

    #[inline]
    fn from_rgba(color: Color) -> Self {
        color.to_array()
    }
}

impl PlatformColor for Color {
    #[inline]
    fn to_rgba(&self) -> Result<Color> {
        Ok(*self)
    }

    #[inline]
    fn from_rgba(color: Color) -> Self {
        color
    }
}

/// Encodes a platform color as hex.
///
/// Extraction errors are returned unchanged.
pub fn encode_platform<P: PlatformColor>(handle: &P, include_alpha: bool) -> Result<String> {
    let color = handle.to_rgba()?;
    Ok(hex::encode(color, include_alpha))
}

/// Decodes hex into a platform color.
pub fn decode_platform<P: PlatformColor>(input: &str) -> Result<P> {
    hex::decode(input).map(P::from_rgba)
}

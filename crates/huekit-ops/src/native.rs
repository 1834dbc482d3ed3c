//! Operations on platform color handles.
//!
//! Each function extracts components through [`PlatformColor::to_rgba`],
//! runs the core operation on the normalized [`Color`](huekit_core::Color)
//! and converts back with [`PlatformColor::from_rgba`]. Extraction failures
//! are returned as-is.

use huekit_core::{PlatformColor, Result};

use crate::{adjust_brightness, adjust_luminance, blend, relative_luminance};

pub use huekit_core::adapter::{decode_platform as decode_native, encode_platform as encode_native};

/// [`adjust_brightness`] on a platform handle.
pub fn adjust_brightness_native<P: PlatformColor>(handle: &P, factor: f32) -> Result<P> {
    let color = handle.to_rgba()?;
    Ok(P::from_rgba(adjust_brightness(color, factor)))
}

/// [`adjust_luminance`] on a platform handle.
pub fn adjust_luminance_native<P: PlatformColor>(handle: &P, factor: f32) -> Result<P> {
    let color = handle.to_rgba()?;
    Ok(P::from_rgba(adjust_luminance(color, factor)))
}

/// [`blend()`] two platform handles.
pub fn blend_native<P: PlatformColor>(a: &P, b: &P, ratio: f32) -> Result<P> {
    let a = a.to_rgba()?;
    let b = b.to_rgba()?;
    Ok(P::from_rgba(blend(a, b, ratio)))
}

/// [`relative_luminance`] of a platform handle.
pub fn relative_luminance_native<P: PlatformColor>(handle: &P) -> Result<f32> {
    handle.to_rgba().map(relative_luminance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use huekit_core::{Color, Error};

    /// Stand-in for a toolkit color that may be grayscale (two components).
    #[derive(Debug, PartialEq)]
    struct Native(Vec<f32>);

    impl PlatformColor for Native {
        fn to_rgba(&self) -> Result<Color> {
            Color::from_components(&self.0)
        }

        fn from_rgba(color: Color) -> Self {
            Native(color.to_array().to_vec())
        }
    }

    fn gray() -> Native {
        Native(vec![0.5, 1.0])
    }

    #[test]
    fn test_adjust_roundtrips_through_handle() {
        let h = Native(vec![0.2, 0.4, 0.6]);
        let out = adjust_brightness_native(&h, 0.5).unwrap();
        assert_eq!(out, Native(vec![0.1, 0.2, 0.3, 1.0]));
        let out = adjust_luminance_native(&h, 1.0).unwrap();
        assert_eq!(out, Native(vec![0.2, 0.4, 0.6, 1.0]));
    }

    #[test]
    fn test_blend_native() {
        let a = Native(vec![0.0, 0.0, 0.0, 1.0]);
        let b = Native(vec![1.0, 1.0, 1.0, 1.0]);
        assert_eq!(blend_native(&a, &b, 0.5).unwrap(), Native(vec![0.5, 0.5, 0.5, 1.0]));
    }

    #[test]
    fn test_encode_native() {
        let red = Native(vec![1.0, 0.0, 0.0, 1.0]);
        assert_eq!(encode_native(&red, true).unwrap(), "FF0000FF");
        assert_eq!(decode_native::<Native>("ff000080").unwrap().0[3], 128.0 / 255.0);
        assert_eq!(relative_luminance_native(&red).unwrap(), relative_luminance(Color::opaque(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_extraction_failure_propagates() {
        let expected = Error::ComponentExtractionFailed { found: 2 };
        assert_eq!(encode_native(&gray(), false), Err(expected.clone()));
        assert_eq!(adjust_brightness_native(&gray(), 1.2), Err(expected.clone()));
        assert_eq!(adjust_luminance_native(&gray(), 0.8), Err(expected.clone()));
        assert_eq!(relative_luminance_native(&gray()), Err(expected.clone()));
        let ok = Native(vec![0.0, 0.0, 0.0]);
        assert_eq!(blend_native(&ok, &gray(), 0.5), Err(expected.clone()));
        assert_eq!(blend_native(&gray(), &ok, 0.5), Err(expected));
    }
}

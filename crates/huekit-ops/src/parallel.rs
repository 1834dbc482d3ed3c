//! Batch color operations using Rayon.
//!
//! Every operation in this crate is a pure function of its inputs, so a
//! batch is a plain parallel map. Results are identical to calling the
//! single-color function on each element, in the same order.
//!
//! ```rust
//! use huekit_core::Color;
//! use huekit_ops::parallel;
//!
//! let palette = vec![Color::opaque(0.2, 0.4, 0.6); 1024];
//! let darker = parallel::adjust_brightness_all(&palette, 0.5);
//! assert_eq!(darker.len(), palette.len());
//! ```

use huekit_core::Color;
use rayon::prelude::*;
use tracing::trace;

use crate::{adjust_brightness, adjust_luminance, blend};

/// [`adjust_brightness`] over a slice.
pub fn adjust_brightness_all(colors: &[Color], factor: f32) -> Vec<Color> {
    trace!(len = colors.len(), factor, "adjust_brightness_all");
    colors.par_iter().map(|&c| adjust_brightness(c, factor)).collect()
}

/// [`adjust_luminance`] over a slice.
pub fn adjust_luminance_all(colors: &[Color], factor: f32) -> Vec<Color> {
    trace!(len = colors.len(), factor, "adjust_luminance_all");
    colors.par_iter().map(|&c| adjust_luminance(c, factor)).collect()
}

/// Blends every color toward `target` by `ratio`.
pub fn blend_all(colors: &[Color], target: Color, ratio: f32) -> Vec<Color> {
    trace!(len = colors.len(), ratio, "blend_all");
    colors.par_iter().map(|&c| blend(c, target, ratio)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<Color> {
        (0..=64)
            .map(|i| {
                let t = i as f32 / 64.0;
                Color::new(t, 1.0 - t, t * 0.5, 1.0 - t * 0.25)
            })
            .collect()
    }

    #[test]
    fn test_matches_sequential() {
        let colors = palette();
        let bright = adjust_brightness_all(&colors, 1.4);
        let lum = adjust_luminance_all(&colors, 0.6);
        let mixed = blend_all(&colors, Color::WHITE, 0.3);
        for (i, &c) in colors.iter().enumerate() {
            assert_eq!(bright[i], adjust_brightness(c, 1.4));
            assert_eq!(lum[i], adjust_luminance(c, 0.6));
            assert_eq!(mixed[i], blend(c, Color::WHITE, 0.3));
        }
    }

    #[test]
    fn test_empty() {
        assert!(adjust_brightness_all(&[], 2.0).is_empty());
        assert!(blend_all(&[], Color::BLACK, 0.5).is_empty());
    }
}

//! Brightness and luminance adjustment.
//!
//! Both adjusters scale r, g and b by `factor` and clamp to `[0, 1]`; alpha
//! passes through. `factor > 1` brightens, `factor < 1` darkens, `1.0` is the
//! identity.
//!
//! [`adjust_luminance`] is a separate entry point for callers that think in
//! perceptual terms, but it applies exactly the same channel transform as
//! [`adjust_brightness`]. The two are interchangeable and must stay that way;
//! see [`relative_luminance`](crate::relative_luminance) to measure the result.
//!
//! Factors are not validated. A negative factor drives every channel below
//! zero, which then clamps to black.
//!
//! ```
//! use huekit_core::Color;
//! use huekit_ops::adjust::adjust_brightness;
//!
//! let c = adjust_brightness(Color::new(0.4, 0.6, 0.8, 0.5), 1.5);
//! assert_eq!(c.b, 1.0);
//! assert_eq!(c.a, 0.5);
//! ```

use huekit_core::Color;
use tracing::trace;

#[inline]
fn scale_channel(v: f32, factor: f32) -> f32 {
    (v * factor).clamp(0.0, 1.0)
}

/// Scales r, g, b by `factor` and clamps each to `[0, 1]`.
pub fn adjust_brightness(color: Color, factor: f32) -> Color {
    trace!(factor, "adjust_brightness");
    if factor == 1.0 {
        return color;
    }
    color.map_rgb(|v| scale_channel(v, factor))
}

/// Perceptual brightness knob. Same transform as [`adjust_brightness`].
pub fn adjust_luminance(color: Color, factor: f32) -> Color {
    trace!(factor, "adjust_luminance");
    adjust_brightness(color, factor)
}

//! Linear blending of two colors.
//!
//! Every channel, alpha included, is interpolated independently:
//!
//! ```text
//! out = a * (1 - ratio) + b * ratio
//! ```
//!
//! This is a straight mix, not Porter-Duff compositing. The ratio is not
//! clamped; values outside `[0, 1]` extrapolate along the same line.

use huekit_core::Color;
use tracing::trace;

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Mixes `a` toward `b` by `ratio`.
///
/// `ratio == 0.0` returns `a`, `ratio == 1.0` returns `b`, both bit-exact.
///
/// ```
/// use huekit_core::Color;
/// use huekit_ops::blend;
///
/// let gray = blend(Color::BLACK, Color::WHITE, 0.5);
/// assert_eq!(gray, Color::new(0.5, 0.5, 0.5, 1.0));
/// ```
pub fn blend(a: Color, b: Color, ratio: f32) -> Color {
    trace!(ratio, "blend");
    if ratio == 0.0 {
        return a;
    }
    if ratio == 1.0 {
        return b;
    }
    a.zip_with(b, |x, y| lerp(x, y, ratio))
}

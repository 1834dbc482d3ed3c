//! WCAG 2.x relative luminance.
//!
//! Each sRGB channel is decoded to linear light, then weighted with the
//! Rec.709 luminance coefficients:
//!
//! ```text
//! lin(v) = v / 12.92                    if v <= 0.03928
//!        = ((v + 0.055) / 1.055)^2.4    otherwise
//! L = 0.2126 * lin(R) + 0.7152 * lin(G) + 0.0722 * lin(B)
//! ```
//!
//! The 0.03928 breakpoint is the one published in WCAG, not the 0.04045 of
//! IEC 61966-2-1. Contrast checks downstream compare against exact thresholds,
//! so the constants must not be substituted.
//!
//! # Reference
//!
//! - WCAG 2.1, "relative luminance" and "contrast ratio" definitions

use huekit_core::Color;

/// WCAG linearization breakpoint.
pub const WCAG_BREAKPOINT: f32 = 0.03928;

/// Rec.709 luminance coefficient for red.
pub const LUMA_R: f32 = 0.2126;
/// Rec.709 luminance coefficient for green.
pub const LUMA_G: f32 = 0.7152;
/// Rec.709 luminance coefficient for blue.
pub const LUMA_B: f32 = 0.0722;

/// Decodes one sRGB channel to linear light using the WCAG breakpoint.
#[inline]
pub fn linearize(v: f32) -> f32 {
    if v <= WCAG_BREAKPOINT {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in `[0, 1]` for in-range input.
///
/// Alpha is ignored.
///
/// ```
/// use huekit_core::Color;
/// use huekit_ops::relative_luminance;
///
/// assert_eq!(relative_luminance(Color::BLACK), 0.0);
/// assert!((relative_luminance(Color::WHITE) - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn relative_luminance(color: Color) -> f32 {
    LUMA_R * linearize(color.r) + LUMA_G * linearize(color.g) + LUMA_B * linearize(color.b)
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`; argument order does not matter.
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

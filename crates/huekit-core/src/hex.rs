//! Hexadecimal color codec.
//!
//! # Format
//!
//! ```text
//! ^#?[0-9A-Fa-f]{6}$    RGB, alpha decodes as 1.0
//! ^#?[0-9A-Fa-f]{8}$    RGBA
//! ```
//!
//! Byte order is R, G, B, [A]. Decoding is case-insensitive and accepts a
//! single optional `#`. Encoding always emits uppercase digits with no prefix.
//!
//! # Quantization
//!
//! Each channel is clamped to `[0, 1]`, scaled by 255 and rounded half away
//! from zero. `encode(decode(h))` reproduces any valid `h` (uppercased), while
//! `decode(encode(c))` may differ from `c` by up to 1/510 per channel.
//!
//! ```rust
//! use huekit_core::{hex, Color};
//!
//! let c = hex::decode("#00ff0080").unwrap();
//! assert_eq!(hex::encode(c, true), "00FF0080");
//! assert_eq!(hex::encode(Color::opaque(1.0, 0.0, 0.0), false), "FF0000");
//! ```

use std::fmt::Write;

use tracing::debug;

use crate::color::Color;
use crate::error::{Error, HexErrorReason, Result};

/// Quantizes a normalized channel to 8 bits.
///
/// Clamps before scaling so out-of-range input cannot overflow. NaN maps to 0.
#[inline]
pub fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Quantizes all four channels, `[r, g, b, a]`.
#[inline]
pub fn to_rgba8(color: Color) -> [u8; 4] {
    [
        quantize(color.r),
        quantize(color.g),
        quantize(color.b),
        quantize(color.a),
    ]
}

/// Encodes a color as 6 (`RRGGBB`) or 8 (`RRGGBBAA`) uppercase hex digits.
pub fn encode(color: Color, include_alpha: bool) -> String {
    let bytes = to_rgba8(color);
    let count = if include_alpha { 4 } else { 3 };
    let mut out = String::with_capacity(count * 2);
    for byte in &bytes[..count] {
        // Writing into a String cannot fail.
        let _ = write!(out, "{byte:02X}");
    }
    out
}

/// Decodes a 6 or 8 digit hex string, optionally prefixed with `#`.
///
/// # Errors
///
/// [`Error::InvalidHexFormat`] if the digit count is not 6 or 8, or if any
/// character is not a hex digit.
pub fn decode(input: &str) -> Result<Color> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    let offset = input.len() - digits.len();

    let fail = |reason: HexErrorReason| {
        debug!(input, %reason, "rejecting hex color");
        Error::InvalidHexFormat {
            input: input.to_owned(),
            reason,
        }
    };

    let mut nibbles = [0u8; 8];
    let mut count = 0;
    for (pos, ch) in digits.char_indices() {
        let Some(value) = ch.to_digit(16) else {
            return Err(fail(HexErrorReason::Digit(offset + pos)));
        };
        if count == nibbles.len() {
            return Err(fail(HexErrorReason::Length(digits.chars().count())));
        }
        nibbles[count] = value as u8;
        count += 1;
    }
    if count != 6 && count != 8 {
        return Err(fail(HexErrorReason::Length(count)));
    }

    let byte = |i: usize| (nibbles[i * 2] << 4) | nibbles[i * 2 + 1];
    let alpha = if count == 8 { byte(3) } else { 0xFF };
    Ok(Color::from_rgba8(byte(0), byte(1), byte(2), alpha))
}

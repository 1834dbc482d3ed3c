//! # huekit-ops
//!
//! Color operations on [`huekit_core::Color`].
//!
//! # Modules
//!
//! - [`luminance`] - WCAG relative luminance and contrast ratio
//! - [`adjust`] - brightness and luminance adjustment
//! - [`blend`](mod@blend) - linear mix of two colors
//! - [`native`] - the same operations on platform color handles
//! - `parallel` - batch versions over slices (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use huekit_core::{hex, Color};
//! use huekit_ops::{adjust_brightness, blend, relative_luminance};
//!
//! let accent = hex::decode("#3366CC").unwrap();
//! let hover = adjust_brightness(accent, 1.2);
//! let muted = blend(accent, Color::WHITE, 0.4);
//!
//! assert!(relative_luminance(hover) > relative_luminance(accent));
//! assert_eq!(hex::encode(muted, false).len(), 6);
//! ```
//!
//! All functions are pure and take colors by value, so they can be called
//! from any thread without synchronization.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adjust;
pub mod blend;
pub mod luminance;
pub mod native;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use adjust::{adjust_brightness, adjust_luminance};
pub use blend::blend;
pub use luminance::{contrast_ratio, relative_luminance};

//! # huekit-core
//!
//! Core types for the huekit color toolkit.
//!
//! - [`Color`] - normalized RGBA value, the canonical in-memory model
//! - [`hex`] - 6/8 digit hexadecimal encode and decode
//! - [`PlatformColor`] - boundary trait for UI toolkit color handles
//! - [`Error`], [`Result`] - the two failure kinds of the toolkit
//!
//! ## Crate Structure
//!
//! ```text
//! huekit-core (this crate)
//!    ^
//!    |
//!    +-- huekit-ops (luminance, brightness, blending)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Color`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adapter;
pub mod color;
pub mod error;
pub mod hex;

pub use adapter::{decode_platform, encode_platform, PlatformColor};
pub use color::Color;
pub use error::{Error, HexErrorReason, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use huekit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapter::PlatformColor;
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::hex;
}

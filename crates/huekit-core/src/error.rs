//! Error types for huekit operations.
//!
//! Every color operation is pure and deterministic, so there is no
//! transient failure class. The two error kinds are:
//!
//! - [`Error::ComponentExtractionFailed`] - a platform color could not
//!   supply at least three normalized components
//! - [`Error::InvalidHexFormat`] - a hex string was malformed
//!
//! # Usage
//!
//! ```rust
//! use huekit_core::{hex, Error};
//!
//! match hex::decode("12345") {
//!     Err(Error::InvalidHexFormat { .. }) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use std::fmt;

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a hex string was rejected.
///
/// Both reasons map to the same error kind; the distinction is kept for
/// diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexErrorReason {
    /// Digit count after stripping `#` was not 6 or 8.
    Length(usize),
    /// A character outside `[0-9A-Fa-f]` at the given byte offset.
    Digit(usize),
}

impl fmt::Display for HexErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(n) => write!(f, "expected 6 or 8 digits, got {n}"),
            Self::Digit(pos) => write!(f, "non-hex character at offset {pos}"),
        }
    }
}

/// Errors reported by color decoding and platform extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The platform color yielded fewer than three components.
    ///
    /// Originates in a [`PlatformColor`](crate::PlatformColor) adapter and
    /// is propagated unchanged to the caller.
    #[error("component extraction failed: need at least 3 components, found {found}")]
    ComponentExtractionFailed {
        /// Number of components the platform handle provided.
        found: usize,
    },

    /// The input is not a 6 or 8 digit hex color.
    #[error("invalid hex color {input:?}: {reason}")]
    InvalidHexFormat {
        /// The rejected input, as given.
        input: String,
        /// What was wrong with it.
        reason: HexErrorReason,
    },
}

impl Error {
    /// Returns true for [`Error::InvalidHexFormat`].
    pub fn is_hex_format(&self) -> bool {
        matches!(self, Self::InvalidHexFormat { .. })
    }
}

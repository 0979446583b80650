//! Error handling for BoardKit
//!
//! Two things can actually go wrong with a board design:
//! - The strips are wider than the board (fit overflow)
//! - A persisted design document cannot be decoded (load failure)
//!
//! Everything else is rejected at the input boundary before it reaches the
//! layout model, and is reported through [`DesignError`].
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout error type
///
/// Raised when the strip sequence does not fit the board envelope.
/// Recoverable: the user adjusts strip widths or the board size.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Occupied width exceeds the board width
    #[error("Strips overflow the board by {overflow:.3} in")]
    Overflow {
        /// Amount (in inches) by which the strips exceed the board width.
        overflow: f64,
    },
}

/// Design editing error type
///
/// Represents edits rejected at the input boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// Attempt to remove the only remaining strip
    #[error("A design must keep at least one strip")]
    LastStrip,

    /// Strip index does not exist
    #[error("Strip {index} does not exist (design has {len} strips)")]
    IndexOutOfRange {
        /// The requested zero-based index.
        index: usize,
        /// Number of strips in the design.
        len: usize,
    },

    /// Wood type not present in the catalog
    #[error("Unknown wood type: {name}")]
    UnknownWood {
        /// The name that failed to resolve.
        name: String,
    },

    /// Strip width outside the allowed range
    #[error("Strip width {value} is outside [{min}, {max}]")]
    WidthOutOfRange {
        /// The rejected width in inches.
        value: f64,
        /// Minimum allowed width.
        min: f64,
        /// Maximum allowed width (the board width).
        max: f64,
    },

    /// Board dimension outside the allowed range
    #[error("Board {dimension} {value} is outside [{min}, {max}]")]
    BoardOutOfRange {
        /// Which dimension ("width", "length" or "thickness").
        dimension: &'static str,
        /// The rejected value in inches.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// Strip count outside the allowed range
    #[error("Strip count {requested} is outside [1, {max}]")]
    StripCount {
        /// The requested number of strips.
        requested: usize,
        /// Maximum number of strips.
        max: usize,
    },

    /// Unknown board preset name
    #[error("Unknown board preset: {name}")]
    UnknownPreset {
        /// The name that failed to resolve.
        name: String,
    },
}

/// Design file error type
///
/// Represents failures decoding or writing a persisted design document.
#[derive(Error, Debug)]
pub enum DesignFileError {
    /// Document is not valid JSON or not a JSON object
    #[error("Failed to parse design file: {reason}")]
    Parse {
        /// The reason parsing failed.
        reason: String,
    },

    /// Document decoded but describes an impossible design
    #[error("Invalid design file: {reason}")]
    Invalid {
        /// The reason the document was rejected.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DesignFileError {
    fn from(err: serde_json::Error) -> Self {
        DesignFileError::Parse {
            reason: err.to_string(),
        }
    }
}

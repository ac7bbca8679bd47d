//! Error types for packed color parsing.

use thiserror::Error;

/// Error when parsing a hex color literal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Nothing to parse after trimming.
    #[error("empty color literal")]
    Empty,

    /// A character outside `[0-9a-fA-F]`, or a missing `#` prefix.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Hex digits must number 3, 4, 6 or 8.
    #[error("invalid hex color length: {0} digits")]
    InvalidLength(usize),
}

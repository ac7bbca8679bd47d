//! Error types for palette loading and logger setup.
//!
//! Parsing a description never fails; only the edges that read external
//! input do.

use packed::ColorParseError;
use thiserror::Error;

/// Error when building a palette from text or a file.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A line that is neither an entry, an alias, a comment nor blank.
    #[error("line {line}: cannot parse {content:?}")]
    InvalidLine { line: usize, content: String },

    /// An alias pointing at a name the palette does not define.
    #[error("alias {alias:?} refers to unknown color {target:?}")]
    UnknownAlias { alias: String, target: String },

    /// The same name defined twice.
    #[error("duplicate color name: {0}")]
    DuplicateName(String),

    /// A malformed hex literal.
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorParseError),

    /// I/O error reading a palette file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error when installing the file logger.
#[derive(Debug, Error)]
pub enum LogInitError {
    /// Another logger is already installed for this process.
    #[error("logger already initialized")]
    AlreadySet(#[from] log::SetLoggerError),

    /// The log file could not be opened.
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
}

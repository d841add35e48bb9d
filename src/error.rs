//! Error type for the fallible parts of the crate.

use thiserror::Error;

/// Errors produced while reading colors from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input was not exactly six hexadecimal digits after trimming
    /// whitespace and an optional leading `#`.
    #[error("invalid hex color {0:?}: expected 6 hexadecimal digits")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;

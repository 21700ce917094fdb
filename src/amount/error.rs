//! Error types for parsing and formatting amounts.

use thiserror::Error;

use crate::Amount;

/// Error returned by [`parse`](super::parse) and the unmarshal adapters.
///
/// Positions are byte offsets into the original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("parse error, stray + at position {position}")]
    StrayPlus { position: usize },

    #[error("parse error, stray - at position {position}")]
    StrayMinus { position: usize },

    #[error("parse error, too many decimal points")]
    TooManyDecimalPoints { position: usize },

    #[error("parse error, unknown character: {character} of '{input}'")]
    UnknownCharacter {
        character: char,
        position: usize,
        input: String,
    },
}

/// Error returned when formatting at a unit boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unit of {0:?} is not a power of ten satoshis")]
    InvalidUnit(Amount),
}

use crate::String;
use crate::ToString;
use core::num::{IntErrorKind, ParseIntError};
use thiserror::Error;

/// Why a token could not be turned into an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token had no digits at all.
    #[error("empty token")]
    Empty,

    /// The token contained a character that is not a digit of the expected radix.
    #[error("invalid digit in '{token}'")]
    InvalidDigit { token: String },

    /// The digits were valid but the value does not fit in an `i64`.
    #[error("'{token}' does not fit in a 64-bit signed integer")]
    OutOfRange { token: String },
}

impl ParseError {
    /// Classify a standard library integer parse failure for `token`.
    pub(crate) fn from_int_error(error: &ParseIntError, token: &str) -> Self {
        match error.kind() {
            IntErrorKind::Empty => ParseError::Empty,
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::OutOfRange {
                token: token.to_string(),
            },
            _ => ParseError::InvalidDigit {
                token: token.to_string(),
            },
        }
    }
}

//! Errors reported by [`Evaluator::enter`](super::Evaluator::enter).
//!
//! Every error leaves the stack exactly as it was before the failing call.
//! Parse failures from the injected parser are folded into
//! [`ErrorKind::UnknownOperation`]; callers never see a
//! [`ParseError`](crate::parser::ParseError).

use crate::String;
use crate::evaluator::Operator;
use thiserror::Error;

/// The reason a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The token is neither an operator nor a number the parser accepts.
    #[error("Unknown operation.")]
    UnknownOperation,

    /// An operator needed more values than the stack holds.
    #[error("Too few elements on stack.")]
    InsufficientOperands { required: usize, available: usize },

    /// Checked arithmetic produced a result outside the `i64` range.
    #[error("Arithmetic overflow in '{operator}'.")]
    ArithmeticOverflow { operator: Operator },

    /// Pushing would grow the stack past its maximum depth.
    #[error("Stack is full (maximum depth {max_depth}).")]
    StackOverflow { max_depth: usize },
}

/// A rejected token together with the reason it was rejected.
///
/// `Display` shows only the reason; the token is kept so front ends can point
/// at it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: ErrorKind,
    pub token: String,
}

impl EvalError {
    pub fn new(kind: ErrorKind, token: impl Into<String>) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }
}

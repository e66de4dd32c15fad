//! Token-at-a-time RPN evaluator.
//!
//! The evaluator owns a stack of `i64` values and a [`NumberParser`] injected
//! at construction. Each call to [`Evaluator::enter`] handles one token:
//!
//! 1. `"+"` pops two values and pushes their sum.
//! 2. `"*"` pops two values and pushes their product.
//! 3. Anything else goes to the parser; a parsed value is pushed, a parse
//!    failure is reported as [`ErrorKind::UnknownOperation`].
//!
//! ## Design Principles
//!
//! - **Never panic**: malformed tokens and arithmetic overflow are errors or
//!   wrap, depending on [`OverflowMode`].
//! - **Atomic**: a failed `enter` leaves the stack exactly as it was.
//!
//! ## Example
//!
//! ```
//! use rpncalc_core::evaluator::{ErrorKind, Evaluator};
//!
//! let mut rpn = Evaluator::default();
//! rpn.enter("3").unwrap();
//! rpn.enter("4").unwrap();
//! rpn.enter("+").unwrap();
//! assert_eq!(rpn.stack().peek(), Some(&7));
//!
//! let err = rpn.enter("ABC").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnknownOperation);
//! assert_eq!(rpn.stack().len(), 1);
//! ```

mod error;
mod eval;
mod operators;

#[cfg(test)]
mod eval_test;

pub use error::{ErrorKind, EvalError};
pub use eval::Evaluator;
pub use operators::Operator;

use crate::stack::DEFAULT_MAX_DEPTH;

/// What arithmetic does when a result does not fit in an `i64`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OverflowMode {
    /// Two's-complement wrapping, e.g. `i64::MAX + 1 == i64::MIN`.
    #[default]
    Wrapping,
    /// Reject the operation with [`ErrorKind::ArithmeticOverflow`].
    Checked,
}

/// Configuration options for an [`Evaluator`].
///
/// # Example
///
/// ```
/// use rpncalc_core::evaluator::{EvaluatorOptions, OverflowMode};
///
/// let options = EvaluatorOptions {
///     overflow: OverflowMode::Checked,
///     max_depth: 64,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Overflow behaviour of `+` and `*`.
    ///
    /// Default: [`OverflowMode::Wrapping`]
    pub overflow: OverflowMode,

    /// Maximum number of values the stack may hold.
    ///
    /// Default: 4096
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            overflow: OverflowMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

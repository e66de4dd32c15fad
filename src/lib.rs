//! rpncalc - a Reverse Polish Notation calculator
//!
//! # Overview
//!
//! Tokens are fed one at a time to an [`Evaluator`]. Numbers are pushed onto
//! its stack; `+` and `*` replace the top two values with their sum or
//! product. Which spellings count as numbers is decided by the
//! [`NumberParser`] injected at construction.
//!
//! # Quick Start
//!
//! ```
//! use rpncalc::{Evaluator, ErrorKind};
//!
//! let mut rpn = Evaluator::default();
//! for token in ["3", "4", "+", "2", "*"] {
//!     rpn.enter(token).unwrap();
//! }
//! assert_eq!(rpn.stack().peek(), Some(&14));
//!
//! let err = rpn.enter("+").unwrap_err();
//! assert!(matches!(err.kind(), ErrorKind::InsufficientOperands { .. }));
//! ```
//!
//! # Choosing a parser
//!
//! ```
//! use rpncalc::{Evaluator, LiteralParser};
//!
//! let mut rpn = Evaluator::new(LiteralParser);
//! rpn.enter("0xff").unwrap();
//! rpn.enter("1_000").unwrap();
//! rpn.enter("+").unwrap();
//! assert_eq!(rpn.stack().peek(), Some(&1255));
//! ```

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export the public API from rpncalc_core
pub use rpncalc_core::evaluator::{
    ErrorKind, EvalError, Evaluator, EvaluatorOptions, Operator, OverflowMode,
};
pub use rpncalc_core::parser::{IntegerParser, LiteralParser, NumberParser, ParseError};
pub use rpncalc_core::stack::{self, Stack};

//! Core of the rpncalc Reverse Polish Notation calculator.
//!
//! The crate is split into three pieces:
//!
//! - [`stack`]: the bounded LIFO stack that holds operands.
//! - [`parser`]: the [`NumberParser`](parser::NumberParser) capability that
//!   turns tokens into integers.
//! - [`evaluator`]: the [`Evaluator`](evaluator::Evaluator) that dispatches
//!   tokens to operators or the parser and mutates the stack.
//!
//! ```
//! use rpncalc_core::evaluator::Evaluator;
//!
//! let mut rpn = Evaluator::default();
//! for token in ["3", "4", "+", "2", "*"] {
//!     rpn.enter(token).unwrap();
//! }
//! assert_eq!(rpn.stack().as_slice(), &[14]);
//! ```
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod evaluator;
pub mod parser;
pub mod stack;

//! Core evaluation logic.

use crate::{
    evaluator::{
        EvaluatorOptions, Operator,
        error::{ErrorKind, EvalError},
    },
    parser::{IntegerParser, NumberParser},
    stack::Stack,
};
use tracing::{debug, trace};

/// Stack-based evaluator for RPN tokens.
///
/// Generic over the [`NumberParser`] so tests can inject a parser with
/// controlled outcomes and hosts can pick the literal syntax they accept.
#[derive(Debug)]
pub struct Evaluator<P = IntegerParser> {
    options: EvaluatorOptions,
    parser: P,
    stack: Stack<i64>,
}

impl<P: NumberParser> Evaluator<P> {
    /// Create an evaluator with an empty stack and default options.
    pub fn new(parser: P) -> Self {
        Self::with_options(parser, EvaluatorOptions::default())
    }

    /// Create an evaluator with an empty stack and the given options.
    pub fn with_options(parser: P, options: EvaluatorOptions) -> Self {
        Self {
            stack: Stack::new(options.max_depth),
            options,
            parser,
        }
    }

    /// Feed one token to the evaluator.
    ///
    /// On success the stack has been updated; read it with [`stack`](Self::stack).
    /// On failure the stack is unchanged.
    pub fn enter(&mut self, token: &str) -> Result<(), EvalError> {
        match Operator::from_token(token) {
            Some(op) => {
                debug!(%op, depth = self.stack.len(), "Applying operator");
                self.apply(op, token)
            }
            None => self.push_number(token),
        }
    }

    /// The current stack. Values are only changed through [`enter`](Self::enter).
    pub fn stack(&self) -> &Stack<i64> {
        &self.stack
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    fn push_number(&mut self, token: &str) -> Result<(), EvalError> {
        let value = match self.parser.parse(token) {
            Ok(value) => value,
            Err(e) => {
                debug!(token, error = %e, "Token is neither an operator nor a number");
                return Err(EvalError::new(ErrorKind::UnknownOperation, token));
            }
        };

        self.stack.push(value).map_err(|full| {
            debug!(token, max_depth = full.max_size, "Stack is full");
            EvalError::new(
                ErrorKind::StackOverflow {
                    max_depth: full.max_size,
                },
                token,
            )
        })?;
        trace!(value, depth = self.stack.len(), "Pushed value");
        Ok(())
    }

    fn apply(&mut self, op: Operator, token: &str) -> Result<(), EvalError> {
        let required = op.arity();
        let Some(&[lhs, rhs]) = self.stack.top_n(required) else {
            return Err(EvalError::new(
                ErrorKind::InsufficientOperands {
                    required,
                    available: self.stack.len(),
                },
                token,
            ));
        };

        // Compute before touching the stack so a checked overflow leaves it intact.
        let result = op
            .apply(lhs, rhs, self.options.overflow)
            .ok_or_else(|| EvalError::new(ErrorKind::ArithmeticOverflow { operator: op }, token))?;

        let replaced = self.stack.replace_top(required, result);
        debug_assert!(replaced, "top_n({required}) succeeded but replace_top did not");
        trace!(lhs, rhs, result, "Applied operator");
        Ok(())
    }
}

impl Default for Evaluator<IntegerParser> {
    fn default() -> Self {
        Self::new(IntegerParser)
    }
}

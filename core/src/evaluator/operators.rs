//! Built-in operators and their integer arithmetic.

use crate::evaluator::OverflowMode;
use core::fmt;

/// An operator token recognised by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Mul,
}

impl Operator {
    pub const ALL: [Operator; 2] = [Operator::Add, Operator::Mul];

    /// Matches the token exactly; no trimming or case folding.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "*" => Some(Operator::Mul),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Mul => "*",
        }
    }

    /// Number of operands the operator consumes from the stack.
    pub fn arity(self) -> usize {
        match self {
            Operator::Add | Operator::Mul => 2,
        }
    }

    /// Apply the operator to two operands.
    ///
    /// `lhs` is the older value (second popped) and `rhs` the newer one (the
    /// top of the stack). Returns `None` only in checked mode, on overflow.
    pub fn apply(self, lhs: i64, rhs: i64, mode: OverflowMode) -> Option<i64> {
        match (self, mode) {
            (Operator::Add, OverflowMode::Wrapping) => Some(lhs.wrapping_add(rhs)),
            (Operator::Add, OverflowMode::Checked) => lhs.checked_add(rhs),
            (Operator::Mul, OverflowMode::Wrapping) => Some(lhs.wrapping_mul(rhs)),
            (Operator::Mul, OverflowMode::Checked) => lhs.checked_mul(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

//! Turning tokens into integers.
//!
//! The evaluator never converts text itself; it asks a [`NumberParser`]
//! injected at construction. This keeps the token dispatch testable against
//! controlled parse outcomes and lets hosts choose which literal forms they
//! accept.
//!
//! Two implementations are provided:
//!
//! - [`IntegerParser`]: plain decimal integers with an optional sign.
//! - [`LiteralParser`]: decimal, `0x`/`0o`/`0b` prefixed integers with `_`
//!   digit separators.
//!
//! ```
//! use rpncalc_core::parser::{IntegerParser, LiteralParser, NumberParser};
//!
//! assert_eq!(IntegerParser.parse("-12"), Ok(-12));
//! assert_eq!(LiteralParser.parse("0xff"), Ok(255));
//! assert!(IntegerParser.parse("0xff").is_err());
//! ```

mod error;
mod integer;
mod literal;


pub use error::ParseError;
pub use integer::IntegerParser;
pub use literal::LiteralParser;

use crate::Box;

/// Capability for converting a token into a signed integer.
///
/// Implementations must not have side effects observable by the evaluator
/// beyond attempting the conversion. Tokens outside the `i64` range fail with
/// [`ParseError::OutOfRange`]; they never wrap.
pub trait NumberParser {
    fn parse(&self, token: &str) -> Result<i64, ParseError>;
}

impl<P: NumberParser + ?Sized> NumberParser for &P {
    fn parse(&self, token: &str) -> Result<i64, ParseError> {
        (**self).parse(token)
    }
}

impl<P: NumberParser + ?Sized> NumberParser for Box<P> {
    fn parse(&self, token: &str) -> Result<i64, ParseError> {
        (**self).parse(token)
    }
}

use super::{NumberParser, ParseError};

/// Parses decimal integers such as `42`, `-17` or `+5`.
///
/// Leading and trailing whitespace is ignored. Radix prefixes and digit
/// separators are rejected; use [`LiteralParser`](super::LiteralParser) for
/// those.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IntegerParser;

impl NumberParser for IntegerParser {
    fn parse(&self, token: &str) -> Result<i64, ParseError> {
        let trimmed = token.trim();
        trimmed
            .parse::<i64>()
            .map_err(|e| ParseError::from_int_error(&e, trimmed))
    }
}

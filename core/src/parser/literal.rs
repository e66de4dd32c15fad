use super::{NumberParser, ParseError};
use crate::String;

/// Parses integer literals in the forms an expression language accepts.
///
/// On top of plain decimal integers this understands:
///
/// - radix prefixes `0x` (hex), `0o` (octal) and `0b` (binary), in either case,
/// - `_` digit separators anywhere after the first digit or prefix,
/// - an optional leading sign before the prefix (`-0x10` is `-16`).
///
/// Leading and trailing whitespace is ignored.
///
/// ```
/// use rpncalc_core::parser::{LiteralParser, NumberParser};
///
/// assert_eq!(LiteralParser.parse("1_000"), Ok(1000));
/// assert_eq!(LiteralParser.parse("0b1010"), Ok(10));
/// assert_eq!(LiteralParser.parse("-0x_ff"), Ok(-255));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LiteralParser;

impl NumberParser for LiteralParser {
    fn parse(&self, token: &str) -> Result<i64, ParseError> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let (negative, unsigned) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (radix, body) = split_radix(unsigned);

        // A separator may not stand in for the first digit of a decimal literal.
        if radix == 10 && body.starts_with('_') {
            return Err(ParseError::InvalidDigit {
                token: trimmed.into(),
            });
        }

        let cleaned: String = body.chars().filter(|&c| c != '_').collect();
        if cleaned.is_empty() || cleaned.starts_with(['+', '-']) {
            return Err(ParseError::InvalidDigit {
                token: trimmed.into(),
            });
        }

        // Keep the sign attached so i64::MIN parses without overflow.
        let digits = if negative {
            let mut signed = String::with_capacity(cleaned.len() + 1);
            signed.push('-');
            signed.push_str(&cleaned);
            signed
        } else {
            cleaned
        };

        i64::from_str_radix(&digits, radix).map_err(|e| ParseError::from_int_error(&e, trimmed))
    }
}

fn split_radix(unsigned: &str) -> (u32, &str) {
    let bytes = unsigned.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &unsigned[2..]),
            b'o' | b'O' => return (8, &unsigned[2..]),
            b'b' | b'B' => return (2, &unsigned[2..]),
            _ => {}
        }
    }
    (10, unsigned)
}

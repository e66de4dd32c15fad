use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    #[token("+")]
    #[token("*")]
    Operator,

    #[regex(r"[+-]?[0-9][0-9_]*", priority = 3)]
    Decimal,

    // Radix-prefixed literals, only numbers when `--literals` is on.
    #[regex(r"[+-]?0[xX][0-9a-fA-F_]+", priority = 3)]
    #[regex(r"[+-]?0[oO][0-7_]+", priority = 3)]
    #[regex(r"[+-]?0[bB][01_]+", priority = 3)]
    Prefixed,

    #[token(":q", priority = 4)]
    #[token(":quit", priority = 4)]
    Quit,

    #[regex(r"[^ \t\f\r\n]+", priority = 1)]
    Other,
}

/// How a whole input line will be treated by the read-print loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    Operator,
    Number,
    /// A number only [`LiteralParser`](rpncalc::LiteralParser) accepts.
    Literal,
    Quit,
    Unknown,
}

/// Classify a line the way the evaluator will see it.
///
/// Operators must match exactly (no surrounding whitespace) while numbers and
/// quit commands may be padded. A line holding more than one token is
/// `Unknown`, since the evaluator takes each line as a single token.
pub fn classify_line(line: &str) -> LineKind {
    let mut lexer = Token::lexer(line);

    let first = match lexer.next() {
        None => return LineKind::Empty,
        Some(Ok(token)) => token,
        Some(Err(())) => return LineKind::Unknown,
    };
    if lexer.next().is_some() {
        return LineKind::Unknown;
    }

    match first {
        Token::Operator if line.len() == 1 => LineKind::Operator,
        Token::Operator | Token::Other => LineKind::Unknown,
        Token::Decimal if line.contains('_') => LineKind::Literal,
        Token::Decimal => LineKind::Number,
        Token::Prefixed => LineKind::Literal,
        Token::Quit => LineKind::Quit,
    }
}

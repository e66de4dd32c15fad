//! The read-print loop: one line in, error and stack lines out.

use crate::lexer::{LineKind, classify_line};
use miette::Diagnostic;
use rpncalc::{Evaluator, NumberParser, Stack, render_error_to};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, Diagnostic)]
pub enum SessionError {
    #[error("Failed to read input")]
    #[diagnostic(code(rpncalc::read))]
    Read(#[source] io::Error),

    #[error("Failed to write output")]
    #[diagnostic(code(rpncalc::write))]
    Write(#[source] io::Error),
}

/// Order in which the stack is printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StackOrder {
    /// Most recently pushed value first.
    #[default]
    TopFirst,
    BottomFirst,
}

#[derive(Debug, Default, Clone)]
pub struct DisplayOptions {
    pub order: StackOrder,
    /// Render errors as annotated reports instead of a single message line.
    pub pretty_errors: bool,
    /// Only used for pretty errors.
    pub color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Format a stack as `stack: [5 2]`.
pub fn format_stack(stack: &Stack<i64>, order: StackOrder) -> String {
    let values: Vec<String> = match order {
        StackOrder::TopFirst => stack.iter_top_first().map(i64::to_string).collect(),
        StackOrder::BottomFirst => stack.iter().map(i64::to_string).collect(),
    };
    format!("stack: [{}]", values.join(" "))
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

pub struct Session<P> {
    evaluator: Evaluator<P>,
    display: DisplayOptions,
}

impl<P: NumberParser> Session<P> {
    pub fn new(evaluator: Evaluator<P>, display: DisplayOptions) -> Self {
        Self { evaluator, display }
    }

    pub fn evaluator(&self) -> &Evaluator<P> {
        &self.evaluator
    }

    /// Handle one input line: enter it, report any error, print the stack.
    ///
    /// The line is passed to the evaluator verbatim. Only `:q` / `:quit`
    /// are intercepted.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Outcome, SessionError> {
        if classify_line(line) == LineKind::Quit {
            info!("Quit requested");
            return Ok(Outcome::Quit);
        }

        self.enter(line, out)?;
        self.print_stack(out)?;
        Ok(Outcome::Continue)
    }

    /// Evaluate tokens in order, reporting errors as they happen, then print
    /// the final stack once.
    pub fn run_tokens<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
        out: &mut dyn Write,
    ) -> Result<(), SessionError> {
        for token in tokens {
            self.enter(token.as_ref(), out)?;
        }
        self.print_stack(out)
    }

    /// Read lines until end of input or a quit command.
    ///
    /// Lines that are not valid UTF-8 are decoded lossily and evaluated like
    /// any other line. Only I/O failures end the loop early.
    pub fn run_lines<R: BufRead>(
        &mut self,
        mut input: R,
        out: &mut dyn Write,
    ) -> Result<(), SessionError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input
                .read_until(b'\n', &mut buf)
                .map_err(SessionError::Read)?
                == 0
            {
                break;
            }
            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            if self.handle_line(&line, out)? == Outcome::Quit {
                break;
            }
        }
        debug!(depth = self.evaluator().stack().len(), "Input finished");
        Ok(())
    }

    fn enter(&mut self, token: &str, out: &mut dyn Write) -> Result<(), SessionError> {
        let Err(error) = self.evaluator.enter(token) else {
            return Ok(());
        };
        debug!(token, %error, "Token rejected");

        if self.display.pretty_errors {
            render_error_to(&error, out, self.display.color).map_err(SessionError::Write)
        } else {
            writeln!(out, "{error}").map_err(SessionError::Write)
        }
    }

    fn print_stack(&self, out: &mut dyn Write) -> Result<(), SessionError> {
        writeln!(out, "{}", format_stack(self.evaluator.stack(), self.display.order))
            .map_err(SessionError::Write)
    }
}

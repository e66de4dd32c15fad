//! Error rendering using ariadne
//!
//! An [`EvalError`] carries the rejected token. These helpers render it as a
//! report with the token as the source line and a label underneath it.

use crate::{ErrorKind, EvalError};
use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
pub fn render_error(error: &EvalError) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(
    error: &EvalError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    render_error_to_writer(error, writer, use_color)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(error: &EvalError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &EvalError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn label_message(kind: &ErrorKind) -> String {
    match kind {
        ErrorKind::UnknownOperation => "not an operator or a number".to_string(),
        ErrorKind::InsufficientOperands {
            required,
            available,
        } => format!("needs {required} values, stack has {available}"),
        ErrorKind::ArithmeticOverflow { operator } => {
            format!("result of '{operator}' does not fit in 64 bits")
        }
        ErrorKind::StackOverflow { max_depth } => {
            format!("stack already holds {max_depth} values")
        }
    }
}

fn help_message(kind: &ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::UnknownOperation => Some("operators are '+' and '*'"),
        ErrorKind::InsufficientOperands { .. } => Some("push more numbers before applying it"),
        ErrorKind::ArithmeticOverflow { .. } | ErrorKind::StackOverflow { .. } => None,
    }
}

fn render_error_to_writer(
    error: &EvalError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    // An empty token still gets a one-column label so the report points somewhere.
    let source = if error.token().is_empty() {
        " ".to_string()
    } else {
        error.token().to_string()
    };
    let span = 0..source.chars().count();

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(error.to_string())
        .with_config(Config::default().with_color(use_color))
        .with_label(
            Label::new((SOURCE_ID, span))
                .with_message(label_message(&error.kind()))
                .with_color(Color::Red),
        );

    if let Some(help) = help_message(&error.kind()) {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

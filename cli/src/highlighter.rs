use crate::lexer::{LineKind, classify_line};
use nu_ansi_term::{Color, Style};
use reedline::StyledText;

#[derive(Debug)]
struct PaletteItem {
    kind: LineKind,
    fg: Color,
}

const PALETTE: &[PaletteItem] = &[
    PaletteItem { kind: LineKind::Empty, fg: Color::White },
    PaletteItem { kind: LineKind::Operator, fg: Color::Magenta },
    PaletteItem { kind: LineKind::Number, fg: Color::Cyan },
    PaletteItem { kind: LineKind::Literal, fg: Color::Cyan },
    PaletteItem { kind: LineKind::Quit, fg: Color::Yellow },
    PaletteItem { kind: LineKind::Unknown, fg: Color::Red },
];

/// Colours the input line by how the calculator will interpret it.
pub struct Highlighter {
    /// Whether prefixed literals (`0xff`, `1_000`) count as numbers.
    literals: bool,
}

impl Highlighter {
    pub fn new(literals: bool) -> Self {
        Self { literals }
    }

    fn color_for(&self, line: &str) -> Color {
        let kind = match classify_line(line) {
            LineKind::Literal if !self.literals => LineKind::Unknown,
            kind => kind,
        };
        PALETTE
            .iter()
            .find(|item| item.kind == kind)
            .map_or(PALETTE[0].fg, |item| item.fg)
    }
}

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let style = Style::new().fg(self.color_for(line));
        output.push((style, line.to_string()));
        output
    }
}

mod highlighter;
mod lexer;
mod session;

use clap::Parser;
use highlighter::Highlighter;
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, Emacs, IdeMenu,
    KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu,
    Signal, default_emacs_keybindings,
};
use rpncalc::{
    Evaluator, EvaluatorOptions, IntegerParser, LiteralParser, NumberParser, OverflowMode,
    stack::DEFAULT_MAX_DEPTH,
};
use session::{DisplayOptions, Outcome, Session, StackOrder};
use std::io::{BufReader, Write};

/// rpncalc - a Reverse Polish Notation calculator
#[derive(Parser, Debug)]
#[command(name = "rpncalc")]
#[command(about = "Evaluate RPN tokens, one per line", long_about = None)]
struct Args {
    /// Accept 0x/0o/0b prefixes and `_` digit separators in numbers
    #[arg(long)]
    literals: bool,

    /// Reject results that overflow a 64-bit integer instead of wrapping
    #[arg(long)]
    checked: bool,

    /// Maximum number of values the stack may hold
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the stack bottom first instead of top first
    #[arg(long)]
    bottom_first: bool,

    /// Render errors as annotated reports
    #[arg(long)]
    pretty_errors: bool,

    /// Tokens to evaluate (if not provided, reads lines from stdin)
    #[arg(allow_hyphen_values = true)]
    tokens: Vec<String>,
}

impl Args {
    fn evaluator(&self) -> Evaluator<Box<dyn NumberParser>> {
        let parser: Box<dyn NumberParser> = if self.literals {
            Box::new(LiteralParser)
        } else {
            Box::new(IntegerParser)
        };
        let options = EvaluatorOptions {
            overflow: if self.checked {
                OverflowMode::Checked
            } else {
                OverflowMode::Wrapping
            },
            max_depth: self.max_depth,
        };
        Evaluator::with_options(parser, options)
    }

    fn display(&self, color: bool) -> DisplayOptions {
        DisplayOptions {
            order: if self.bottom_first {
                StackOrder::BottomFirst
            } else {
                StackOrder::TopFirst
            },
            pretty_errors: self.pretty_errors,
            color,
        }
    }
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
}

fn setup_reedline(literals: bool) -> (Reedline, DefaultPrompt) {
    let commands: Vec<String> = vec![":quit".to_string(), ":q".to_string()];

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&[':']);
        completions.insert(commands);
        completions
    });

    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(20)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(Highlighter::new(literals)))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(Box::new(ide_menu)))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("rpn".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

fn run_interactive(session: &mut Session<Box<dyn NumberParser>>, literals: bool) -> Result<()> {
    let (mut line_editor, prompt) = setup_reedline(literals);
    let mut stdout = std::io::stdout();

    println!("rpncalc - enter a number, '+' or '*' per line (:q, Ctrl+D or Ctrl+C to exit)");

    loop {
        let sig = line_editor.read_line(&prompt).into_diagnostic()?;

        match sig {
            Signal::Success(buffer) => {
                let outcome = session.handle_line(&buffer, &mut stdout)?;
                stdout.flush().into_diagnostic()?;
                if outcome == Outcome::Quit {
                    return Ok(());
                }
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nGoodbye!");
                return Ok(());
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RPNCALC_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("RPNCALC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let is_interactive = atty::is(atty::Stream::Stdin);
    let color = atty::is(atty::Stream::Stdout);
    let mut session = Session::new(args.evaluator(), args.display(color));
    tracing::debug!(?args, is_interactive, "Starting session");

    // Tokens on the command line take precedence over stdin
    if !args.tokens.is_empty() {
        let mut stdout = std::io::stdout().lock();
        session.run_tokens(&args.tokens, &mut stdout)?;
        return Ok(());
    }

    if is_interactive {
        run_interactive(&mut session, args.literals)
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());
        let mut stdout = std::io::stdout().lock();
        session.run_lines(reader, &mut stdout)?;
        Ok(())
    }
}

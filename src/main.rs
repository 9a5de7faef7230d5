//! Purpose: `sheetcast` CLI entry point: read JSON text, emit its canonical form.
//! Role: Binary crate root; parses args, builds the tree, prints to stdout.
//! Invariants: Stdout carries only the rendered document; diagnostics go to stderr.
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};
use serde_json::{Map, json};
use tracing_subscriber::EnvFilter;

mod color_json;

use color_json::colorize_value;
use sheetcast::api::{BuildOptions, Error, ErrorKind, Value, to_exit_code};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "sheetcast",
    version,
    about = "Build a JSON value tree from input text and print its canonical rendering"
)]
struct Cli {
    /// JSON input path; `-` or absent reads stdin.
    #[arg(value_hint = ValueHint::FilePath)]
    file: Option<PathBuf>,

    /// Maximum container nesting depth accepted while building the tree.
    /// Text input is also subject to the JSON parser's own 128-level
    /// recursion limit, which rejects deeper documents first.
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Pretty-print instead of emitting canonical one-line JSON.
    #[arg(long)]
    pretty: bool,

    /// ANSI colorization for pretty output.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(outcome) => outcome.exit_code,
        Err(err) => {
            let err = add_parse_hint(err);
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<RunOutcome, Error> {
    let text = read_input(cli.file.as_deref())?;

    let mut options = BuildOptions::new();
    if let Some(max_depth) = cli.max_depth {
        options = options.with_max_depth(max_depth);
    }
    let value = Value::from_text_with(&text, options)?;

    if cli.pretty {
        let is_tty = io::stdout().is_terminal();
        println!("{}", colorize_value(&value, cli.color.use_color(is_tty)));
    } else {
        println!("{}", value.render());
    }
    Ok(RunOutcome::ok())
}

fn read_input(file: Option<&std::path::Path>) -> Result<String, Error> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read_to_string(path).map_err(|err| {
                Error::new(ErrorKind::Io)
                    .with_message("failed to read input file")
                    .with_path(path)
                    .with_source(err)
            })
        }
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).map_err(|err| {
                Error::new(ErrorKind::Io)
                    .with_message("failed to read stdin")
                    .with_source(err)
            })?;
            Ok(text)
        }
    }
}

fn add_parse_hint(err: Error) -> Error {
    if err.kind() == ErrorKind::Parse && err.hint().is_none() {
        return err.with_hint("Input must be a single well-formed JSON document.");
    }
    err
}

fn emit_error(err: &Error) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, is_tty));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_json(err: &Error) -> serde_json::Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string());
    inner.insert("message".to_string(), json!(message));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(key) = err.key() {
        inner.insert("key".to_string(), json!(key));
    }
    if let Some(index) = err.index() {
        inner.insert("index".to_string(), json!(index));
    }
    if let Some(depth) = err.depth() {
        inner.insert("depth".to_string(), json!(depth));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), serde_json::Value::Object(inner));
    serde_json::Value::Object(outer)
}

fn error_causes(err: &Error) -> Vec<String> {
    use std::error::Error as _;
    let mut causes = Vec::new();
    let mut cursor = err.source();
    while let Some(cause) = cursor {
        causes.push(cause.to_string());
        cursor = cause.source();
    }
    causes
}

fn error_text(err: &Error, use_color: bool) -> String {
    let label = if use_color {
        "\u{1b}[31merror:\u{1b}[0m"
    } else {
        "error:"
    };
    let mut text = format!("{label} {err}");
    if let Some(hint) = err.hint() {
        text.push_str(&format!("\nhint: {hint}"));
    }
    text
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::{ColorMode, add_parse_hint, error_json, error_text};
    use sheetcast::api::{Error, ErrorKind};

    #[test]
    fn color_mode_resolves_against_tty() {
        assert!(ColorMode::Auto.use_color(true));
        assert!(!ColorMode::Auto.use_color(false));
        assert!(ColorMode::Always.use_color(false));
        assert!(!ColorMode::Never.use_color(true));
    }

    #[test]
    fn error_json_has_stable_shape() {
        let err = Error::new(ErrorKind::Parse)
            .with_message("expected value at line 1 column 2")
            .with_hint("Check the input.");
        let value = error_json(&err);
        let inner = value.get("error").and_then(|v| v.as_object()).expect("error object");
        assert_eq!(inner.get("kind").and_then(|v| v.as_str()), Some("Parse"));
        assert!(inner.get("message").and_then(|v| v.as_str()).is_some());
        assert_eq!(inner.get("hint").and_then(|v| v.as_str()), Some("Check the input."));
    }

    #[test]
    fn parse_hint_is_added_once() {
        let err = add_parse_hint(Error::new(ErrorKind::Parse).with_message("bad"));
        assert!(err.hint().is_some());
        let kept = add_parse_hint(Error::new(ErrorKind::Parse).with_hint("custom"));
        assert_eq!(kept.hint(), Some("custom"));
    }

    #[test]
    fn error_text_respects_color_flag() {
        let err = Error::new(ErrorKind::Io).with_message("boom");
        assert!(error_text(&err, true).contains("\u{1b}[31m"));
        assert!(!error_text(&err, false).contains("\u{1b}["));
    }
}

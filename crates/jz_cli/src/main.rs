//! jz: Token dumper for the jz ECMAScript scanner.
//!
//! Usage:
//!   jz [options] [file...]
//!
//! Reads each file (or stdin when no file or `-` is given) and prints one
//! token per line. Set `JZ_LOG` (e.g. `JZ_LOG=jz_scanner=trace`) to see the
//! scanner's own logging on stderr.

use clap::{Parser as ClapParser, ValueEnum};
use jz_scanner::{ScanError, Scanner, Token};
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(ClapParser, Debug)]
#[command(name = "jz", version, about = "jz - dump the tokens of ECMAScript source files")]
struct Cli {
    /// Source files to scan; `-` or no file reads stdin.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Do not print byte ranges.
    #[arg(long = "no-spans")]
    no_spans: bool,

    /// When to color diagnostics and spans.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `start..end NAME [payload]`
    Text,
    /// One JSON object per token.
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const LOG_ENV: &str = "JZ_LOG";
const STDIN_NAME: &str = "<stdin>";
const STDOUT_NAME: &str = "<stdout>";

#[derive(Debug, Error)]
enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}: {source}")]
    Scan {
        path: String,
        #[source]
        source: ScanError,
    },

    #[error("cannot serialize token: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Scan { .. } => 1,
            CliError::Io { .. } | CliError::Json(_) => 2,
        }
    }
}

/// Where the tokens of one input come from.
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn name(&self) -> String {
        match self {
            Input::Stdin => STDIN_NAME.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<Vec<u8>, CliError> {
        let io_error = |source| CliError::Io {
            path: self.name(),
            source,
        };
        match self {
            Input::Stdin => {
                let mut bytes = Vec::new();
                io::stdin().lock().read_to_end(&mut bytes).map_err(io_error)?;
                Ok(bytes)
            }
            Input::File(path) => std::fs::read(path).map_err(io_error),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let use_color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };

    if let Err(err) = run(&cli, use_color) {
        print_error(&err, use_color);
        process::exit(err.exit_code());
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .try_init();
}

fn inputs(files: &[PathBuf]) -> Vec<Input> {
    if files.is_empty() {
        return vec![Input::Stdin];
    }
    files
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                Input::Stdin
            } else {
                Input::File(path.clone())
            }
        })
        .collect()
}

fn run(cli: &Cli, use_color: bool) -> Result<(), CliError> {
    let mut out = BufWriter::new(io::stdout().lock());
    let spans = !cli.no_spans;
    let span_color = use_color && cli.format == Format::Text && io::stdout().is_terminal();

    let stdout_error = |source| CliError::Io {
        path: STDOUT_NAME.to_string(),
        source,
    };

    for input in inputs(&cli.files) {
        let name = input.name();
        let source = input.read()?;
        info!(file = %name, bytes = source.len(), "scanning");

        let mut scanner = Scanner::new(&source);
        let mut count = 0usize;
        loop {
            let token = scanner.next_token().map_err(|source| CliError::Scan {
                path: name.clone(),
                source,
            })?;
            let line = match cli.format {
                Format::Text => render_text(&token, spans, span_color),
                Format::Json => render_json(&token, spans)?,
            };
            writeln!(out, "{}", line).map_err(stdout_error)?;
            count += 1;
            if token.is_eof() {
                break;
            }
        }
        debug!(file = %name, tokens = count, "done");
    }

    out.flush().map_err(stdout_error)
}

/// `start..end NAME [payload]`, or just `NAME [payload]` without spans.
fn render_text(token: &Token, spans: bool, color: bool) -> String {
    match (spans, color) {
        (false, _) => token.to_string(),
        (true, false) => format!("{:?} {}", token.range, token),
        (true, true) => format!("{}{:?}{} {}", GRAY, token.range, RESET, token),
    }
}

fn render_json(token: &Token, spans: bool) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(token)?;
    if !spans {
        if let Some(object) = value.as_object_mut() {
            object.remove("range");
        }
    }
    serde_json::to_string(&value)
}

fn print_error(err: &CliError, use_color: bool) {
    let (path, message) = match err {
        CliError::Io { path, source } => (Some(path.as_str()), source.to_string()),
        CliError::Scan { path, source } => (Some(path.as_str()), source.to_string()),
        CliError::Json(source) => (None, source.to_string()),
    };
    match (path, use_color) {
        (Some(path), true) => eprintln!("{}{}{}: {}{}error{}: {}", CYAN, path, RESET, BOLD, RED, RESET, message),
        (Some(path), false) => eprintln!("{}: error: {}", path, message),
        (None, true) => eprintln!("{}{}error{}: {}", BOLD, RED, RESET, message),
        (None, false) => eprintln!("error: {}", message),
    }
}

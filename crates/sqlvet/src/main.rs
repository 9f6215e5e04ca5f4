//! sqlvet CLI
//!
//! Command-line tool for checking SQL syntax.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use sqlvet::{render, Input, OutputFormat};
use sqlvet_core::{Validator, ValidatorConfig};

/// Check the syntax of a SQL statement.
#[derive(Parser)]
#[command(name = "sqlvet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to check (stdin if omitted or `-`).
    file: Option<PathBuf>,

    /// SQL text to check instead of a file.
    #[arg(short, long, conflicts_with = "file")]
    sql: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Reject inputs longer than this many bytes.
    #[arg(long, env = "SQLVET_MAX_BYTES")]
    max_bytes: Option<usize>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the input was valid.
fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = Input::from_args(cli.sql, cli.file);
    debug!(%input, "reading input");
    let source = input.read()?;

    let validator = Validator::new(ValidatorConfig {
        max_input_bytes: cli.max_bytes,
    });
    debug!(config = ?validator.config(), "validating");
    let result = validator.validate(&source);

    let output = render(&result, &source, cli.format)?;
    io::stdout().lock().write_all(output.as_bytes())?;

    Ok(result.is_valid())
}

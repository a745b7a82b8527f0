//! lineup - command line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use lineup_align::{SubstitutionReport, substitute_file};

/// Search-and-replace that keeps parameters aligned on the parenthesis.
#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Literal search-and-replace that keeps multi-line argument lists aligned")]
#[command(after_help = "WARNING: <FILE> is modified in place. Keep a copy, or run it \
                        on a version-controlled tree and review the diff.")]
#[command(version)]
struct Args {
    /// Text to search for (literal, case sensitive)
    search_text: String,

    /// Replacement text
    replacement: String,

    /// File to modify in place
    file: PathBuf,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<SubstitutionReport> {
    substitute_file(&args.file, &args.search_text, &args.replacement)
        .with_context(|| format!("failed to substitute in {}", args.file.display()))
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                // Usage and parse errors exit with code 1.
                _ => ExitCode::FAILURE,
            };
        }
    };

    setup_logging(&args.log_level);

    match run(&args) {
        Ok(report) => {
            info!(
                "Replaced {} occurrence(s), realigned {} line(s) in {}",
                report.replacements,
                report.lines_realigned,
                args.file.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

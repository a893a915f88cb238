use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use arith_suite::config::{DEFAULT_LOG_FILTER, EXIT_OUTPUT_ERROR, EXIT_USAGE};
use arith_suite::report::format_report;
use arith_suite::{default_suite, load_suite, run_suite, Case, TextRunner};

/// Runs the addition and subtraction assertions, or the cases in a suite file
#[derive(Parser, Debug, Clone)]
#[clap(version)]
struct Cli {
    /// JSON suite file to run instead of the built-in cases
    suite: Option<PathBuf>,
    /// Print a JSON report instead of text
    #[clap(long)]
    json: bool,
}

fn main() -> ExitCode {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let args = Cli::parse();
    log::debug!("parsed arguments: {args:#?}");

    let cases = match load_cases(&args) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match report(&args, &cases) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(EXIT_OUTPUT_ERROR)
        }
    }
}

fn load_cases(args: &Cli) -> Result<Vec<Case>> {
    match &args.suite {
        Some(path) => load_suite(path),
        None => Ok(default_suite()),
    }
}

fn report(args: &Cli, cases: &[Case]) -> Result<u8> {
    let stdout = std::io::stdout();
    if args.json {
        let report = run_suite(cases);
        let rendered = serde_json::to_string_pretty(&format_report(&report))
            .context("Failed to serialize report")?;
        let mut out = stdout.lock();
        writeln!(out, "{}", rendered).context("Failed to write report")?;
        return Ok(report.exit_code());
    }

    let mut runner = TextRunner::new(stdout.lock());
    let report = runner.run(cases)?;
    Ok(report.exit_code())
}

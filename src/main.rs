//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_audit` library that handles:
//! - Command-line argument parsing and validation
//! - Logger initialization
//! - Rendering reports to stdout and the optional JSON-lines file
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use page_audit::app::{
    render_failure, render_text, write_json_lines, write_json_lines_to, IgnoreBrokenPipe,
};
use page_audit::initialization::init_logger_with;
use page_audit::{run_audits, BatchReport, Config, OutputFormat};

/// Exit code for a configuration that fails validation.
const EXIT_INVALID_CONFIG: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("page_audit: invalid configuration: {e}");
        process::exit(EXIT_INVALID_CONFIG);
    }

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_audits(&config).await {
        Ok(batch) => {
            print_batch(&batch, config.output_format)?;

            if let Some(path) = config.output.as_deref() {
                let written = write_json_lines(path, &batch.outcomes)?;
                log::info!(
                    "Wrote {} result{} to {}",
                    written,
                    if written == 1 { "" } else { "s" },
                    path.display()
                );
            }

            process::exit(batch.exit_code());
        }
        Err(e) => {
            eprintln!("page_audit error: {:#}", e);
            process::exit(1);
        }
    }
}

fn print_batch(batch: &BatchReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            write_json_lines_to(IgnoreBrokenPipe::stdout(), &batch.outcomes)?;
        }
        OutputFormat::Text => {
            let mut out = IgnoreBrokenPipe::stdout();
            for (i, outcome) in batch.outcomes.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                match &outcome.result {
                    Ok(report) => write!(out, "{}", render_text(report))?,
                    Err(e) => writeln!(out, "{}", render_failure(&outcome.url, e))?,
                }
            }
            out.flush()?;
        }
    }
    Ok(())
}

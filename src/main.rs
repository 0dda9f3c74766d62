//! baseconv - print a signed integer in any base from 2 to 36.
//!
//! Writes `[-][prefix]digits` to stdout with no trailing newline unless asked.
//! Diagnostics go to stderr through `tracing`, filtered by `RUST_LOG`.

mod cli;
mod config;
mod error;

use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use clap::Parser;
use std::io::Write;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout carries the converted number
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    run(&args).map_err(|e| {
        error!(code = e.error_code(), error = %e, "baseconv failed");
        anyhow::Error::from(e)
    })
}

fn run(args: &Args) -> Result<(), AppError> {
    // Load configuration
    let config = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "Loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };

    config::validation::validate(&config).map_err(AppError::Validation)?;

    let request = args.resolve(&config)?;
    debug!(
        value = request.value,
        base = %request.converter.radix(),
        prefix = %request.converter.prefix(),
        zero_policy = %request.converter.zero_policy(),
        "Converting"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    request.converter.write_to(&mut out, request.value)?;
    if request.trailing_newline {
        out.write_all(b"\n")?;
    }
    out.flush()?;

    Ok(())
}

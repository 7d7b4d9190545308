//! simparams — entry point.
//!
//! Loads one simulation parameter file, echoes every recognised field to
//! stdout, validates the values and writes the `login.txt` audit log.
//!
//! # Usage
//!
//! ```text
//! simparams [OPTIONS] <PARAM_FILE>
//!
//! Options:
//!   --log-file <PATH>   Audit log destination [default: login.txt]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable             | Default     | Description                 |
//! |----------------------|-------------|-----------------------------|
//! | `SIMPARAMS_LOG_FILE` | `login.txt` | Audit log destination       |
//! | `RUST_LOG`           | `info`      | `tracing` filter (stderr)   |
//!
//! # Exit status
//!
//! `0` when the file loads, validates and the log is written; `1` for a
//! wrong number of files, an unreadable file, a malformed value, a violated
//! constraint, or a log write failure.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use simparams::application::{LoadError, ParameterLoader};
use simparams::infrastructure::storage::DEFAULT_LOG_FILE;
use simparams::infrastructure::{FileParameterSource, LogFileSink, StdoutConsole};

const USAGE: &str = "usage: simparams [--log-file <PATH>] <PARAM_FILE>";

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Loads and validates a wave simulation parameter file.
#[derive(Debug, Parser)]
#[command(
    name = "simparams",
    about = "Loads, validates and logs a wave simulation parameter file",
    version
)]
struct Cli {
    /// The parameter file: whitespace-separated `<name> <value>` pairs.
    ///
    /// Exactly one file must be given.
    #[arg(value_name = "PARAM_FILE")]
    inputs: Vec<PathBuf>,

    /// Where to write the audit log of the loaded parameters.
    #[arg(long, default_value = DEFAULT_LOG_FILE, env = "SIMPARAMS_LOG_FILE")]
    log_file: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout carries only the load trace.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut loader = ParameterLoader::new(
        Arc::new(FileParameterSource::new()),
        Arc::new(StdoutConsole::new()),
        Arc::new(LogFileSink::new(&cli.log_file)),
    );

    let params = loader.load(&cli.inputs).map_err(|e| {
        let context = match e {
            LoadError::Usage { .. } => USAGE,
            _ => "failed to load simulation parameters",
        };
        anyhow::Error::new(e).context(context)
    })?;

    info!(
        model = params.model_name(),
        grid = %format!("{}x{}", params.n_x(), params.n_y()),
        steps = (params.total_time() / params.time_step()).floor(),
        log = %cli.log_file.display(),
        "parameters ready for the simulation"
    );
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Console adapters for the load trace.
//!
//! The trace goes to stdout; `tracing` output goes to stderr, so the two
//! never interleave in a redirected stdout.

pub mod mock;

use std::io::Write;

use crate::application::load_parameters::ConsoleSink;

/// Writes trace lines to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleSink for StdoutConsole {
    fn line(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout (e.g. `| head`) must not abort the load.
        if let Err(e) = writeln!(out, "{text}") {
            tracing::debug!("console write failed: {e}");
        }
    }
}

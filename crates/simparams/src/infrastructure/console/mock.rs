//! Recording console for tests.
//!
//! Every line passed to [`ConsoleSink::line`] is pushed into a
//! `Mutex<Vec<String>>` so assertions can inspect exactly what was printed
//! and in what order.
//!
//! ```ignore
//! let console = Arc::new(RecordingConsole::new());
//! let mut loader = ParameterLoader::new(source, console.clone(), sink);
//! loader.load(&inputs)?;
//! assert_eq!(console.lines()[0], "Start reading variables to memory");
//! ```

use std::sync::Mutex;

use crate::application::load_parameters::ConsoleSink;

/// A console that records lines instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Returns the recorded lines joined with `\n`, each line terminated.
    pub fn transcript(&self) -> String {
        self.lines()
            .into_iter()
            .map(|mut line| {
                line.push('\n');
                line
            })
            .collect()
    }
}

impl ConsoleSink for RecordingConsole {
    fn line(&self, text: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(text.to_owned());
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

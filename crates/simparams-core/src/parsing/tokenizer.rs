//! Whitespace tokenizer for parameter files.
//!
//! [`Tokenizer`] wraps any [`BufRead`] and yields maximal runs of
//! non-whitespace characters, one line at a time.  It makes a single forward
//! pass and cannot be restarted; collect it into a `Vec` when random access is
//! needed (the decoder looks one token ahead).
//!
//! There is no comment, quoting or escape syntax: `#` and `"` are ordinary
//! token characters.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Lazy iterator over the whitespace-delimited tokens of a reader.
///
/// Yields `Err` if the underlying reader fails (including on invalid UTF-8)
/// and then stops.
#[derive(Debug)]
pub struct Tokenizer<R> {
    reader: R,
    line: String,
    pending: VecDeque<String>,
    finished: bool,
}

impl<R: BufRead> Tokenizer<R> {
    /// Creates a tokenizer reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: VecDeque::new(),
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if self.finished {
                return None;
            }

            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => {
                    self.finished = true;
                    return None;
                }
                Ok(_) => {
                    self.pending
                        .extend(self.line.split_whitespace().map(str::to_owned));
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

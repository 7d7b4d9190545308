//! In-memory audit log sink for tests.
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` to make every write return
//! [`ArtifactError::Create`], so callers' error paths can be exercised
//! without a read-only file system.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::application::load_parameters::{ArtifactError, LogArtifactSink};

/// Records every log written to it instead of touching the disk.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    /// Each successful `write_log` call, oldest first.
    pub writes: Mutex<Vec<String>>,
    /// When `true`, every write fails.
    pub should_fail: bool,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose writes always fail.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Contents of the most recent write, if any.
    pub fn last_write(&self) -> Option<String> {
        self.writes.lock().ok().and_then(|w| w.last().cloned())
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| w.len()).unwrap_or(0)
    }
}

impl LogArtifactSink for MemoryLogSink {
    fn location(&self) -> PathBuf {
        PathBuf::from("memory://login.txt")
    }

    fn write_log(&self, contents: &str) -> Result<(), ArtifactError> {
        if self.should_fail {
            return Err(ArtifactError::Create(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock failure",
            )));
        }
        self.writes
            .lock()
            .map_err(|_| {
                ArtifactError::Write(io::Error::new(io::ErrorKind::Other, "poisoned lock"))
            })?
            .push(contents.to_owned());
        Ok(())
    }
}

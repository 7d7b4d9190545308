//! Audit log writer.
//!
//! Each successful load replaces the log file with the rendered parameters.
//! There is no append mode and no rotation: the file always describes the
//! most recent successful run.
//!
//! Example contents:
//!
//! ```text
//! model_name =	M1
//! force_type =	point
//! alpha =	0
//! ...
//! density =	2500
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::application::load_parameters::{ArtifactError, LogArtifactSink};

/// File name of the audit log, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "login.txt";

/// Writes the audit log to a file on disk.
#[derive(Debug, Clone)]
pub struct LogFileSink {
    path: PathBuf,
}

impl LogFileSink {
    /// Creates a sink that writes to `path`.  Nothing is touched until
    /// [`LogArtifactSink::write_log`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LogFileSink {
    /// A sink writing [`DEFAULT_LOG_FILE`] in the working directory.
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl LogArtifactSink for LogFileSink {
    fn location(&self) -> PathBuf {
        self.path.clone()
    }

    fn write_log(&self, contents: &str) -> Result<(), ArtifactError> {
        let file = File::create(&self.path).map_err(ArtifactError::Create)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(contents.as_bytes())
            .map_err(ArtifactError::Write)?;
        writer.flush().map_err(ArtifactError::Write)?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! ParameterLoader: the read → decode → validate → persist use case.
//!
//! The loader is a small state machine.  Each successful step moves it one
//! stage forward; any error moves it to [`LoadStage::Failed`] and is
//! returned to the caller without retrying.
//!
//! ```text
//! Init ──► TokenizingDone ──► DecodingDone ──► Validated ──► Persisted ──► Complete
//!   │            │                 │               │
//!   └────────────┴─────────────────┴───────────────┴──────────► Failed
//! ```
//!
//! | Transition                     | Error on failure          |
//! |--------------------------------|---------------------------|
//! | `Init → TokenizingDone`        | `Usage`, `FileOpen`       |
//! | `TokenizingDone → DecodingDone`| `Parse`                   |
//! | `DecodingDone → Validated`     | `InvalidParameter`        |
//! | `Validated → Persisted`        | `Io`                      |
//!
//! The audit log is only written after validation succeeds, so a failed run
//! never leaves invalid values in it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use simparams_core::{
    render_log, validate, DecodeError, FieldDecoder, ParameterStore, SimulationParameters,
    ValidationError,
};
use thiserror::Error;
use tracing::{debug, error, info};

/// Console milestone printed before decoding starts.
pub const MSG_START_READING: &str = "Start reading variables to memory";
/// Console milestone printed after the last field is decoded.
pub const MSG_FINISH_READING: &str = "Finish reading parameters.";
/// Console milestone printed after the audit log is written.
pub const MSG_LOG_WRITTEN: &str = "login file has been written.";

// ── Collaborator traits ───────────────────────────────────────────────────────

/// Error type for parameter sources.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file does not exist or could not be opened.
    #[error("could not open file: {0}")]
    Open(#[source] std::io::Error),
    /// The file was opened but reading it failed (e.g. invalid UTF-8).
    #[error("could not read file: {0}")]
    Read(#[source] std::io::Error),
}

/// Supplies the whitespace-delimited tokens of a parameter file.
#[cfg_attr(test, mockall::automock)]
pub trait ParameterSource: Send + Sync {
    /// Opens `path` and returns all of its tokens in file order.
    ///
    /// The file handle must be released before this returns, on success and
    /// on failure.
    fn read_tokens(&self, path: &Path) -> Result<Vec<String>, SourceError>;
}

/// Line-oriented console for the human-readable load trace.
pub trait ConsoleSink: Send + Sync {
    /// Prints `text` followed by a newline.
    fn line(&self, text: &str);
}

/// Error type for audit log sinks.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("could not create file: {0}")]
    Create(#[source] std::io::Error),
    #[error("could not write file: {0}")]
    Write(#[source] std::io::Error),
}

/// Destination of the rendered audit log.
#[cfg_attr(test, mockall::automock)]
pub trait LogArtifactSink: Send + Sync {
    /// Where the log ends up, for diagnostics.
    fn location(&self) -> PathBuf;

    /// Replaces the artifact's contents with `contents`.
    fn write_log(&self, contents: &str) -> Result<(), ArtifactError>;
}

// ── Errors and stages ─────────────────────────────────────────────────────────

/// Every way a load can fail.  All of them are fatal to the run.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Zero or more than one parameter file was given.
    #[error("expected exactly one parameter file, got {given}")]
    Usage { given: usize },

    /// The parameter file is missing or unreadable.
    #[error("cannot open parameter file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: SourceError,
    },

    /// A value in the parameter file could not be decoded.
    #[error("malformed parameter file: {0}")]
    Parse(#[from] DecodeError),

    /// Decoded values break a domain constraint.
    #[error(transparent)]
    InvalidParameter(#[from] ValidationError),

    /// The audit log could not be written.
    #[error("cannot write log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: ArtifactError,
    },
}

/// Progress of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    Init,
    TokenizingDone,
    DecodingDone,
    Validated,
    Persisted,
    Complete,
    Failed,
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoadStage::Init => "init",
            LoadStage::TokenizingDone => "tokenizing-done",
            LoadStage::DecodingDone => "decoding-done",
            LoadStage::Validated => "validated",
            LoadStage::Persisted => "persisted",
            LoadStage::Complete => "complete",
            LoadStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Checks that exactly one parameter file was supplied and returns it.
///
/// # Errors
///
/// Returns [`LoadError::Usage`] for zero or several paths.
pub fn check_file_count(inputs: &[PathBuf]) -> Result<&Path, LoadError> {
    match inputs {
        [single] => Ok(single.as_path()),
        other => Err(LoadError::Usage { given: other.len() }),
    }
}

// ── Use case ──────────────────────────────────────────────────────────────────

/// The load use case.
///
/// Owns shared handles to its three collaborators so callers (and tests) can
/// keep their own handle for inspection.
pub struct ParameterLoader {
    source: Arc<dyn ParameterSource>,
    console: Arc<dyn ConsoleSink>,
    log_sink: Arc<dyn LogArtifactSink>,
    stage: LoadStage,
}

impl ParameterLoader {
    /// Creates a loader in the [`LoadStage::Init`] stage.
    pub fn new(
        source: Arc<dyn ParameterSource>,
        console: Arc<dyn ConsoleSink>,
        log_sink: Arc<dyn LogArtifactSink>,
    ) -> Self {
        Self {
            source,
            console,
            log_sink,
            stage: LoadStage::Init,
        }
    }

    /// The stage reached by the most recent [`load`](Self::load).
    pub fn stage(&self) -> LoadStage {
        self.stage
    }

    /// Runs the whole pipeline on the single path in `inputs`.
    ///
    /// On success the loader ends in [`LoadStage::Complete`] and the
    /// validated parameters are returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns the first [`LoadError`] encountered; the loader is then in
    /// [`LoadStage::Failed`].
    pub fn load(&mut self, inputs: &[PathBuf]) -> Result<SimulationParameters, LoadError> {
        self.stage = LoadStage::Init;
        let result = self.run_stages(inputs);
        if let Err(e) = &result {
            error!(stage = %self.stage, "parameter load failed: {e}");
            self.stage = LoadStage::Failed;
        }
        result
    }

    fn run_stages(&mut self, inputs: &[PathBuf]) -> Result<SimulationParameters, LoadError> {
        let path = check_file_count(inputs)?;
        info!(path = %path.display(), "loading simulation parameters");

        let tokens = self
            .source
            .read_tokens(path)
            .map_err(|source| LoadError::FileOpen {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(tokens = tokens.len(), "parameter file tokenized");
        self.advance(LoadStage::TokenizingDone);

        let store = self.decode(&tokens)?;
        self.advance(LoadStage::DecodingDone);

        let params = validate(&store)?;
        self.advance(LoadStage::Validated);

        self.persist(&params)?;
        self.advance(LoadStage::Persisted);

        self.advance(LoadStage::Complete);
        info!(model = params.model_name(), "simulation parameters loaded");
        Ok(params)
    }

    fn advance(&mut self, next: LoadStage) {
        debug!(from = %self.stage, to = %next, "load stage transition");
        self.stage = next;
    }

    /// Decodes every recognised field into a fresh store, echoing each one.
    fn decode(&self, tokens: &[String]) -> Result<ParameterStore, DecodeError> {
        self.milestone(MSG_START_READING);

        let mut store = ParameterStore::new();
        for field in FieldDecoder::new(tokens) {
            let field = field?;
            let name = field.name();
            let value = field.value().to_string();
            store.apply(field)?;

            debug!(field = name, value = %value, "decoded field");
            self.console.line(&format!("{name}=\t"));
            self.console.line(&value);
            self.console.line("");
        }

        self.milestone(MSG_FINISH_READING);
        Ok(store)
    }

    fn persist(&self, params: &SimulationParameters) -> Result<(), LoadError> {
        self.log_sink
            .write_log(&render_log(params))
            .map_err(|source| LoadError::Io {
                path: self.log_sink.location(),
                source,
            })?;
        debug!(path = %self.log_sink.location().display(), "audit log written");
        self.milestone(MSG_LOG_WRITTEN);
        Ok(())
    }

    fn milestone(&self, text: &str) {
        self.console.line(text);
        self.console.line("");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

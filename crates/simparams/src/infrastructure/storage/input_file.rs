//! Parameter file reader.
//!
//! Opens the file named on the command line and collects its tokens with
//! [`simparams_core::Tokenizer`].  The file handle lives only inside
//! [`FileParameterSource::read_tokens`] and is dropped on every return path.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use simparams_core::Tokenizer;
use tracing::debug;

use crate::application::load_parameters::{ParameterSource, SourceError};

/// Reads parameter files from the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileParameterSource;

impl FileParameterSource {
    pub fn new() -> Self {
        Self
    }
}

impl ParameterSource for FileParameterSource {
    fn read_tokens(&self, path: &Path) -> Result<Vec<String>, SourceError> {
        let file = File::open(path).map_err(SourceError::Open)?;
        debug!(path = %path.display(), "parameter file opened");

        Tokenizer::new(BufReader::new(file))
            .collect::<io::Result<Vec<_>>>()
            .map_err(SourceError::Read)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Application layer: the load use case.
//!
//! The loader depends only on the traits declared next to it, never on the
//! concrete file or console adapters, so tests can drive it entirely in
//! memory.

pub mod load_parameters;

pub use load_parameters::{
    check_file_count, ArtifactError, ConsoleSink, LoadError, LoadStage, LogArtifactSink,
    ParameterLoader, ParameterSource, SourceError,
};

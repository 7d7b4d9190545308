//! Infrastructure layer: file system and console adapters.
//!
//! Implements the collaborator traits declared in
//! [`crate::application::load_parameters`].
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `simparams_core`, but MUST NOT be imported by the `application` layer
//! outside of tests.

pub mod console;
pub mod storage;

pub use console::StdoutConsole;
pub use storage::{FileParameterSource, LogFileSink};

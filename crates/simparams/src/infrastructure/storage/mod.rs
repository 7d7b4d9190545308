//! Storage infrastructure: reading the parameter file and writing the
//! audit log.
//!
//! - `input_file` opens the parameter file and runs the tokenizer over it.
//! - `log_file` creates (or truncates) the audit log and writes it in one go.
//! - `mock` holds an in-memory log sink for tests.

pub mod input_file;
pub mod log_file;
pub mod mock;

pub use input_file::FileParameterSource;
pub use log_file::{LogFileSink, DEFAULT_LOG_FILE};

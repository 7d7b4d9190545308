//! simparams library crate.
//!
//! Loads the parameter file of the wave simulation, validates it, echoes it
//! to the console and records it in the `login.txt` audit log.
//!
//! # Architecture
//!
//! ```text
//! main.rs (clap CLI, tracing setup)
//!   └── application/
//!         └── load_parameters   ParameterLoader state machine + the
//!                               ParameterSource / ConsoleSink /
//!                               LogArtifactSink traits it depends on
//!   └── infrastructure/
//!         ├── console/          stdout console, recording console
//!         └── storage/          parameter file reader, log file writer
//! ```
//!
//! The parsing and validation rules live in `simparams-core`; this crate only
//! sequences them and connects them to the outside world.

pub mod application;
pub mod infrastructure;

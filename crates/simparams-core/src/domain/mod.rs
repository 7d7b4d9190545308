//! Domain types for simulation parameter loading.
//!
//! Everything here is plain data and pure functions: no file handles, no
//! console, no global state.  The outer crate decides where text comes from
//! and where the audit log goes.

/// The fixed table of recognised fields and their typed slots.
pub mod fields;

/// The unvalidated store and the validated, read-only record.
pub mod parameters;

/// Range and presence checks that turn a store into a record.
pub mod validation;

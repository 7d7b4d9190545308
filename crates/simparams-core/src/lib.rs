//! # simparams-core
//!
//! Pure building blocks for loading the parameter file of the wave
//! simulation: the table of recognised fields, the typed parameter store,
//! the whitespace tokenizer, the field decoder, the validator, and the
//! renderer for the `login.txt` audit log.
//!
//! This crate never opens files or prints anything.  The `simparams` crate
//! wires these pieces to the file system and the console.
//!
//! # Pipeline overview
//!
//! ```text
//! text ──► Tokenizer ──► Vec<String> ──► FieldDecoder ──► ParameterStore
//!                                                             │
//!                                        validate() ◄─────────┘
//!                                             │
//!                                  SimulationParameters ──► render_log()
//! ```
//!
//! - **`domain`** – the field table, the store of optional slots, the
//!   validated record and the validation rules.
//! - **`parsing`** – turning raw text into tokens and tokens into typed
//!   field values.

pub mod domain;
pub mod parsing;

// Re-export the most-used types at the crate root so callers can write
// `simparams_core::ParameterStore` instead of the full module path.
pub use domain::fields::{
    lookup_field, FieldKind, FieldSlot, FieldSpec, FieldValue, SlotAccess, FIELDS,
};
pub use domain::parameters::{render_log, ParameterStore, SimulationParameters};
pub use domain::validation::{validate, ValidationError, Violation, ViolationKind};
pub use parsing::decoder::{decode_field, DecodeError, DecodedField, FieldDecoder};
pub use parsing::tokenizer::Tokenizer;

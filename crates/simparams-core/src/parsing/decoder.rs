//! Field decoder: turns `<name> <value>` token pairs into typed values.
//!
//! The decoder walks the token list from the front.  A token that names a
//! recognised field consumes itself and the next token as its value; any
//! other token is skipped on its own.  Unknown names are therefore ignored,
//! and a value token is never mistaken for a field name.
//!
//! Numeric values must parse completely: `2.5e-3` is a float, `12` an
//! integer, but `1.5x`, `5.0` (for an integer field) or `nan` are rejected
//! with a [`DecodeError`].

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;
use tracing::trace;

use crate::domain::fields::{lookup_field, FieldSlot, FieldSpec, FieldValue, SlotAccess};

/// Errors raised while decoding field values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// A recognised field name was the last token in the file.
    #[error("field `{field}` has no value")]
    MissingValue { field: &'static str },

    /// A float field's value is not a number.
    #[error("field `{field}`: `{raw}` is not a valid float: {source}")]
    InvalidFloat {
        field: &'static str,
        raw: String,
        #[source]
        source: ParseFloatError,
    },

    /// A float field's value parsed to infinity or NaN.
    #[error("field `{field}`: `{raw}` is not a finite number")]
    NonFiniteFloat { field: &'static str, raw: String },

    /// An integer field's value is not an integer.
    #[error("field `{field}`: `{raw}` is not a valid integer: {source}")]
    InvalidInteger {
        field: &'static str,
        raw: String,
        #[source]
        source: ParseIntError,
    },

    /// The field appears more than once in the file.
    #[error("field `{field}` is given more than once")]
    DuplicateField { field: &'static str },
}

/// A parsed value bound to the slot it belongs in.
///
/// Only [`decode_field`] builds these, so a value always matches its slot's
/// type.
#[derive(Clone)]
pub(crate) enum SlotValue {
    Text(SlotAccess<String>, String),
    Float(SlotAccess<f64>, f64),
    Int(SlotAccess<i64>, i64),
}

/// A field value decoded from the token stream.
#[derive(Clone)]
pub struct DecodedField {
    spec: &'static FieldSpec,
    value: SlotValue,
}

impl DecodedField {
    /// The field's name as written in the parameter file.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn spec(&self) -> &'static FieldSpec {
        self.spec
    }

    /// The decoded value.
    pub fn value(&self) -> FieldValue {
        match &self.value {
            SlotValue::Text(_, v) => FieldValue::Text(v.clone()),
            SlotValue::Float(_, v) => FieldValue::Float(*v),
            SlotValue::Int(_, v) => FieldValue::Int(*v),
        }
    }

    pub(crate) fn into_slot_value(self) -> SlotValue {
        self.value
    }
}

impl fmt::Debug for DecodedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedField")
            .field("name", &self.spec.name)
            .field("value", &self.value())
            .finish()
    }
}

/// Decodes the field whose name is at `tokens[index]`.
///
/// Returns `Ok(None)` when `tokens[index]` is not a recognised field name, or
/// when `index` is out of range.
///
/// # Errors
///
/// Returns [`DecodeError`] when the name is recognised but the value token is
/// absent or does not parse as the field's type.
pub fn decode_field(tokens: &[String], index: usize) -> Result<Option<DecodedField>, DecodeError> {
    let Some(spec) = tokens.get(index).and_then(|name| lookup_field(name)) else {
        return Ok(None);
    };
    let raw = tokens
        .get(index + 1)
        .ok_or(DecodeError::MissingValue { field: spec.name })?;

    let value = parse_value(spec, raw)?;
    Ok(Some(DecodedField { spec, value }))
}

fn parse_value(spec: &'static FieldSpec, raw: &str) -> Result<SlotValue, DecodeError> {
    let field = spec.name;
    match spec.slot {
        FieldSlot::Text(access) => Ok(SlotValue::Text(access, raw.to_owned())),
        FieldSlot::Float(access) => {
            let v: f64 = raw.parse().map_err(|source| DecodeError::InvalidFloat {
                field,
                raw: raw.to_owned(),
                source,
            })?;
            if !v.is_finite() {
                return Err(DecodeError::NonFiniteFloat {
                    field,
                    raw: raw.to_owned(),
                });
            }
            Ok(SlotValue::Float(access, v))
        }
        FieldSlot::Int(access) => raw
            .parse()
            .map(|v| SlotValue::Int(access, v))
            .map_err(|source| DecodeError::InvalidInteger {
                field,
                raw: raw.to_owned(),
                source,
            }),
    }
}

/// Iterator over every recognised field in a token list, in file order.
///
/// Stops after the first error.
#[derive(Debug)]
pub struct FieldDecoder<'t> {
    tokens: &'t [String],
    cursor: usize,
}

impl<'t> FieldDecoder<'t> {
    pub fn new(tokens: &'t [String]) -> Self {
        Self { tokens, cursor: 0 }
    }
}

impl Iterator for FieldDecoder<'_> {
    type Item = Result<DecodedField, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.tokens.len() {
            let index = self.cursor;
            match decode_field(self.tokens, index) {
                Ok(Some(field)) => {
                    self.cursor += 2;
                    return Some(Ok(field));
                }
                Ok(None) => {
                    trace!(token = %self.tokens[index], index, "skipping unrecognised token");
                    self.cursor += 1;
                }
                Err(e) => {
                    self.cursor = self.tokens.len();
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

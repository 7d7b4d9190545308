//! The table of recognised parameter fields.
//!
//! Each [`FieldSpec`] pairs a field name with a [`FieldSlot`]: an accessor
//! that hands out the matching `Option` slot inside a [`ParameterStore`].
//! The slot variant doubles as the field's type, so the decoder knows how to
//! parse the value token and where to put the result without any per-field
//! branching.
//!
//! [`FIELDS`] is in declaration order, which is also the order the audit log
//! is written in.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::domain::parameters::ParameterStore;

/// The three value types a parameter file can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Float,
    Int,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "string",
            FieldKind::Float => "float",
            FieldKind::Int => "integer",
        };
        f.write_str(name)
    }
}

/// A decoded, typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Float(f64),
    Int(i64),
}

impl FieldValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Float(_) => FieldKind::Float,
            FieldValue::Int(_) => FieldKind::Int,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
        }
    }
}

/// Read and write access to one `Option` slot of a [`ParameterStore`].
pub struct SlotAccess<T> {
    pub get: fn(&ParameterStore) -> &Option<T>,
    pub get_mut: fn(&mut ParameterStore) -> &mut Option<T>,
}

impl<T> Clone for SlotAccess<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SlotAccess<T> {}

/// Typed accessor into the store slot owned by one field.
#[derive(Clone, Copy)]
pub enum FieldSlot {
    Text(SlotAccess<String>),
    Float(SlotAccess<f64>),
    Int(SlotAccess<i64>),
}

impl FieldSlot {
    /// Returns the value kind this slot accepts.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldSlot::Text(_) => FieldKind::Text,
            FieldSlot::Float(_) => FieldKind::Float,
            FieldSlot::Int(_) => FieldKind::Int,
        }
    }
}

impl fmt::Debug for FieldSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldSlot").field(&self.kind()).finish()
    }
}

/// One recognised field: its name as written in the parameter file and the
/// slot its value is stored in.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub slot: FieldSlot,
}

impl FieldSpec {
    /// Returns the value kind of this field.
    pub fn kind(&self) -> FieldKind {
        self.slot.kind()
    }

    /// Returns `true` if `store` holds a value for this field.
    pub fn is_set_in(&self, store: &ParameterStore) -> bool {
        match self.slot {
            FieldSlot::Text(access) => (access.get)(store).is_some(),
            FieldSlot::Float(access) => (access.get)(store).is_some(),
            FieldSlot::Int(access) => (access.get)(store).is_some(),
        }
    }

    /// Reads this field's value out of `store`, if set.
    pub fn value_in(&self, store: &ParameterStore) -> Option<FieldValue> {
        match self.slot {
            FieldSlot::Text(access) => (access.get)(store).clone().map(FieldValue::Text),
            FieldSlot::Float(access) => (access.get)(store).map(FieldValue::Float),
            FieldSlot::Int(access) => (access.get)(store).map(FieldValue::Int),
        }
    }
}

macro_rules! field {
    ($name:literal, $kind:ident, $slot:ident) => {
        FieldSpec {
            name: $name,
            slot: FieldSlot::$kind(SlotAccess {
                get: |s| &s.$slot,
                get_mut: |s| &mut s.$slot,
            }),
        }
    };
}

/// Every recognised field, in declaration order.
pub static FIELDS: [FieldSpec; 13] = [
    field!("model_name", Text, model_name),
    field!("force_type", Text, force_type),
    field!("waveform", Text, waveform),
    field!("alpha", Float, alpha),
    field!("beta", Float, beta),
    field!("time_step", Float, time_step),
    field!("total_time", Float, total_time),
    field!("area_x", Float, area_x),
    field!("area_y", Float, area_y),
    field!("n_x", Int, n_x),
    field!("n_y", Int, n_y),
    field!("moment", Float, moment),
    // The file says `density`; the store calls it `rho`.
    field!("density", Float, rho),
];

/// Looks up a field by its exact name token.
///
/// Matching is case-sensitive: `Alpha` is not `alpha`.
pub fn lookup_field(name: &str) -> Option<&'static FieldSpec> {
    static INDEX: OnceLock<HashMap<&'static str, &'static FieldSpec>> = OnceLock::new();
    INDEX
        .get_or_init(|| FIELDS.iter().map(|spec| (spec.name, spec)).collect())
        .get(name)
        .copied()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

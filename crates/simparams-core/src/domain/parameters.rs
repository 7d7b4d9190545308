//! The parameter store and the validated simulation record.
//!
//! Loading goes through two types:
//!
//! - [`ParameterStore`] – every field is an `Option`, `None` meaning "unset".
//!   The decoder fills it one field at a time, in whatever order the file
//!   lists them.
//! - [`SimulationParameters`] – produced only by
//!   [`crate::domain::validation::validate`].  All fields are present and
//!   within range, and the record cannot be modified afterwards.

use crate::domain::fields::{FieldValue, FIELDS};
use crate::parsing::decoder::{DecodeError, DecodedField, SlotValue};

/// Field-by-field store filled by the decoder.
///
/// `None` is the "unset" sentinel for every field, numeric ones included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterStore {
    pub model_name: Option<String>,
    pub force_type: Option<String>,
    pub waveform: Option<String>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub time_step: Option<f64>,
    pub total_time: Option<f64>,
    pub area_x: Option<f64>,
    pub area_y: Option<f64>,
    pub n_x: Option<i64>,
    pub n_y: Option<i64>,
    pub moment: Option<f64>,
    /// Material density, written as `density` in the file.
    pub rho: Option<f64>,
}

impl ParameterStore {
    /// Creates a store with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a decoded field in its slot.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::DuplicateField`] if the field was already set.
    pub fn apply(&mut self, field: DecodedField) -> Result<(), DecodeError> {
        let name = field.name();
        match field.into_slot_value() {
            SlotValue::Text(access, v) => fill((access.get_mut)(self), v, name),
            SlotValue::Float(access, v) => fill((access.get_mut)(self), v, name),
            SlotValue::Int(access, v) => fill((access.get_mut)(self), v, name),
        }
    }

    /// Names of the fields still unset, in declaration order.
    pub fn unset_fields(&self) -> Vec<&'static str> {
        FIELDS
            .iter()
            .filter(|spec| !spec.is_set_in(self))
            .map(|spec| spec.name)
            .collect()
    }
}

fn fill<T>(target: &mut Option<T>, value: T, field: &'static str) -> Result<(), DecodeError> {
    if target.is_some() {
        return Err(DecodeError::DuplicateField { field });
    }
    *target = Some(value);
    Ok(())
}

/// Validated, read-only simulation parameters.
///
/// Handed to the simulation driver once loading completes.  Fields are only
/// reachable through accessors so the record stays as validated.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    model_name: String,
    force_type: String,
    waveform: String,
    alpha: f64,
    beta: f64,
    time_step: f64,
    total_time: f64,
    area_x: f64,
    area_y: f64,
    n_x: i64,
    n_y: i64,
    moment: f64,
    rho: f64,
}

impl SimulationParameters {
    /// Builds the record from a store whose fields are all set.
    ///
    /// Returns `None` if any field is still unset; range checks are the
    /// validator's job.
    pub(crate) fn from_complete(store: &ParameterStore) -> Option<Self> {
        Some(Self {
            model_name: store.model_name.clone()?,
            force_type: store.force_type.clone()?,
            waveform: store.waveform.clone()?,
            alpha: store.alpha?,
            beta: store.beta?,
            time_step: store.time_step?,
            total_time: store.total_time?,
            area_x: store.area_x?,
            area_y: store.area_y?,
            n_x: store.n_x?,
            n_y: store.n_y?,
            moment: store.moment?,
            rho: store.rho?,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn force_type(&self) -> &str {
        &self.force_type
    }

    pub fn waveform(&self) -> &str {
        &self.waveform
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Integration time step, strictly positive.
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Total simulated time, strictly positive and at least one time step.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn area_x(&self) -> f64 {
        self.area_x
    }

    pub fn area_y(&self) -> f64 {
        self.area_y
    }

    /// Grid points along x, strictly positive.
    pub fn n_x(&self) -> i64 {
        self.n_x
    }

    /// Grid points along y, strictly positive.
    pub fn n_y(&self) -> i64 {
        self.n_y
    }

    pub fn moment(&self) -> f64 {
        self.moment
    }

    /// Material density (`density` in the parameter file).
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns `(file name, value)` for every field in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, FieldValue)> {
        let store = self.to_store();
        FIELDS
            .iter()
            .filter_map(|spec| spec.value_in(&store).map(|value| (spec.name, value)))
            .collect()
    }

    fn to_store(&self) -> ParameterStore {
        ParameterStore {
            model_name: Some(self.model_name.clone()),
            force_type: Some(self.force_type.clone()),
            waveform: Some(self.waveform.clone()),
            alpha: Some(self.alpha),
            beta: Some(self.beta),
            time_step: Some(self.time_step),
            total_time: Some(self.total_time),
            area_x: Some(self.area_x),
            area_y: Some(self.area_y),
            n_x: Some(self.n_x),
            n_y: Some(self.n_y),
            moment: Some(self.moment),
            rho: Some(self.rho),
        }
    }
}

/// Renders the audit log: one `"<name> =\t<value>"` line per field, in
/// declaration order, each terminated by `\n`.
pub fn render_log(params: &SimulationParameters) -> String {
    params
        .entries()
        .into_iter()
        .map(|(name, value)| format!("{name} =\t{value}\n"))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Presence and range checks for a decoded [`ParameterStore`].
//!
//! Validation runs once, after decoding, and collects every violation in a
//! single pass so one run reports everything wrong with the file.
//!
//! | Field        | Rule                         |
//! |--------------|------------------------------|
//! | all          | must be present              |
//! | `time_step`  | `> 0`                        |
//! | `total_time` | `> 0` and `>= time_step`     |
//! | `area_x`     | `> 0`                        |
//! | `area_y`     | `> 0`                        |
//! | `n_x`, `n_y` | `> 0`                        |
//! | `density`    | `> 0`                        |

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::domain::fields::FieldValue;
use crate::domain::parameters::{ParameterStore, SimulationParameters};

/// What is wrong with a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// The field never appeared in the parameter file.
    Missing,
    /// The field must be strictly positive.
    NotPositive { value: FieldValue },
    /// `total_time` is shorter than one `time_step`.
    ShorterThanTimeStep { total_time: f64, time_step: f64 },
}

/// One failed constraint, tied to the field it concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::Missing => write!(f, "{} is missing", self.field),
            ViolationKind::NotPositive { value } => {
                write!(f, "{} must be > 0 (got {value})", self.field)
            }
            ViolationKind::ShorterThanTimeStep {
                total_time,
                time_step,
            } => write!(
                f,
                "{} must be >= time_step (got {total_time} < {time_step})",
                self.field
            ),
        }
    }
}

/// The store failed validation.  Holds every violation found, never empty.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid parameters: {}", join(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Returns `true` if any violation concerns `field`.
    pub fn concerns(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates a decoded store and freezes it into [`SimulationParameters`].
///
/// # Errors
///
/// Returns [`ValidationError`] listing every missing field and every range
/// violation when at least one check fails.
pub fn validate(store: &ParameterStore) -> Result<SimulationParameters, ValidationError> {
    let mut violations: Vec<Violation> = store
        .unset_fields()
        .into_iter()
        .map(|field| Violation {
            field,
            kind: ViolationKind::Missing,
        })
        .collect();

    let positive_floats = [
        ("time_step", store.time_step),
        ("total_time", store.total_time),
        ("area_x", store.area_x),
        ("area_y", store.area_y),
        ("density", store.rho),
    ];
    for (field, value) in positive_floats {
        if let Some(v) = value {
            // Written as a negated comparison so NaN is rejected too.
            if !(v > 0.0) {
                violations.push(Violation {
                    field,
                    kind: ViolationKind::NotPositive {
                        value: FieldValue::Float(v),
                    },
                });
            }
        }
    }

    for (field, value) in [("n_x", store.n_x), ("n_y", store.n_y)] {
        if let Some(v) = value {
            if v <= 0 {
                violations.push(Violation {
                    field,
                    kind: ViolationKind::NotPositive {
                        value: FieldValue::Int(v),
                    },
                });
            }
        }
    }

    if let (Some(total_time), Some(time_step)) = (store.total_time, store.time_step) {
        if total_time < time_step {
            violations.push(Violation {
                field: "total_time",
                kind: ViolationKind::ShorterThanTimeStep {
                    total_time,
                    time_step,
                },
            });
        }
    }

    match SimulationParameters::from_complete(store) {
        Some(params) if violations.is_empty() => {
            debug!("all parameter constraints hold");
            Ok(params)
        }
        _ => {
            debug!(count = violations.len(), "parameter validation failed");
            Err(ValidationError { violations })
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

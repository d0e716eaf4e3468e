//! Internal helpers for parameter validation and rounding.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so every calculator rejects input the same way, before any
//! computation runs.

use crate::{EngineError, ResultEngine};

pub(crate) fn ensure_finite(value: f64, label: &str) -> ResultEngine<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::InvalidParameter(format!(
            "{label} must be a finite number"
        )))
    }
}

pub(crate) fn ensure_positive(value: f64, label: &str) -> ResultEngine<f64> {
    let value = ensure_finite(value, label)?;
    if value <= 0.0 {
        return Err(EngineError::InvalidParameter(format!(
            "{label} must be greater than 0"
        )));
    }
    Ok(value)
}

pub(crate) fn ensure_non_negative(value: f64, label: &str) -> ResultEngine<f64> {
    let value = ensure_finite(value, label)?;
    if value < 0.0 {
        return Err(EngineError::InvalidParameter(format!(
            "{label} must not be negative"
        )));
    }
    Ok(value)
}

/// Nearest whole currency unit, used for display-layer series entries.
pub(crate) fn whole_units(value: f64) -> f64 {
    let rounded = value.round();
    // Avoid emitting `-0` for tiny negative drift.
    if rounded == 0.0 { 0.0 } else { rounded }
}

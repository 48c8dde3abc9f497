//! Spec construction errors

use thiserror::Error;

/// Result type for spec construction and validation
pub type Result<T> = std::result::Result<T, SpecError>;

/// A generation request that cannot be honoured.
///
/// Raised when a spec is built or validated, never during generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} range is inverted: min {min} >= max {max}")]
    InvertedRange { field: &'static str, min: f64, max: f64 },

    #[error("sub-type {0} is outside 0-9")]
    InvalidSubtype(u8),

    #[error("{field} has no positive entries")]
    EmptyComposition { field: &'static str },

    #[error("too many belt gaps: {count} (maximum {max})")]
    TooManyGaps { count: usize, max: usize },

    #[error("{field} must be at least 1")]
    ZeroCount { field: &'static str },
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SpecError::NonFinite { field })
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SpecError::NonPositive { field, value })
    }
}

pub(crate) fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(SpecError::OutOfRange { field, value, min, max })
    }
}

pub(crate) fn ordered(field: &'static str, min: f64, max: f64) -> Result<()> {
    finite(field, min)?;
    finite(field, max)?;
    if min < max {
        Ok(())
    } else {
        Err(SpecError::InvertedRange { field, min, max })
    }
}

/// Check an optional override with `check` when present.
pub(crate) fn optional(
    value: Option<f64>,
    check: impl FnOnce(f64) -> Result<f64>,
) -> Result<()> {
    value.map(check).transpose().map(|_| ())
}

//! Validation error type shared by every validated record.

use thiserror::Error;

/// Error returned when a record fails validation at construction time.
///
/// Construction is all-or-nothing: whenever this error is returned, no
/// record value exists.
///
/// # Examples
///
/// ```
/// use design_patterns::error::ValidationError;
///
/// let error = ValidationError::missing("url");
/// assert_eq!(error.field(), "url");
/// assert_eq!(error.to_string(), "url: required field is missing");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was never set (or was explicitly staged as absent).
    #[error("{field}: required field is missing")]
    MissingRequiredField {
        /// Name of the missing field
        field: &'static str,
    },

    /// A numeric field violates its lower bound.
    #[error("{field}: value {value} is out of range (must be at least {min})")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: i64,
        /// Inclusive lower bound
        min: i64,
    },

    /// A numeric field exceeds its upper bound.
    #[error("{field}: value {value} is out of range (must be at most {max})")]
    AboveMaximum {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: i64,
        /// Inclusive upper bound
        max: i64,
    },
}

impl ValidationError {
    /// Creates a [`ValidationError::MissingRequiredField`] for `field`.
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingRequiredField { field }
    }

    /// Creates a [`ValidationError::OutOfRange`] for `field`.
    #[must_use]
    pub const fn out_of_range(field: &'static str, value: i64, min: i64) -> Self {
        Self::OutOfRange { field, value, min }
    }

    /// Creates a [`ValidationError::AboveMaximum`] for `field`.
    #[must_use]
    pub const fn above_maximum(field: &'static str, value: i64, max: i64) -> Self {
        Self::AboveMaximum { field, value, max }
    }

    /// Returns the name of the field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { field }
            | Self::OutOfRange { field, .. }
            | Self::AboveMaximum { field, .. } => field,
        }
    }
}

/// Returns `value` if present, otherwise a missing-field error for `field`.
///
/// # Errors
///
/// Returns [`ValidationError::MissingRequiredField`] when `value` is `None`.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::missing(field))
}

/// Checks that `value` is not below `min`.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] when `value < min`.
pub fn require_at_least(field: &'static str, value: i64, min: i64) -> Result<i64, ValidationError> {
    if value < min {
        Err(ValidationError::out_of_range(field, value, min))
    } else {
        Ok(value)
    }
}

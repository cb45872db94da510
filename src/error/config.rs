//! Configuration validation error types.

use std::fmt;
use thiserror::Error;

/// Configuration validation errors.
///
/// Each variant includes the field name and the values relevant for
/// debugging, so an invalid configuration is caught early with a clear
/// message.
///
/// # Example
///
/// ```rust
/// use typed_fetch::error::ConfigError;
///
/// let err = ConfigError::too_high("timeout", "600s", "5 minutes");
/// assert!(err.to_string().contains("timeout"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Field value exceeds the maximum allowed value.
    #[error("Field '{field}' value {value} exceeds maximum {max}")]
    ValueTooHigh {
        /// The name of the configuration field
        field: &'static str,
        /// The actual value that was provided
        value: String,
        /// The maximum allowed value
        max: String,
    },

    /// Field value is invalid for reasons other than range.
    #[error("Field '{field}' has invalid value: {reason}")]
    ValueInvalid {
        /// The name of the configuration field
        field: &'static str,
        /// The reason why the value is invalid
        reason: String,
    },
}

impl ConfigError {
    /// Returns the field name associated with this error.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self {
            ConfigError::ValueTooHigh { field, .. } | ConfigError::ValueInvalid { field, .. } => {
                field
            }
        }
    }

    /// Creates a new `ValueTooHigh` error.
    pub fn too_high<V: fmt::Display, M: fmt::Display>(
        field: &'static str,
        value: V,
        max: M,
    ) -> Self {
        ConfigError::ValueTooHigh {
            field,
            value: value.to_string(),
            max: max.to_string(),
        }
    }

    /// Creates a new `ValueInvalid` error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::ValueInvalid {
            field,
            reason: reason.into(),
        }
    }
}

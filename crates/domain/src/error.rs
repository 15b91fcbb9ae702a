//! Validation errors for incoming product data.

use thiserror::Error;

/// Reasons a product request body is rejected before any I/O happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields are absent or null.
    #[error("All fields are required (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A text field is present but blank.
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// A field has the wrong JSON type.
    #[error("Field '{field}' must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
}

//! Validation utilities.

use crate::{FieldError, FitlogError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `FitlogError` on failure.
    fn validate_request(&self) -> Result<(), FitlogError> {
        self.validate().map_err(validation_errors_to_fitlog_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Converts `validator::ValidationErrors` to `FitlogError`.
#[must_use]
pub fn validation_errors_to_fitlog_error(errors: ValidationErrors) -> FitlogError {
    FitlogError::InvalidFields(field_errors(&errors))
}

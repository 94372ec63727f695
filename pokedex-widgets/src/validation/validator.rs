//! Validator accumulator.

use super::result::{FieldError, ValidationResult};

/// Accumulates rule outcomes per field and produces a [`ValidationResult`].
///
/// The first failing rule per field wins; later failures for the same field
/// are ignored, so rule order determines which message a field carries.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record the outcome of one rule for a field.
    pub fn check(mut self, field: impl Into<String>, outcome: Result<(), String>) -> Self {
        let field = field.into();
        if let Err(message) = outcome
            && !self.errors.iter().any(|e| e.field == field)
        {
            self.errors.push(FieldError { field, message });
        }
        self
    }

    /// Finish and return the combined result.
    pub fn validate(self) -> ValidationResult {
        if self.errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(self.errors)
        }
    }
}

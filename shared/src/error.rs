//! Validation error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as it appears on the form (e.g. "company_name")
    pub field: String,
    /// Human-readable message for the operator
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation failure for an order draft
///
/// Carries every missing or malformed field, not just the first one,
/// so the operator can correct the whole form in one pass.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("validation failed: {}", self.summary())]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(fields: Vec<FieldError>) -> Self {
        Self { fields }
    }

    /// Build an error for a single field
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            fields: vec![FieldError::new(field, message)],
        }
    }

    /// True if this error names the given field
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }

    /// Names of all offending fields, in report order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }

    fn summary(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{}: {}", f.field, f.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value for {}", field));
                fields.push(FieldError::new(field.to_string(), message));
            }
        }
        // field_errors() iterates a map, keep the report deterministic
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Self { fields }
    }
}

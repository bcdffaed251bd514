//! Error response structures
//!
//! The API renders exactly two error shapes:
//!
//! ```json
//! { "errors": [ { "field": "email", "message": "Email must be valid" } ] }
//! { "error": "Employee not found" }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single violated field rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Request field the rule applies to (`name`, `email`, `position`, `page`, ...)
    pub field: String,
    /// Human-readable message
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

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation failure body (400)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub errors: Vec<FieldError>,
}

impl ValidationErrorBody {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

/// Single-message error body (404, 409, 500, malformed requests)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Either error shape, as seen by a client decoding a failed response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Validation(ValidationErrorBody),
    Message(ErrorBody),
}

impl ErrorPayload {
    /// Flatten either shape into one display string
    pub fn summary(&self) -> String {
        match self {
            ErrorPayload::Validation(body) => body
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            ErrorPayload::Message(body) => body.error.clone(),
        }
    }
}

//! Client error types

use http::StatusCode;
use shared::{ErrorCode, ErrorPayload, FieldError};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Field validation failed on the server
    #[error("{}", join_messages(.0))]
    Validation(Vec<FieldError>),

    /// Request was rejected as malformed
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Email already in use
    #[error("{0}")]
    Conflict(String),

    /// Any other non-success status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ClientError {
    /// Build an error from a failed response's status and body text
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let payload = serde_json::from_str::<ErrorPayload>(body).ok();
        let message = payload
            .as_ref()
            .map(ErrorPayload::summary)
            .unwrap_or_else(|| body.trim().to_string());

        match (ErrorCode::from_http_status(status), payload) {
            (ErrorCode::ValidationFailed, Some(ErrorPayload::Validation(body))) => {
                ClientError::Validation(body.errors)
            }
            (ErrorCode::ValidationFailed, _) => ClientError::BadRequest(message),
            (ErrorCode::NotFound, _) => ClientError::NotFound(message),
            (ErrorCode::AlreadyExists, _) => ClientError::Conflict(message),
            _ => ClientError::Server {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Field errors, if this is a validation failure
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ClientError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

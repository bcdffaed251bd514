use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::{ErrorBody, ErrorCode, FieldError, ValidationErrorBody};
use thiserror::Error;

use crate::db::repository::RepoError;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<FieldError>),

    #[error("Employee not found")]
    NotFound,

    #[error("Email already exists")]
    Conflict,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Request body too large")]
    PayloadTooLarge,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ServerError {
    /// Error code carried by this error
    pub fn code(&self) -> ErrorCode {
        match self {
            ServerError::Validation(_) => ErrorCode::ValidationFailed,
            ServerError::NotFound => ErrorCode::EmployeeNotFound,
            ServerError::Conflict => ErrorCode::EmployeeEmailExists,
            ServerError::BadRequest(_) => ErrorCode::InvalidRequest,
            ServerError::PayloadTooLarge => ErrorCode::PayloadTooLarge,
            ServerError::Internal(_) => ErrorCode::InternalError,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let code = self.code();
        let status = code.http_status();

        match self {
            ServerError::Validation(errors) => {
                (status, Json(ValidationErrorBody::new(errors))).into_response()
            }
            ServerError::BadRequest(message) => (status, Json(ErrorBody::new(message))).into_response(),
            ServerError::Internal(err) => {
                // Logged in full, never sent to the caller
                tracing::error!(error = ?err, "Internal server error");
                (status, Json(ErrorBody::new(code.message()))).into_response()
            }
            ServerError::NotFound | ServerError::Conflict | ServerError::PayloadTooLarge => {
                (status, Json(ErrorBody::new(code.message()))).into_response()
            }
        }
    }
}

impl From<RepoError> for ServerError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(_) => ServerError::NotFound,
            RepoError::Duplicate(_) => ServerError::Conflict,
            RepoError::Database(msg) => ServerError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ServerError::PayloadTooLarge;
        }
        ServerError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}

/// A path segment that cannot be decoded names no employee
impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected path");
        ServerError::NotFound
    }
}

/// Handler result type alias
pub type AppResult<T> = std::result::Result<T, ServerError>;

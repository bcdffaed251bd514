//! Unified error system for the staff directory
//!
//! - [`ErrorCode`]: standardized error codes, mapped to HTTP statuses
//! - [`FieldError`]: one violated field rule
//! - [`ErrorBody`] / [`ValidationErrorBody`]: the two JSON error shapes
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorCode, FieldError, ValidationErrorBody};
//!
//! let code = ErrorCode::EmployeeEmailExists;
//! assert_eq!(code.http_status().as_u16(), 409);
//!
//! let body = ValidationErrorBody::new(vec![FieldError::new("name", "Name is required")]);
//! assert_eq!(body.errors.len(), 1);
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{ErrorBody, ErrorPayload, FieldError, ValidationErrorBody};

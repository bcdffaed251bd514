//! Shared types for the staff directory
//!
//! Wire types used by both `staff-server` and `staff-client`: the employee
//! model and its payloads, list/page envelopes, error codes and error bodies.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ErrorBody, ErrorCode, ErrorPayload, FieldError, ValidationErrorBody};
pub use models::{
    DataResponse, Employee, EmployeeCreate, EmployeePayload, EmployeeQuery, EmployeeUpdate,
    PaginatedResponse,
};
pub use serde::{Deserialize, Serialize};

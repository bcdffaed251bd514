//! Staff Client - employee directory client library
//!
//! - [`HttpClient`]: REST client for the staff server
//! - [`EmployeeStore`]: view state (list, loading, error, search term)
//! - [`SearchDebouncer`]: delays searches until input settles
//! - [`form`]: advisory form validation
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use staff_client::{ClientConfig, EmployeeStore, HttpClient, SearchDebouncer};
//!
//! let config = ClientConfig::new("http://localhost:4000");
//! let store = Arc::new(EmployeeStore::new(HttpClient::new(&config)?));
//! store.fetch_employees(None).await?;
//!
//! let search = SearchDebouncer::with_delay(store.clone(), config.search_delay);
//! search.input("ali");
//! ```

pub mod api;
pub mod config;
pub mod debounce;
pub mod error;
pub mod form;
pub mod http;
pub mod store;

#[cfg(test)]
mod testing;

pub use api::EmployeeApi;
pub use config::ClientConfig;
pub use debounce::SearchDebouncer;
pub use error::{ClientError, ClientResult};
pub use form::EmployeeForm;
pub use crate::http::HttpClient;
pub use store::{EmployeeStore, StoreSnapshot};

// Re-export shared types for convenience
pub use shared::models::{Employee, EmployeePayload, EmployeeQuery, PaginatedResponse};
pub use shared::FieldError;

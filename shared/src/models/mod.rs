//! Data models shared between server and client

pub mod employee;

pub use employee::{
    Employee, EmployeeCreate, EmployeePayload, EmployeeQuery, EmployeeUpdate, MAX_EMAIL_LEN,
    MAX_NAME_LEN, MAX_POSITION_LEN,
};

use serde::{Deserialize, Serialize};

/// Single-record envelope: `{ "data": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Paginated list envelope: `{ "data": [...], "page", "limit", "total" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Records on this page
    pub data: Vec<T>,
    /// Current page (1-indexed)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Number of matching records before pagination
    pub total: u64,
}

impl<T> PaginatedResponse<T> {
    /// Number of pages needed for `total` records at this page size
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }
}

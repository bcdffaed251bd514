//! Employee API abstraction
//!
//! The store talks to the server through this trait so it can be driven by
//! the real [`HttpClient`](crate::HttpClient) or by an in-process fake.

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::{Employee, EmployeePayload, EmployeeQuery, PaginatedResponse};

use crate::ClientResult;

#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// `GET /api/employees`
    async fn list(&self, query: &EmployeeQuery) -> ClientResult<PaginatedResponse<Employee>>;

    /// `GET /api/employees/{id}`
    async fn get(&self, id: i64) -> ClientResult<Employee>;

    /// `POST /api/employees`
    async fn create(&self, payload: &EmployeePayload) -> ClientResult<Employee>;

    /// `PUT /api/employees/{id}`
    async fn update(&self, id: i64, payload: &EmployeePayload) -> ClientResult<Employee>;

    /// `DELETE /api/employees/{id}`
    async fn delete(&self, id: i64) -> ClientResult<()>;
}

#[async_trait]
impl<T: EmployeeApi + ?Sized> EmployeeApi for Arc<T> {
    async fn list(&self, query: &EmployeeQuery) -> ClientResult<PaginatedResponse<Employee>> {
        (**self).list(query).await
    }

    async fn get(&self, id: i64) -> ClientResult<Employee> {
        (**self).get(id).await
    }

    async fn create(&self, payload: &EmployeePayload) -> ClientResult<Employee> {
        (**self).create(payload).await
    }

    async fn update(&self, id: i64, payload: &EmployeePayload) -> ClientResult<Employee> {
        (**self).update(id, payload).await
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        (**self).delete(id).await
    }
}

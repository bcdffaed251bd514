//! In-memory [`EmployeeApi`] used by unit tests

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use shared::models::{Employee, EmployeePayload, EmployeeQuery, PaginatedResponse};

use crate::{ClientError, ClientResult, EmployeeApi};

#[derive(Default)]
struct FakeState {
    employees: Vec<Employee>,
    next_id: i64,
    list_delay: Duration,
    list_calls: Vec<EmployeeQuery>,
}

#[derive(Default)]
pub(crate) struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    /// One employee per name, email derived from the name
    pub(crate) fn seeded(names: &[&str]) -> Self {
        let api = Self::default();
        {
            let mut state = api.state.lock();
            for name in names {
                state.next_id += 1;
                let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
                let now = Utc::now();
                let employee = Employee {
                    id: state.next_id,
                    name: name.to_string(),
                    email,
                    position: "Engineer".into(),
                    created_at: now,
                    updated_at: now,
                };
                state.employees.push(employee);
            }
        }
        api
    }

    /// Delay applied to list calls issued from now on
    pub(crate) fn set_list_delay(&self, delay: Duration) {
        self.state.lock().list_delay = delay;
    }

    pub(crate) fn list_calls(&self) -> Vec<EmployeeQuery> {
        self.state.lock().list_calls.clone()
    }

    pub(crate) fn last_query(&self) -> Option<EmployeeQuery> {
        self.state.lock().list_calls.last().cloned()
    }

    fn email_taken(state: &FakeState, email: &str, except: Option<i64>) -> bool {
        state
            .employees
            .iter()
            .any(|e| e.email == email && Some(e.id) != except)
    }
}

fn not_found() -> ClientError {
    ClientError::NotFound("Employee not found".into())
}

fn conflict() -> ClientError {
    ClientError::Conflict("Email already exists".into())
}

#[async_trait]
impl EmployeeApi for FakeApi {
    async fn list(&self, query: &EmployeeQuery) -> ClientResult<PaginatedResponse<Employee>> {
        let delay = {
            let mut state = self.state.lock();
            state.list_calls.push(query.clone());
            state.list_delay
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let state = self.state.lock();
        let needle = query.name.as_deref().map(str::to_lowercase);
        let mut data: Vec<Employee> = state
            .employees
            .iter()
            .filter(|e| {
                needle
                    .as_deref()
                    .is_none_or(|n| e.name.to_lowercase().contains(n))
            })
            .cloned()
            .collect();
        data.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(PaginatedResponse {
            total: data.len() as u64,
            data,
            page: 1,
            limit: 100,
        })
    }

    async fn get(&self, id: i64) -> ClientResult<Employee> {
        let state = self.state.lock();
        state
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create(&self, payload: &EmployeePayload) -> ClientResult<Employee> {
        let mut state = self.state.lock();
        let email = payload.email.clone().unwrap_or_default();
        if Self::email_taken(&state, &email, None) {
            return Err(conflict());
        }
        state.next_id += 1;
        let now = Utc::now();
        let employee = Employee {
            id: state.next_id,
            name: payload.name.clone().unwrap_or_default(),
            email,
            position: payload.position.clone().unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        state.employees.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i64, payload: &EmployeePayload) -> ClientResult<Employee> {
        let mut state = self.state.lock();
        if let Some(email) = &payload.email
            && Self::email_taken(&state, email, Some(id))
        {
            return Err(conflict());
        }
        let employee = state
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(not_found)?;
        if let Some(name) = &payload.name {
            employee.name = name.clone();
        }
        if let Some(email) = &payload.email {
            employee.email = email.clone();
        }
        if let Some(position) = &payload.position {
            employee.position = position.clone();
        }
        employee.updated_at = Utc::now();
        Ok(employee.clone())
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        let mut state = self.state.lock();
        let before = state.employees.len();
        state.employees.retain(|e| e.id != id);
        if state.employees.len() == before {
            return Err(not_found());
        }
        Ok(())
    }
}

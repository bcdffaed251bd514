//! Client-side employee store
//!
//! Holds what a view renders: the current list, a loading flag, the last
//! error and the active search term. Local state only changes after the
//! server confirms an operation. Failures are recorded in `error` and also
//! returned to the caller.
//!
//! List fetches are numbered. A response is applied only if no newer fetch
//! has been issued since, so a slow search can never overwrite a faster,
//! more recent one.

use parking_lot::RwLock;
use shared::models::{Employee, EmployeePayload, EmployeeQuery};

use crate::{ClientResult, EmployeeApi};

/// Point-in-time copy of the store state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

#[derive(Debug, Default)]
struct StoreState {
    employees: Vec<Employee>,
    in_flight: usize,
    error: Option<String>,
    search_term: String,
    page: u32,
    limit: u32,
    total: u64,
    /// Sequence number of the newest issued list fetch
    latest_fetch: u64,
}

/// Employee store backed by an [`EmployeeApi`]
pub struct EmployeeStore<A> {
    api: A,
    state: RwLock<StoreState>,
}

/// Keeps `loading` raised for as long as it lives
struct InFlight<'a> {
    state: &'a RwLock<StoreState>,
}

impl<'a> InFlight<'a> {
    fn start(state: &'a RwLock<StoreState>) -> Self {
        state.write().in_flight += 1;
        Self { state }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.state.write();
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

impl<A: EmployeeApi> EmployeeStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: RwLock::new(StoreState::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read();
        StoreSnapshot {
            employees: state.employees.clone(),
            loading: state.in_flight > 0,
            error: state.error.clone(),
            search_term: state.search_term.clone(),
            page: state.page,
            limit: state.limit,
            total: state.total,
        }
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.state.read().employees.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().in_flight > 0
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn search_term(&self) -> String {
        self.state.read().search_term.clone()
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    /// Load the list, optionally filtered by name
    ///
    /// Returns `Ok(false)` when the response was superseded by a newer fetch
    /// and therefore discarded.
    pub async fn fetch_employees(&self, name: Option<&str>) -> ClientResult<bool> {
        let seq = {
            let mut state = self.state.write();
            state.latest_fetch += 1;
            state.latest_fetch
        };
        let query = EmployeeQuery {
            name: name.map(str::to_string),
            ..EmployeeQuery::default()
        };

        let result = {
            let _loading = InFlight::start(&self.state);
            self.api.list(&query).await
        };

        let mut state = self.state.write();
        if seq != state.latest_fetch {
            tracing::debug!(seq, latest = state.latest_fetch, "Discarding stale list response");
            return Ok(false);
        }

        match result {
            Ok(page) => {
                state.employees = page.data;
                state.page = page.page;
                state.limit = page.limit;
                state.total = page.total;
                state.error = None;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch employees");
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Record `term` as the active search and fetch matching employees
    ///
    /// A blank term fetches the unfiltered list.
    pub async fn search(&self, term: &str) -> ClientResult<bool> {
        self.state.write().search_term = term.to_string();
        let trimmed = term.trim();
        let filter = (!trimmed.is_empty()).then_some(trimmed);
        self.fetch_employees(filter).await
    }

    /// Create an employee and prepend it to the list
    pub async fn add(&self, payload: &EmployeePayload) -> ClientResult<Employee> {
        let result = {
            let _loading = InFlight::start(&self.state);
            self.api.create(payload).await
        };
        self.apply(result, |employees, created| {
            employees.insert(0, created.clone());
        })
    }

    /// Update an employee and replace it in the list
    pub async fn update(&self, id: i64, payload: &EmployeePayload) -> ClientResult<Employee> {
        let result = {
            let _loading = InFlight::start(&self.state);
            self.api.update(id, payload).await
        };
        self.apply(result, |employees, updated| {
            if let Some(slot) = employees.iter_mut().find(|e| e.id == updated.id) {
                *slot = updated.clone();
            }
        })
    }

    /// Delete an employee and remove it from the list
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let result = {
            let _loading = InFlight::start(&self.state);
            self.api.delete(id).await
        };
        self.apply(result, |employees, _| {
            employees.retain(|e| e.id != id);
        })
    }

    fn apply<T>(
        &self,
        result: ClientResult<T>,
        mutate: impl FnOnce(&mut Vec<Employee>, &T),
    ) -> ClientResult<T> {
        let mut state = self.state.write();
        match result {
            Ok(value) => {
                mutate(&mut state.employees, &value);
                state.error = None;
                Ok(value)
            }
            Err(err) => {
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

impl<A> std::fmt::Debug for EmployeeStore<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("EmployeeStore")
            .field("employees", &state.employees.len())
            .field("in_flight", &state.in_flight)
            .field("search_term", &state.search_term)
            .finish()
    }
}

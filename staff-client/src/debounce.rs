//! Debounced search input
//!
//! Each keystroke restarts the delay. Only the delay is cancellable: once a
//! search has been sent, a newer one supersedes it through the store's fetch
//! sequence numbers instead.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::DEFAULT_SEARCH_DELAY;
use crate::{EmployeeApi, EmployeeStore};

pub struct SearchDebouncer<A> {
    store: Arc<EmployeeStore<A>>,
    delay: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl<A: EmployeeApi + 'static> SearchDebouncer<A> {
    pub fn new(store: Arc<EmployeeStore<A>>) -> Self {
        Self::with_delay(store, DEFAULT_SEARCH_DELAY)
    }

    pub fn with_delay(store: Arc<EmployeeStore<A>>, delay: Duration) -> Self {
        Self {
            store,
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register new input; the search runs after `delay` without further input
    ///
    /// Must be called from within a Tokio runtime.
    pub fn input(&self, term: impl Into<String>) -> JoinHandle<()> {
        let token = CancellationToken::new();
        if let Some(previous) = self.pending.lock().replace(token.clone()) {
            previous.cancel();
        }

        let store = self.store.clone();
        let delay = self.delay;
        let term = term.into();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::trace!(term = %term, "Search input superseded");
                }
                _ = tokio::time::sleep(delay) => {
                    if let Err(e) = store.search(&term).await {
                        tracing::debug!(error = %e, "Debounced search failed");
                    }
                }
            }
        })
    }

    /// Drop any pending (not yet sent) search
    pub fn cancel(&self) {
        if let Some(token) = self.pending.lock().take() {
            token.cancel();
        }
    }
}

impl<A> Drop for SearchDebouncer<A> {
    fn drop(&mut self) {
        if let Some(token) = self.pending.get_mut().take() {
            token.cancel();
        }
    }
}

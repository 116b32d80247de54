//! Synchronization service module for the todosync application.
//!
//! This module provides the [`SyncService`] struct which orchestrates requests to the
//! remote [`TodolistService`] and translates their results into store mutations or
//! error reports.
//!
//! Every operation follows the same state machine:
//! 1. The global status becomes `loading`
//! 2. The remote service is called
//! 3. On a transport failure the error is reported, the status becomes `failed`
//!    and the operation returns [`SyncError::Network`]
//! 4. On an envelope with a failure result code the first server message (or a
//!    generic fallback) is reported, the status becomes `failed` and the operation
//!    returns [`SyncError::Domain`]
//! 5. On success the matching [`Action`] is dispatched and the status becomes `succeeded`
//!
//! Failed operations never mutate the todolist or task slices.

pub mod tasks;
pub mod todolists;

use std::sync::Arc;

use log::{error, warn};

use crate::backend::{BackendError, Envelope, TodolistService};
use crate::constants::ERROR_GENERIC;
use crate::store::{Action, RequestStatus, Store};

/// Why a synchronization operation was rejected.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The server answered with a failure result code.
    #[error("{}", first_message(.messages))]
    Domain { result_code: i32, messages: Vec<String> },

    /// The request never produced an envelope.
    #[error(transparent)]
    Network(#[from] BackendError),

    /// An update targeted a task the local store does not know about.
    #[error("Task {task_id} not found in todolist {todolist_id}")]
    TaskNotFound { todolist_id: String, task_id: String },
}

impl SyncError {
    /// Text reported to the global error for this failure.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            ERROR_GENERIC.to_string()
        } else {
            message
        }
    }
}

fn first_message(messages: &[String]) -> &str {
    messages
        .iter()
        .map(String::as_str)
        .find(|m| !m.trim().is_empty())
        .unwrap_or(ERROR_GENERIC)
}

pub type SyncResult<T> = Result<T, SyncError>;

/// Service that keeps the [`Store`] in sync with the remote todolist service.
///
/// Cloning is cheap: clones share the same service and store, so operations can be
/// spawned onto a tokio runtime and their completions may interleave in any order.
///
/// # Example
/// ```rust,no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use todosync::backend::http::HttpService;
/// use todosync::store::Store;
/// use todosync::sync::SyncService;
///
/// # async fn example() -> anyhow::Result<()> {
/// let service = HttpService::new("https://example.com/api/1.1/", None, Duration::from_secs(10))?;
/// let sync = SyncService::new(Arc::new(service), Store::new());
///
/// sync.fetch_todolists().await?;
/// sync.add_task("1", "Milk").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SyncService {
    service: Arc<dyn TodolistService>,
    store: Store,
}

impl SyncService {
    pub fn new(service: Arc<dyn TodolistService>, store: Store) -> Self {
        Self { service, store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Fetches all todolists, then the tasks of each fetched todolist.
    ///
    /// Stops at the first failure.
    pub async fn fetch_all(&self) -> SyncResult<()> {
        let todolists = self.fetch_todolists().await?;
        for todolist in &todolists {
            self.fetch_tasks(&todolist.id).await?;
        }
        Ok(())
    }

    /// Drops every todolist and task from the store.
    pub fn clear(&self) {
        self.store.dispatch(Action::ClearTasksAndTodolists);
    }

    /// Clears the last reported error once the UI has shown it.
    pub fn dismiss_error(&self) {
        self.store.dispatch(Action::SetAppError(None));
    }

    fn set_status(&self, status: RequestStatus) {
        self.store.dispatch(Action::SetAppStatus(status));
    }

    fn begin(&self) {
        self.set_status(RequestStatus::Loading);
    }

    fn succeed(&self) {
        self.set_status(RequestStatus::Succeeded);
    }

    /// Report a rejected operation to the global status and hand the error back.
    fn fail(&self, err: SyncError) -> SyncError {
        let message = err.message();
        error!("❌ {message}");
        self.store.dispatch(Action::SetAppError(Some(message)));
        self.set_status(RequestStatus::Failed);
        err
    }

    /// Turn a service result into its payload, reporting network and domain failures.
    fn accept<T>(&self, result: Result<Envelope<T>, BackendError>) -> SyncResult<T> {
        let envelope = result.map_err(|e| self.fail(SyncError::Network(e)))?;
        if envelope.is_success() {
            envelope.data.ok_or_else(|| {
                self.fail(SyncError::Network(BackendError::InvalidData(
                    "successful envelope without data".to_string(),
                )))
            })
        } else {
            if !envelope.fields_errors.is_empty() {
                warn!("Field errors: {:?}", envelope.fields_errors);
            }
            Err(self.fail(SyncError::Domain {
                result_code: envelope.result_code,
                messages: envelope.messages,
            }))
        }
    }

    /// Report a transport failure for endpoints that are not enveloped.
    fn accept_plain<T>(&self, result: Result<T, BackendError>) -> SyncResult<T> {
        result.map_err(|e| self.fail(SyncError::Network(e)))
    }
}

//! Subscribable state container for todolists, tasks and the global status.
//!
//! The [`Store`] owns a [`RootState`] snapshot. Every change goes through
//! [`Store::dispatch`], which runs the [`Action`] through the pure slice reducers
//! and notifies subscribers when at least one slice changed.
//!
//! # Example
//! ```rust
//! use todosync::store::{Action, Store};
//! use todosync::backend::Todolist;
//!
//! let store = Store::new();
//! let updates = store.subscribe();
//!
//! store.dispatch(Action::SetTodolists(vec![Todolist {
//!     id: "1".to_string(),
//!     title: "Groceries".to_string(),
//!     added_date: "2024-01-01T00:00:00".to_string(),
//!     order: 0,
//! }]));
//!
//! assert!(updates.has_changed().unwrap());
//! assert_eq!(store.snapshot().todolists[0].title(), "Groceries");
//! assert!(store.tasks_for("1").is_empty());
//! ```

pub mod actions;
pub mod app;
pub mod tasks;
pub mod todolists;

use tokio::sync::watch;

pub use actions::Action;
pub use app::{AppState, RequestStatus};
pub use tasks::TasksState;
pub use todolists::{TaskFilter, TodolistDomain, TodolistsState};

use crate::backend::Task;

/// Complete client state as seen by the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub app: AppState,
    pub todolists: TodolistsState,
    pub tasks: TasksState,
}

impl RootState {
    /// Run `action` through every slice reducer. Returns `true` if anything changed.
    pub fn apply(&mut self, action: &Action) -> bool {
        // Every reducer must see the action, so no short-circuiting here.
        let app_changed = app::reduce(&mut self.app, action);
        let todolists_changed = todolists::reduce(&mut self.todolists, action);
        let tasks_changed = tasks::reduce(&mut self.tasks, action);
        app_changed || todolists_changed || tasks_changed
    }
}

/// Shared handle to the client state. Cloning yields another handle to the same state.
#[derive(Debug, Clone)]
pub struct Store {
    state: std::sync::Arc<watch::Sender<RootState>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(state: RootState) -> Self {
        let (sender, _) = watch::channel(state);
        Self {
            state: std::sync::Arc::new(sender),
        }
    }

    /// Apply `action` and notify subscribers if the state changed.
    ///
    /// Returns whether the state changed.
    pub fn dispatch(&self, action: Action) -> bool {
        log::trace!("dispatch {action:?}");
        self.state.send_if_modified(|state| state.apply(&action))
    }

    /// Receiver that is marked changed after every state-changing dispatch.
    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.state.subscribe()
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> RootState {
        self.state.borrow().clone()
    }

    pub fn app(&self) -> AppState {
        self.state.borrow().app.clone()
    }

    pub fn todolists(&self) -> TodolistsState {
        self.state.borrow().todolists.clone()
    }

    pub fn todolist(&self, id: &str) -> Option<TodolistDomain> {
        self.state.borrow().todolists.iter().find(|todo| todo.id() == id).cloned()
    }

    /// Tasks of `todolist_id` in display order; empty if the list is unknown.
    pub fn tasks_for(&self, todolist_id: &str) -> Vec<Task> {
        self.state
            .borrow()
            .tasks
            .get(todolist_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Tasks of `todolist_id` visible under the todolist's current filter.
    pub fn visible_tasks(&self, todolist_id: &str) -> Vec<Task> {
        let state = self.state.borrow();
        let filter = state
            .todolists
            .iter()
            .find(|todo| todo.id() == todolist_id)
            .map(|todo| todo.filter)
            .unwrap_or_default();
        state
            .tasks
            .get(todolist_id)
            .map(|tasks| tasks.iter().filter(|t| filter.matches(t)).cloned().collect())
            .unwrap_or_default()
    }

    pub fn find_task(&self, todolist_id: &str, task_id: &str) -> Option<Task> {
        self.state
            .borrow()
            .tasks
            .get(todolist_id)
            .and_then(|tasks| tasks.iter().find(|t| t.id == task_id))
            .cloned()
    }
}

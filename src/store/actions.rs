//! Actions dispatched to the store and seen by every slice reducer.

use crate::backend::{Task, Todolist, UpdateDomainTaskModel};

use super::app::RequestStatus;
use super::todolists::TaskFilter;

/// Every state transition the store understands.
///
/// Local UI actions are applied as soon as they are dispatched; the
/// `*Added`/`*Removed`/`*Changed`/`*Fetched`/`*Updated` variants carry the
/// payload of a synchronization operation that the server confirmed.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Global status
    SetAppStatus(RequestStatus),
    SetAppError(Option<String>),

    // Todolist local operations
    ChangeTodolistFilter {
        id: String,
        filter: TaskFilter,
    },
    ChangeTodolistEntityStatus {
        id: String,
        status: RequestStatus,
    },
    SetTodolists(Vec<Todolist>),

    // Confirmed todolist operations
    TodolistAdded(Todolist),
    TodolistRemoved {
        id: String,
    },
    TodolistTitleChanged {
        id: String,
        title: String,
    },

    // Confirmed task operations
    TasksFetched {
        todolist_id: String,
        tasks: Vec<Task>,
    },
    TaskAdded(Task),
    TaskRemoved {
        todolist_id: String,
        task_id: String,
    },
    TaskUpdated {
        todolist_id: String,
        task_id: String,
        model: UpdateDomainTaskModel,
    },

    // Drops all todolists and tasks (logout)
    ClearTasksAndTodolists,
}

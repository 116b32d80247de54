//! Ordered collection of todolists decorated with client-only UI state.

use serde::{Deserialize, Serialize};

use super::actions::Action;
use super::app::RequestStatus;
use crate::backend::{Task, TaskStatus, Todolist};

/// Which tasks of a todolist the UI shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Whether `task` is visible under this filter.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => task.status != TaskStatus::Completed,
            TaskFilter::Completed => task.status == TaskStatus::Completed,
        }
    }
}

/// A server todolist plus the UI state the server never sees.
#[derive(Debug, Clone, PartialEq)]
pub struct TodolistDomain {
    pub todolist: Todolist,
    pub filter: TaskFilter,
    pub entity_status: RequestStatus,
}

impl TodolistDomain {
    pub fn id(&self) -> &str {
        &self.todolist.id
    }

    pub fn title(&self) -> &str {
        &self.todolist.title
    }
}

impl From<Todolist> for TodolistDomain {
    fn from(todolist: Todolist) -> Self {
        Self {
            todolist,
            filter: TaskFilter::All,
            entity_status: RequestStatus::Idle,
        }
    }
}

pub type TodolistsState = Vec<TodolistDomain>;

fn find_mut<'a>(state: &'a mut TodolistsState, id: &str) -> Option<&'a mut TodolistDomain> {
    state.iter_mut().find(|todo| todo.id() == id)
}

/// Apply `action` to the todolist slice. Returns `true` if the slice changed.
pub fn reduce(state: &mut TodolistsState, action: &Action) -> bool {
    match action {
        Action::ChangeTodolistFilter { id, filter } => match find_mut(state, id) {
            Some(todo) if todo.filter != *filter => {
                todo.filter = *filter;
                true
            }
            _ => false,
        },
        Action::ChangeTodolistEntityStatus { id, status } => match find_mut(state, id) {
            Some(todo) if todo.entity_status != *status => {
                todo.entity_status = *status;
                true
            }
            _ => false,
        },
        Action::SetTodolists(todolists) => {
            *state = todolists.iter().cloned().map(TodolistDomain::from).collect();
            true
        }
        Action::TodolistAdded(todolist) => {
            state.insert(0, TodolistDomain::from(todolist.clone()));
            true
        }
        Action::TodolistRemoved { id } => match state.iter().position(|todo| todo.id() == id) {
            Some(index) => {
                state.remove(index);
                true
            }
            None => false,
        },
        Action::TodolistTitleChanged { id, title } => match find_mut(state, id) {
            Some(todo) if todo.todolist.title != *title => {
                todo.todolist.title = title.clone();
                true
            }
            _ => false,
        },
        Action::ClearTasksAndTodolists => {
            let changed = !state.is_empty();
            state.clear();
            changed
        }
        _ => false,
    }
}

//! Task sequences keyed by their parent todolist id.

use std::collections::HashMap;

use super::actions::Action;

use crate::backend::Task;

/// Display order is insertion order; new tasks go first.
pub type TasksState = HashMap<String, Vec<Task>>;

/// Apply `action` to the task slice. Returns `true` if the slice changed.
///
/// Keys are created and dropped only by todolist actions. Task completions for a
/// todolist without a key (removed while the request was in flight, or never known)
/// are ignored.
pub fn reduce(state: &mut TasksState, action: &Action) -> bool {
    match action {
        Action::TasksFetched { todolist_id, tasks } => match state.get_mut(todolist_id) {
            Some(current) if current != tasks => {
                *current = tasks.clone();
                true
            }
            _ => false,
        },
        Action::TaskAdded(task) => match state.get_mut(&task.todo_list_id) {
            Some(tasks) => {
                tasks.insert(0, task.clone());
                true
            }
            None => false,
        },
        Action::TaskRemoved { todolist_id, task_id } => {
            let Some(tasks) = state.get_mut(todolist_id) else {
                return false;
            };
            match tasks.iter().position(|t| &t.id == task_id) {
                Some(index) => {
                    tasks.remove(index);
                    true
                }
                None => false,
            }
        }
        Action::TaskUpdated {
            todolist_id,
            task_id,
            model,
        } => {
            let Some(task) = state
                .get_mut(todolist_id)
                .and_then(|tasks| tasks.iter_mut().find(|t| &t.id == task_id))
            else {
                return false;
            };
            let before = task.clone();
            model.apply_to(task);
            *task != before
        }
        Action::TodolistAdded(todolist) => {
            state.insert(todolist.id.clone(), Vec::new());
            true
        }
        Action::TodolistRemoved { id } => state.remove(id).is_some(),
        Action::SetTodolists(todolists) => {
            // Keys of todolists missing from the new collection would be orphaned.
            state.retain(|id, _| todolists.iter().any(|todolist| &todolist.id == id));
            for todolist in todolists {
                state.insert(todolist.id.clone(), Vec::new());
            }
            true
        }
        Action::ClearTasksAndTodolists => {
            let changed = !state.is_empty();
            state.clear();
            changed
        }
        _ => false,
    }
}

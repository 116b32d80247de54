use log::{info, warn};

use crate::backend::{Task, UpdateDomainTaskModel, UpdateTaskModel};
use crate::constants::ERROR_TASK_NOT_FOUND;
use crate::store::Action;
use crate::sync::{SyncError, SyncResult, SyncService};

impl SyncService {
    /// Replaces the task sequence of `todolist_id` with the server's.
    pub async fn fetch_tasks(&self, todolist_id: &str) -> SyncResult<Vec<Task>> {
        self.begin();
        let response = self.accept_plain(self.service.get_tasks(todolist_id).await)?;
        if let Some(err) = response.error.as_deref().filter(|e| !e.is_empty()) {
            warn!("Task listing for {todolist_id} reported: {err}");
        }

        let tasks = response.items;
        info!("✅ Fetched {} tasks for {todolist_id}", tasks.len());
        self.store.dispatch(Action::TasksFetched {
            todolist_id: todolist_id.to_string(),
            tasks: tasks.clone(),
        });
        self.succeed();
        Ok(tasks)
    }

    /// Creates a task remotely and prepends the confirmed task to its todolist.
    pub async fn add_task(&self, todolist_id: &str, title: &str) -> SyncResult<Task> {
        self.begin();
        let item = self.accept(self.service.create_task(todolist_id, title).await)?;
        let task = item.item;
        info!("✅ Task created: {}", task.title);
        self.store.dispatch(Action::TaskAdded(task.clone()));
        self.succeed();
        Ok(task)
    }

    /// Deletes a task remotely and removes it from its todolist.
    pub async fn remove_task(&self, todolist_id: &str, task_id: &str) -> SyncResult<()> {
        self.begin();
        self.accept(self.service.delete_task(todolist_id, task_id).await)?;
        self.store.dispatch(Action::TaskRemoved {
            todolist_id: todolist_id.to_string(),
            task_id: task_id.to_string(),
        });
        self.succeed();
        Ok(())
    }

    /// Updates a task remotely and merges `model` into the stored task.
    ///
    /// The remote call needs the complete task, so the payload is the stored task with
    /// `model` applied on top. The stored copy may be stale; whatever it holds is sent.
    ///
    /// # Errors
    /// Returns [`SyncError::TaskNotFound`] without calling the service or touching the
    /// global status when the task is not in the store.
    pub async fn update_task(
        &self,
        todolist_id: &str,
        task_id: &str,
        model: UpdateDomainTaskModel,
    ) -> SyncResult<()> {
        let Some(task) = self.store.find_task(todolist_id, task_id) else {
            warn!("{ERROR_TASK_NOT_FOUND}: {todolist_id}/{task_id}");
            return Err(SyncError::TaskNotFound {
                todolist_id: todolist_id.to_string(),
                task_id: task_id.to_string(),
            });
        };

        self.begin();
        let payload = UpdateTaskModel::merged(&task, &model);
        self.accept(self.service.update_task(todolist_id, task_id, &payload).await)?;
        self.store.dispatch(Action::TaskUpdated {
            todolist_id: todolist_id.to_string(),
            task_id: task_id.to_string(),
            model,
        });
        self.succeed();
        Ok(())
    }
}

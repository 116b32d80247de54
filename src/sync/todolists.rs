use log::info;

use crate::backend::Todolist;
use crate::store::{Action, RequestStatus, TaskFilter};
use crate::sync::{SyncResult, SyncService};

impl SyncService {
    /// Replaces the todolist collection with the server's.
    ///
    /// Each todolist starts with filter `all`, entity status `idle` and an empty task
    /// sequence. The listing is not enveloped, so only transport failures reject.
    ///
    /// # Returns
    /// The todolists returned by the server
    pub async fn fetch_todolists(&self) -> SyncResult<Vec<Todolist>> {
        self.begin();
        let todolists = self.accept_plain(self.service.get_todolists().await)?;
        info!("✅ Fetched {} todolists", todolists.len());
        self.store.dispatch(Action::SetTodolists(todolists.clone()));
        self.succeed();
        Ok(todolists)
    }

    /// Creates a todolist remotely and prepends the confirmed record.
    pub async fn add_todolist(&self, title: &str) -> SyncResult<Todolist> {
        self.begin();
        let item = self.accept(self.service.create_todolist(title).await)?;
        let todolist = item.item;
        info!("✅ Todolist created: {}", todolist.title);
        self.store.dispatch(Action::TodolistAdded(todolist.clone()));
        self.succeed();
        Ok(todolist)
    }

    /// Deletes a todolist remotely and removes it with its tasks.
    ///
    /// The todolist's entity status is `loading` while the request is in flight so the
    /// UI can disable its controls. A rejected deletion restores the status it had before.
    pub async fn remove_todolist(&self, id: &str) -> SyncResult<()> {
        self.begin();
        let previous = self.store.todolist(id).map(|todo| todo.entity_status);
        self.set_entity_status(id, RequestStatus::Loading);

        let result = self.service.delete_todolist(id).await;
        if let Err(err) = self.accept(result) {
            if let Some(status) = previous {
                self.set_entity_status(id, status);
            }
            return Err(err);
        }

        info!("✅ Todolist removed: {id}");
        self.store.dispatch(Action::TodolistRemoved { id: id.to_string() });
        self.succeed();
        Ok(())
    }

    /// Renames a todolist remotely and patches its title.
    pub async fn change_todolist_title(&self, id: &str, title: &str) -> SyncResult<()> {
        self.begin();
        self.accept(self.service.update_todolist(id, title).await)?;
        self.store.dispatch(Action::TodolistTitleChanged {
            id: id.to_string(),
            title: title.to_string(),
        });
        self.succeed();
        Ok(())
    }

    /// Local-only filter change; no-op for unknown ids.
    pub fn change_filter(&self, id: &str, filter: TaskFilter) -> bool {
        self.store.dispatch(Action::ChangeTodolistFilter {
            id: id.to_string(),
            filter,
        })
    }

    /// Local-only entity status change; no-op for unknown ids.
    pub fn set_entity_status(&self, id: &str, status: RequestStatus) -> bool {
        self.store.dispatch(Action::ChangeTodolistEntityStatus {
            id: id.to_string(),
            status,
        })
    }
}

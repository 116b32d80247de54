#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use todosync::backend::{
    BackendError, Empty, Envelope, GetTasksResponse, Item, Task, TaskPriority, TaskStatus, Todolist,
    TodolistService, UpdateTaskModel,
};
use todosync::store::{RequestStatus, Store};

pub fn todolist(id: &str, title: &str) -> Todolist {
    Todolist {
        id: id.to_string(),
        title: title.to_string(),
        added_date: "2024-03-01T10:00:00".to_string(),
        order: 0,
    }
}

pub fn task(todolist_id: &str, id: &str, title: &str) -> Task {
    Task {
        id: id.to_string(),
        todo_list_id: todolist_id.to_string(),
        title: title.to_string(),
        description: Some("from the farm".to_string()),
        status: TaskStatus::New,
        priority: TaskPriority::Middle,
        start_date: None,
        deadline: Some("2024-03-10T00:00:00".to_string()),
        order: 0,
        added_date: "2024-03-01T10:05:00".to_string(),
    }
}

/// Scriptable in-memory stand-in for the remote service.
#[derive(Default)]
pub struct FakeService {
    pub calls: Mutex<Vec<String>>,
    pub todolists: Mutex<Vec<Todolist>>,
    pub tasks: Mutex<HashMap<String, Vec<Task>>>,
    /// Every call fails at the transport level with this message.
    pub network_error: Mutex<Option<String>>,
    /// Every mutating call answers with this result code and messages.
    pub domain_error: Mutex<Option<(i32, Vec<String>)>>,
    /// Id given to the next created record.
    pub next_id: Mutex<Option<String>>,
    /// `error` field of task listings.
    pub listing_error: Mutex<Option<String>>,
    pub last_update: Mutex<Option<UpdateTaskModel>>,
    /// Store inspected while a todolist deletion is in flight.
    pub observed_store: Mutex<Option<Store>>,
    pub entity_status_during_delete: Mutex<Option<RequestStatus>>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todolists(todolists: Vec<Todolist>) -> Self {
        let service = Self::default();
        *service.todolists.lock().unwrap() = todolists;
        service
    }

    pub fn with_tasks(self, todolist_id: &str, tasks: Vec<Task>) -> Self {
        self.tasks.lock().unwrap().insert(todolist_id.to_string(), tasks);
        self
    }

    pub fn fail_network(&self, message: &str) {
        *self.network_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn fail_domain(&self, code: i32, messages: &[&str]) {
        *self.domain_error.lock().unwrap() = Some((code, messages.iter().map(|m| m.to_string()).collect()));
    }

    pub fn set_next_id(&self, id: &str) {
        *self.next_id.lock().unwrap() = Some(id.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(call);
        match self.network_error.lock().unwrap().clone() {
            Some(message) => Err(BackendError::Network(message)),
            None => Ok(()),
        }
    }

    fn envelope<T>(&self, data: T) -> Envelope<T> {
        match self.domain_error.lock().unwrap().clone() {
            Some((code, messages)) => Envelope::failure(code, messages),
            None => Envelope::success(data),
        }
    }

    fn take_id(&self, fallback: &str) -> String {
        self.next_id.lock().unwrap().take().unwrap_or_else(|| fallback.to_string())
    }
}

#[async_trait]
impl TodolistService for FakeService {
    async fn get_todolists(&self) -> Result<Vec<Todolist>, BackendError> {
        self.record("get_todolists".to_string())?;
        Ok(self.todolists.lock().unwrap().clone())
    }

    async fn create_todolist(&self, title: &str) -> Result<Envelope<Item<Todolist>>, BackendError> {
        self.record(format!("create_todolist {title}"))?;
        let item = todolist(&self.take_id("new-list"), title);
        Ok(self.envelope(Item { item }))
    }

    async fn delete_todolist(&self, id: &str) -> Result<Envelope<Empty>, BackendError> {
        if let Some(store) = self.observed_store.lock().unwrap().as_ref() {
            *self.entity_status_during_delete.lock().unwrap() = store.todolist(id).map(|t| t.entity_status);
        }
        self.record(format!("delete_todolist {id}"))?;
        Ok(self.envelope(Empty {}))
    }

    async fn update_todolist(&self, id: &str, title: &str) -> Result<Envelope<Empty>, BackendError> {
        self.record(format!("update_todolist {id} {title}"))?;
        Ok(self.envelope(Empty {}))
    }

    async fn get_tasks(&self, todolist_id: &str) -> Result<GetTasksResponse, BackendError> {
        self.record(format!("get_tasks {todolist_id}"))?;
        let items = self
            .tasks
            .lock()
            .unwrap()
            .get(todolist_id)
            .cloned()
            .unwrap_or_default();
        Ok(GetTasksResponse {
            error: self.listing_error.lock().unwrap().clone(),
            total_count: items.len() as u32,
            items,
        })
    }

    async fn create_task(&self, todolist_id: &str, title: &str) -> Result<Envelope<Item<Task>>, BackendError> {
        self.record(format!("create_task {todolist_id} {title}"))?;
        let item = task(todolist_id, &self.take_id("new-task"), title);
        Ok(self.envelope(Item { item }))
    }

    async fn delete_task(&self, todolist_id: &str, task_id: &str) -> Result<Envelope<Empty>, BackendError> {
        self.record(format!("delete_task {todolist_id} {task_id}"))?;
        Ok(self.envelope(Empty {}))
    }

    async fn update_task(
        &self,
        todolist_id: &str,
        task_id: &str,
        model: &UpdateTaskModel,
    ) -> Result<Envelope<Item<Task>>, BackendError> {
        self.record(format!("update_task {todolist_id} {task_id}"))?;
        *self.last_update.lock().unwrap() = Some(model.clone());
        let mut item = task(todolist_id, task_id, &model.title);
        item.description = model.description.clone();
        item.status = model.status;
        item.priority = model.priority;
        item.start_date = model.start_date.clone();
        item.deadline = model.deadline.clone();
        Ok(self.envelope(Item { item }))
    }
}

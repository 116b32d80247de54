//! Remote service abstraction for the todolist REST API.
//!
//! This module defines the interface the synchronization layer uses to talk to the
//! remote todolist service, along with the wire data types and error handling.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod http;

/// Transport-level failures: the request never produced a usable response.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{0}")]
    Network(String),

    #[error("Request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Backend error: {0}")]
    Other(String),
}

/// Result codes carried by the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    Error,
    Captcha,
    Unknown(i32),
}

impl From<i32> for ResultCode {
    fn from(code: i32) -> Self {
        match code {
            0 => ResultCode::Success,
            1 => ResultCode::Error,
            10 => ResultCode::Captcha,
            other => ResultCode::Unknown(other),
        }
    }
}

/// Validation error attached to a single request field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub error: String,
}

/// Uniform wrapper returned by every mutating call.
///
/// `data` is only meaningful on success. Rejections usually carry `{}` or nothing,
/// so failure envelopes hold `None`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub result_code: i32,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub fields_errors: Vec<FieldError>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Successful envelope around `data`.
    pub fn success(data: T) -> Self {
        Self {
            result_code: 0,
            messages: Vec::new(),
            fields_errors: Vec::new(),
            data: Some(data),
        }
    }

    /// Failed envelope carrying the given result code and messages.
    pub fn failure(result_code: i32, messages: Vec<String>) -> Self {
        Self {
            result_code,
            messages,
            fields_errors: Vec::new(),
            data: None,
        }
    }

    pub fn code(&self) -> ResultCode {
        ResultCode::from(self.result_code)
    }

    pub fn is_success(&self) -> bool {
        self.code() == ResultCode::Success
    }
}

impl Envelope<Value> {
    /// Decode the payload as `T` when the result code is a success.
    ///
    /// A missing or null payload decodes as `{}` so empty payloads need no `data` field.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Envelope<T>, serde_json::Error> {
        let data = if self.is_success() {
            let raw = self
                .data
                .filter(|data| !data.is_null())
                .unwrap_or_else(|| Value::Object(Default::default()));
            Some(serde_json::from_value(raw)?)
        } else {
            None
        };
        Ok(Envelope {
            result_code: self.result_code,
            messages: self.messages,
            fields_errors: self.fields_errors,
            data,
        })
    }
}

/// Payload of create calls: `{ "item": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item<T> {
    pub item: T,
}

/// Empty payload of delete and rename calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

/// Server-side todolist record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todolist {
    pub id: String,
    pub title: String,
    pub added_date: String,
    pub order: i64,
}

/// Task workflow status, numeric on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskStatus {
    #[default]
    New,
    InProgress,
    Completed,
    Draft,
}

impl TryFrom<u8> for TaskStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaskStatus::New),
            1 => Ok(TaskStatus::InProgress),
            2 => Ok(TaskStatus::Completed),
            3 => Ok(TaskStatus::Draft),
            other => Err(format!("unknown task status {other}")),
        }
    }
}

impl From<TaskStatus> for u8 {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::New => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
            TaskStatus::Draft => 3,
        }
    }
}

/// Task priority, numeric on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TaskPriority {
    #[default]
    Low,
    Middle,
    High,
    Urgent,
    Later,
}

impl TryFrom<u8> for TaskPriority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaskPriority::Low),
            1 => Ok(TaskPriority::Middle),
            2 => Ok(TaskPriority::High),
            3 => Ok(TaskPriority::Urgent),
            4 => Ok(TaskPriority::Later),
            other => Err(format!("unknown task priority {other}")),
        }
    }
}

impl From<TaskPriority> for u8 {
    fn from(priority: TaskPriority) -> Self {
        match priority {
            TaskPriority::Low => 0,
            TaskPriority::Middle => 1,
            TaskPriority::High => 2,
            TaskPriority::Urgent => 3,
            TaskPriority::Later => 4,
        }
    }
}

/// Server-side task record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub todo_list_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
    pub order: i64,
    pub added_date: String,
}

/// Partial task patch coming from the UI. Unset fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDomainTaskModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl UpdateDomainTaskModel {
    /// Overwrite the fields of `task` that are set in this patch.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(start_date) = &self.start_date {
            task.start_date = Some(start_date.clone());
        }
        if let Some(deadline) = &self.deadline {
            task.deadline = Some(deadline.clone());
        }
    }
}

/// Complete task model required by the remote update call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskModel {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub start_date: Option<String>,
    pub deadline: Option<String>,
}

impl UpdateTaskModel {
    /// Build the full update payload from the stored task with `patch` applied on top.
    pub fn merged(task: &Task, patch: &UpdateDomainTaskModel) -> Self {
        let mut merged = task.clone();
        patch.apply_to(&mut merged);
        Self {
            title: merged.title,
            description: merged.description,
            status: merged.status,
            priority: merged.priority,
            start_date: merged.start_date,
            deadline: merged.deadline,
        }
    }
}

/// Response of the task listing endpoint. Not enveloped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTasksResponse {
    pub error: Option<String>,
    #[serde(default)]
    pub total_count: u32,
    pub items: Vec<Task>,
}

/// Remote todolist service.
///
/// Every mutating call returns the service envelope; transport failures are
/// reported as [`BackendError`].
#[async_trait]
pub trait TodolistService: Send + Sync {
    // Todolists
    async fn get_todolists(&self) -> Result<Vec<Todolist>, BackendError>;
    async fn create_todolist(&self, title: &str) -> Result<Envelope<Item<Todolist>>, BackendError>;
    async fn delete_todolist(&self, id: &str) -> Result<Envelope<Empty>, BackendError>;
    async fn update_todolist(&self, id: &str, title: &str) -> Result<Envelope<Empty>, BackendError>;

    // Tasks
    async fn get_tasks(&self, todolist_id: &str) -> Result<GetTasksResponse, BackendError>;
    async fn create_task(&self, todolist_id: &str, title: &str) -> Result<Envelope<Item<Task>>, BackendError>;
    async fn delete_task(&self, todolist_id: &str, task_id: &str) -> Result<Envelope<Empty>, BackendError>;
    async fn update_task(
        &self,
        todolist_id: &str,
        task_id: &str,
        model: &UpdateTaskModel,
    ) -> Result<Envelope<Item<Task>>, BackendError>;
}

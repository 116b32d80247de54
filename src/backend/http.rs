//! REST implementation of [`TodolistService`] over `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{
    BackendError, Empty, Envelope, GetTasksResponse, Item, Task, Todolist, TodolistService, UpdateTaskModel,
};
use crate::config::ApiConfig;
use crate::constants::API_KEY_HEADER;

#[derive(Serialize)]
struct TitleBody<'a> {
    title: &'a str,
}

/// HTTP client for the todolist REST API.
#[derive(Clone, Debug)]
pub struct HttpService {
    client: Client,
    base_url: String,
}

impl HttpService {
    /// Create a new client for `base_url`.
    ///
    /// # Arguments
    /// * `base_url` - API root, e.g. `https://social-network.samuraijs.com/api/1.1/`
    /// * `api_key` - Optional key sent in the `API-KEY` header of every request
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, api_key: Option<&str>, timeout: Duration) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| BackendError::InvalidData(format!("invalid API key: {e}")))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| BackendError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the `[api]` configuration section, reading the key from its env var.
    pub fn from_config(config: &ApiConfig) -> Result<Self, BackendError> {
        let api_key = std::env::var(&config.api_key_env).ok().filter(|k| !k.is_empty());
        Self::new(
            &config.base_url,
            api_key.as_deref(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{method} {url}");
        self.client.request(method, url)
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(BackendError::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| BackendError::InvalidData(e.to_string()))
    }

    /// Like [`execute`](Self::execute), but reads the result code before the payload.
    async fn execute_envelope<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, BackendError> {
        let envelope: Envelope<Value> = self.execute(request).await?;
        envelope
            .decode()
            .map_err(|e| BackendError::InvalidData(e.to_string()))
    }
}

#[async_trait]
impl TodolistService for HttpService {
    async fn get_todolists(&self) -> Result<Vec<Todolist>, BackendError> {
        self.execute(self.request(Method::GET, "todo-lists")).await
    }

    async fn create_todolist(&self, title: &str) -> Result<Envelope<Item<Todolist>>, BackendError> {
        let request = self.request(Method::POST, "todo-lists").json(&TitleBody { title });
        self.execute_envelope(request).await
    }

    async fn delete_todolist(&self, id: &str) -> Result<Envelope<Empty>, BackendError> {
        self.execute_envelope(self.request(Method::DELETE, &format!("todo-lists/{id}"))).await
    }

    async fn update_todolist(&self, id: &str, title: &str) -> Result<Envelope<Empty>, BackendError> {
        let request = self
            .request(Method::PUT, &format!("todo-lists/{id}"))
            .json(&TitleBody { title });
        self.execute_envelope(request).await
    }

    async fn get_tasks(&self, todolist_id: &str) -> Result<GetTasksResponse, BackendError> {
        self.execute(self.request(Method::GET, &format!("todo-lists/{todolist_id}/tasks")))
            .await
    }

    async fn create_task(&self, todolist_id: &str, title: &str) -> Result<Envelope<Item<Task>>, BackendError> {
        let request = self
            .request(Method::POST, &format!("todo-lists/{todolist_id}/tasks"))
            .json(&TitleBody { title });
        self.execute_envelope(request).await
    }

    async fn delete_task(&self, todolist_id: &str, task_id: &str) -> Result<Envelope<Empty>, BackendError> {
        let path = format!("todo-lists/{todolist_id}/tasks/{task_id}");
        self.execute_envelope(self.request(Method::DELETE, &path)).await
    }

    async fn update_task(
        &self,
        todolist_id: &str,
        task_id: &str,
        model: &UpdateTaskModel,
    ) -> Result<Envelope<Item<Task>>, BackendError> {
        let request = self
            .request(Method::PUT, &format!("todo-lists/{todolist_id}/tasks/{task_id}"))
            .json(model);
        self.execute_envelope(request).await
    }
}

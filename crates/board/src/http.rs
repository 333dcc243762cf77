//! [`BoardApi`] over HTTP using [`reqwest`].

use async_trait::async_trait;
use kanban_core::task::TaskStatus;
use kanban_core::types::DbId;
use kanban_db::models::category::{Category, CreateCategory};
use kanban_db::models::task::{CreateTask, Task, UpdateTaskStatus};
use serde::de::DeserializeOwned;

use crate::api::BoardApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP client for the `/categories` and `/tasks` collections.
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    client: reqwest::Client,
    api_url: String,
}

impl HttpBoardApi {
    /// Build a client whose every request is bounded by the configured timeout.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    fn url(&self, collection: &str) -> String {
        format!("{}/{collection}", self.api_url)
    }

    // ---- private helpers ----

    /// Pass 2xx responses through; turn anything else into
    /// [`ClientError::Api`] using the body's `error` field when present.
    async fn ensure_success(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|json| json["error"].as_str().map(str::to_string))
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl BoardApi for HttpBoardApi {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        let response = self.client.get(self.url("categories")).send().await?;
        Self::parse_response(response).await
    }

    async fn create_category(&self, name: &str) -> ClientResult<Category> {
        let body = CreateCategory {
            name: name.to_string(),
        };
        let response = self
            .client
            .post(self.url("categories"))
            .json(&body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        let response = self.client.get(self.url("tasks")).send().await?;
        Self::parse_response(response).await
    }

    async fn create_task(&self, input: &CreateTask) -> ClientResult<Task> {
        let response = self
            .client
            .post(self.url("tasks"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn update_task_status(&self, id: DbId, status: TaskStatus) -> ClientResult<Task> {
        let body = UpdateTaskStatus {
            id: Some(id),
            status: Some(status.as_str().to_string()),
        };
        let response = self
            .client
            .patch(self.url("tasks"))
            .json(&body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    async fn delete_task(&self, id: DbId) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url("tasks"))
            .query(&[("id", id)])
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}

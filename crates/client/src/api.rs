//! REST client for the project API.
//!
//! Wraps the HTTP endpoints using [`reqwest`] and converts every project
//! between its wire form and the in-memory form.

use serde::de::DeserializeOwned;
use survey_core::types::DbId;

use crate::error::ClientError;
use crate::model::{Equipment, ImportSummary, Project, ProjectForm, ProjectWire, Status};

/// HTTP client for one API server.
#[derive(Debug, Clone)]
pub struct ProjectsApi {
    client: reqwest::Client,
    base_url: String,
}

impl ProjectsApi {
    /// Create a client for the server at `base_url`, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /api/projects`, most recently updated first.
    pub async fn get_all(&self) -> Result<Vec<Project>, ClientError> {
        let response = self.client.get(self.url("/api/projects")).send().await?;
        let wires: Vec<ProjectWire> = Self::parse_response(response).await?;
        wires
            .into_iter()
            .map(|wire| Project::try_from(wire).map_err(ClientError::from))
            .collect()
    }

    /// `GET /api/projects/{id}`
    pub async fn get_by_id(&self, id: DbId) -> Result<Project, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/projects/{id}")))
            .send()
            .await?;
        Self::parse_project(response).await
    }

    /// `POST /api/projects`
    pub async fn create(&self, form: &ProjectForm) -> Result<Project, ClientError> {
        let response = self
            .client
            .post(self.url("/api/projects"))
            .json(&form.to_create_body())
            .send()
            .await?;
        Self::parse_project(response).await
    }

    /// `PUT /api/projects/{id}` with the complete form.
    pub async fn update(&self, id: DbId, form: &ProjectForm) -> Result<Project, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/api/projects/{id}")))
            .json(&form.to_update_body())
            .send()
            .await?;
        Self::parse_project(response).await
    }

    /// `DELETE /api/projects/{id}`
    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/projects/{id}")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// `POST /api/projects/import` with spreadsheet rows.
    pub async fn import(&self, rows: &[serde_json::Value]) -> Result<ImportSummary, ClientError> {
        let body = serde_json::json!({ "projects": rows });
        let response = self
            .client
            .post(self.url("/api/projects/import"))
            .json(&body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /api/equipment`
    pub async fn list_equipment(&self) -> Result<Vec<Equipment>, ClientError> {
        let response = self.client.get(self.url("/api/equipment")).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /api/statuses`
    pub async fn list_statuses(&self) -> Result<Vec<Status>, ClientError> {
        let response = self.client.get(self.url("/api/statuses")).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or [`ClientError::Api`]
    /// with the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::debug!(status = status.as_u16(), %body, "API request failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn parse_project(response: reqwest::Response) -> Result<Project, ClientError> {
        let wire: ProjectWire = Self::parse_response(response).await?;
        Ok(Project::try_from(wire)?)
    }
}

#![allow(dead_code)]

//! Resume API client: the editor's only way to reach the enhance and save endpoints.
//!
//! `HttpResumeApi` speaks the JSON contract served by `routes::build_router`.
//! The editor depends on the `ResumeApi` trait, never on reqwest directly.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::enhance::enhancer::Section;
use crate::enhance::handlers::EnhanceResponse;
use crate::models::resume::ResumeData;
use crate::save::handlers::{SaveResponse, SavedResumeResponse};

const ENHANCE_PATH: &str = "/api/ai-enhance";
const SAVE_PATH: &str = "/api/save-resume";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Server reported failure: {0}")]
    Failed(String),
}

/// The two outbound calls the editor makes, plus the read-back of the
/// saved slot.
#[async_trait]
pub trait ResumeApi: Send + Sync {
    async fn enhance(&self, section: &Section, content: &str) -> Result<String, ClientError>;
    async fn save(&self, resume: &ResumeData) -> Result<SaveResponse, ClientError>;
    async fn fetch_saved(&self) -> Result<Option<Value>, ClientError>;
}

#[derive(Debug, Deserialize)]
struct FailureBody {
    error: String,
}

/// reqwest-backed `ResumeApi`. No retries and no timeout beyond reqwest's
/// defaults.
#[derive(Clone)]
pub struct HttpResumeApi {
    client: Client,
    base_url: String,
}

impl HttpResumeApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self::with_client(Client::builder().build()?, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turns a non-success response into a `ClientError`, preferring the
    /// server's `{ success: false, error }` message when present.
    async fn error_from(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!("Resume API returned {}: {}", status, body);
        let message = serde_json::from_str::<FailureBody>(&body)
            .map(|f| f.error)
            .unwrap_or(body);
        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl ResumeApi for HttpResumeApi {
    async fn enhance(&self, section: &Section, content: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .post(self.url(ENHANCE_PATH))
            .json(&json!({ "section": section, "content": content }))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Self::error_from(response).await);
        }

        let body: EnhanceResponse = response.json().await?;
        if !body.success {
            return Err(ClientError::Failed("enhancement was not applied".to_string()));
        }

        debug!(section = %section, "Enhancement received");
        Ok(body.enhanced_content)
    }

    async fn save(&self, resume: &ResumeData) -> Result<SaveResponse, ClientError> {
        let response = self
            .client
            .post(self.url(SAVE_PATH))
            .json(resume)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Self::error_from(response).await);
        }

        let body: SaveResponse = response.json().await?;
        if !body.success {
            return Err(ClientError::Failed(body.message));
        }

        debug!(resume_id = %body.resume_id, "Resume save acknowledged");
        Ok(body)
    }

    async fn fetch_saved(&self) -> Result<Option<Value>, ClientError> {
        let response = self.client.get(self.url(SAVE_PATH)).send().await?;

        if response.status() != StatusCode::OK {
            return Err(Self::error_from(response).await);
        }

        let body: SavedResumeResponse = response.json().await?;
        Ok(body.resume)
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;
use super::traits::ChatBackend;
use super::types::{ChatRequest, ChatResponse, Experience, Profile, Project, Skill};
use crate::app::ApiConfig;
use crate::constants::{
    CHAT_ENDPOINT, EXPERIENCES_ENDPOINT, HEALTH_CHECK_TIMEOUT_MS, HEALTH_ENDPOINT,
    PROFILE_ENDPOINT, PROJECTS_ENDPOINT, SKILLS_ENDPOINT,
};

/// HTTP-JSON client for the portfolio backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (e.g. `http://localhost:8000/api`).
    ///
    /// With `timeout` unset the transport default applies, which for reqwest
    /// means no deadline at all.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.base_url,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Server root, i.e. the base URL without its trailing `/api`
    fn root_url(&self) -> &str {
        self.base_url
            .strip_suffix("/api")
            .unwrap_or(&self.base_url)
    }

    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.fetch(PROFILE_ENDPOINT).await
    }

    pub async fn experiences(&self) -> Result<Vec<Experience>, ApiError> {
        self.fetch(EXPERIENCES_ENDPOINT).await
    }

    pub async fn projects(&self) -> Result<Vec<Project>, ApiError> {
        self.fetch(PROJECTS_ENDPOINT).await
    }

    pub async fn skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.fetch(SKILLS_ENDPOINT).await
    }

    /// Check whether the backend answers its health endpoint
    pub async fn is_reachable(&self) -> bool {
        let health_client = match Client::builder()
            .timeout(Duration::from_millis(HEALTH_CHECK_TIMEOUT_MS))
            .build()
        {
            Ok(client) => client,
            Err(_) => return false,
        };

        let url = format!("{}{}", self.root_url(), HEALTH_ENDPOINT);
        match health_client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Health check against {} failed: {}", url, e);
                false
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = status.canonical_reason().unwrap_or("Unknown Status");
            let detail = if body.trim().is_empty() {
                reason.to_string()
            } else {
                format!("{} {}", reason, body.trim())
            };
            return Err(ApiError::status(status.as_u16(), detail));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ChatBackend for ApiClient {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let url = self.url(CHAT_ENDPOINT);
        debug!(
            "POST {} (session: {})",
            url,
            request.session_id.as_deref().unwrap_or("new")
        );
        let response = self.client.post(&url).json(request).send().await?;
        Self::decode(response).await
    }
}

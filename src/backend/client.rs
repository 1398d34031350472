//! HTTP client for the yourOrbit backend

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::config::BackendConfig;

/// `GET /api/health` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub time: String,
}

/// `GET /api/job-app-tracker` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerStatus {
    pub message: String,
}

/// Text posted to the tracker endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSubmission {
    pub id: Uuid,
    pub text: String,
}

impl TextSubmission {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}

/// HTTP client for the yourOrbit backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "User-Agent",
            HeaderValue::from_static(concat!("yourorbit/", env!("CARGO_PKG_VERSION"))),
        );
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.url("/api/health");
        tracing::debug!("GET {}", url);
        let status = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?
            .error_for_status()?
            .json()
            .await
            .context("Unexpected health response")?;
        Ok(status)
    }

    pub async fn tracker(&self) -> Result<TrackerStatus> {
        let url = self.url("/api/job-app-tracker");
        tracing::debug!("GET {}", url);
        let status = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?
            .error_for_status()?
            .json()
            .await
            .context("Unexpected tracker response")?;
        Ok(status)
    }

    /// Post text to the tracker endpoint. No retry.
    pub async fn submit_text(&self, submission: &TextSubmission) -> Result<()> {
        let url = self.url("/api/job-app-tracker");
        tracing::debug!("POST {} ({})", url, submission.id);
        self.client
            .post(&url)
            .json(submission)
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?
            .error_for_status()?;
        Ok(())
    }
}

//! Where submitted job postings go

use anyhow::Result;
use std::future::Future;

use crate::backend::{BackendClient, TextSubmission};
use crate::config::{BackendConfig, SubmitMode};
use crate::intake::UploadedFile;

/// Destination for job postings submitted from the tracker page
pub trait Submitter {
    fn submit_text(&self, text: &str) -> impl Future<Output = Result<()>>;

    fn submit_files(&self, files: &[UploadedFile]) -> impl Future<Output = Result<()>>;

    fn name(&self) -> &'static str;
}

/// Logs submissions and accepts them
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    async fn submit_text(&self, text: &str) -> Result<()> {
        tracing::info!("Submitting text ({} chars)", text.chars().count());
        tracing::debug!("{}", text);
        Ok(())
    }

    async fn submit_files(&self, files: &[UploadedFile]) -> Result<()> {
        tracing::info!("Submitting {} file(s)", files.len());
        for file in files {
            tracing::debug!("  {} ({})", file.name, file.display_size());
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Posts text to the backend. Files have no storage yet and are only logged.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: BackendClient,
}

impl HttpSubmitter {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl Submitter for HttpSubmitter {
    async fn submit_text(&self, text: &str) -> Result<()> {
        let submission = TextSubmission::new(text);
        self.client.submit_text(&submission).await?;
        tracing::info!("Submitted {} to {}", submission.id, self.client.base_url());
        Ok(())
    }

    async fn submit_files(&self, files: &[UploadedFile]) -> Result<()> {
        tracing::warn!("File upload is not stored by the backend; {} file(s) only logged", files.len());
        LogSubmitter.submit_files(files).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Submitter picked from the `submit.mode` setting
#[derive(Debug, Clone)]
pub enum ConfiguredSubmitter {
    Log(LogSubmitter),
    Http(HttpSubmitter),
}

impl ConfiguredSubmitter {
    pub fn from_config(mode: SubmitMode, backend: &BackendConfig) -> Result<Self> {
        Ok(match mode {
            SubmitMode::Log => Self::Log(LogSubmitter),
            SubmitMode::Http => Self::Http(HttpSubmitter::new(BackendClient::new(backend)?)),
        })
    }
}

impl Submitter for ConfiguredSubmitter {
    async fn submit_text(&self, text: &str) -> Result<()> {
        match self {
            Self::Log(submitter) => submitter.submit_text(text).await,
            Self::Http(submitter) => submitter.submit_text(text).await,
        }
    }

    async fn submit_files(&self, files: &[UploadedFile]) -> Result<()> {
        match self {
            Self::Log(submitter) => submitter.submit_files(files).await,
            Self::Http(submitter) => submitter.submit_files(files).await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Log(submitter) => submitter.name(),
            Self::Http(submitter) => submitter.name(),
        }
    }
}

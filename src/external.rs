//! External task source.
//!
//! `/posts-with-external-data` enriches the post list with one fact fetched
//! from a third-party JSON resource. The fetch sits behind [`TaskSource`] so
//! tests can substitute a stub; the production implementation is
//! [`TodoClient`], a thin `reqwest` wrapper.

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Upstream requests that outlive this give up rather than hang a handler.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One record from the upstream to-do resource. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalTask {
    pub title: String,
}

/// Why an outbound fetch produced no task.
#[derive(Debug, Error)]
pub enum ExternalError {
    /// Connection, timeout, or body-decoding failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("Failed to fetch external data")]
    Upstream { status: StatusCode },
}

/// Where the enrichment fact comes from.
#[async_trait]
pub trait TaskSource: Send + Sync {
    async fn fetch_task(&self) -> Result<ExternalTask, ExternalError>;
}

/// Fetches the task from a fixed HTTP resource, unauthenticated.
pub struct TodoClient {
    client: Client,
    url: String,
}

impl TodoClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { client: Client::new(), url: url.into() }
    }
}

#[async_trait]
impl TaskSource for TodoClient {
    async fn fetch_task(&self) -> Result<ExternalTask, ExternalError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), url = %self.url, "external source answered non-success");
            return Err(ExternalError::Upstream { status: response.status() });
        }

        Ok(response.json::<ExternalTask>().await?)
    }
}

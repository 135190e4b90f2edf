//! Plain-text HTTP fetching for directory listings and descriptors

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{DEFAULT_TIMEOUT_MS, USER_AGENT};
use crate::version::error::RegistryError;

/// Fetches the body of a URL, treating "nothing there" as absence
#[async_trait::async_trait]
pub trait TextFetcher: Send + Sync {
    /// Returns the response body, or `None` when the URL has no content.
    ///
    /// Absence is not an error: callers move on to their next candidate.
    async fn fetch_text(&self, url: &str) -> Option<String>;
}

/// reqwest-backed fetcher
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// GET `url`, mapping 404/410 to `Ok(None)`
    pub async fn get(&self, url: &str) -> Result<Option<String>, RegistryError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::GONE {
            debug!("No content at {} ({})", url, status);
            return Ok(None);
        }

        if !status.is_success() {
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status {} for {}",
                status, url
            )));
        }

        let body = response.text().await?;
        Ok(Some(body))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }
}

#[async_trait::async_trait]
impl TextFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Option<String> {
        self.get(url)
            .await
            .inspect_err(|e| warn!("Failed to fetch {}: {}", url, e))
            .ok()
            .flatten()
            .filter(|body| !body.is_empty())
    }
}

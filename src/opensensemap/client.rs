use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::Config;
use crate::opensensemap::models::{BoxSensors, SenseBox};

/// A failed upstream fetch, classified by what went wrong.
///
/// Carries both an HTTP-equivalent status code and a human-readable message;
/// the two are always surfaced together in per-box error records.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("senseBox {0} not found on openSenseMap")]
    NotFound(String),

    #[error("openSenseMap rate limit exceeded, retry later")]
    RateLimited,

    #[error("openSenseMap unavailable (HTTP {0})")]
    Unavailable(u16),

    #[error("openSenseMap did not respond in time")]
    Timeout,

    #[error("cannot reach openSenseMap: {0}")]
    Connection(String),

    #[error("openSenseMap request failed: {0}")]
    Other(String),
}

impl UpstreamError {
    /// HTTP-equivalent status code recorded on per-box error results.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::RateLimited => 429,
            Self::Unavailable(_) => 502,
            Self::Timeout => 504,
            Self::Connection(_) => 503,
            Self::Other(_) => 500,
        }
    }
}

pub struct OsemClient {
    http_client: Client,
    base_url: String,
}

impl OsemClient {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.osem_timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: config.osem_base_url.clone(),
        }
    }

    /// Fetch metadata (name, location, sensor list) for one senseBox.
    ///
    /// # Errors
    ///
    /// Returns an `UpstreamError` classifying the failed fetch. A single
    /// failed attempt is terminal; no retries are performed.
    pub async fn get_box(&self, sensebox_id: &str) -> Result<SenseBox, UpstreamError> {
        let url = format!("{}/boxes/{}", self.base_url, sensebox_id);
        self.get_json(&url, sensebox_id).await
    }

    /// Fetch the latest per-sensor measurements for one senseBox.
    ///
    /// # Errors
    ///
    /// Returns an `UpstreamError` classifying the failed fetch.
    pub async fn get_box_sensors(&self, sensebox_id: &str) -> Result<BoxSensors, UpstreamError> {
        let url = format!("{}/boxes/{}/sensors", self.base_url, sensebox_id);
        self.get_json(&url, sensebox_id).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        sensebox_id: &str,
    ) -> Result<T, UpstreamError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound(sensebox_id.to_string()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(UpstreamError::RateLimited);
        }
        if status.is_server_error() {
            return Err(UpstreamError::Unavailable(status.as_u16()));
        }
        if !status.is_success() {
            return Err(UpstreamError::Other(format!("unexpected HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| UpstreamError::Other(format!("failed to parse response: {e}")))
    }
}

fn classify_transport(e: reqwest::Error) -> UpstreamError {
    if e.is_timeout() {
        UpstreamError::Timeout
    } else if e.is_connect() {
        UpstreamError::Connection(e.to_string())
    } else {
        UpstreamError::Other(format!("request failed: {e}"))
    }
}

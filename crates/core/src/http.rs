//! Shared HTTPS client used by every data source.

use reqwest::StatusCode;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::error::FetchError;

/// Thin wrapper around a `reqwest::Client` that only accepts `200 OK`.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build the client. Every request is bounded by `config.http_timeout`.
    pub fn new(config: &DashboardConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }

    /// GET `url` and return the body as text.
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Transport(format!("{} returned {}", url, status)));
        }

        response.text().await.map_err(FetchError::transport)
    }
}

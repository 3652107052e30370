//! HTTP client for the API server.

use reqwest::header::HeaderMap;
use reqwest::Method;
use tracing::{debug, warn};

use crate::config::{CONNECT_TIMEOUT, REQUEST_TIMEOUT};
use crate::error::{Error, Result};

/// HTTP client performing one round-trip per API call.
///
/// No retries and no recovery: every failure surfaces to the caller.
#[derive(Debug, Clone)]
pub struct DxHttpClient {
    client: reqwest::Client,
}

impl DxHttpClient {
    /// Create a new HTTP client with the standard timeouts.
    pub fn new() -> Self {
        let client = match reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
        {
            Ok(c) => c,
            Err(e) => {
                warn!("Failed to build HTTP client with custom config: {}; using defaults", e);
                reqwest::Client::default()
            }
        };

        Self { client }
    }

    /// Create with a custom reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Send one request and return the parsed JSON body.
    ///
    /// Success is exactly status 200; any other status is an
    /// [`Error::Api`] carrying the status code and the raw body text.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        headers: HeaderMap,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        debug!(%method, url, "Sending API request");

        let response = self
            .client
            .request(method, url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout
                } else {
                    Error::Network(e)
                }
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            let body_text = response.text().await.unwrap_or_default();
            warn!(status, "API request failed");
            return Err(Error::Api {
                status,
                body: body_text,
            });
        }

        let text = response.text().await.map_err(Error::Network)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Default for DxHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

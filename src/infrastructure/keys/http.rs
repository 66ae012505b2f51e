//! HTTP key source
//!
//! Fetches `<endpoint>/<user>.keys`, the plain-text format GitHub serves:
//! one public key per line.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::KeysConfig;
use crate::domain::ports::KeySource;
use crate::error::{BlueprintError, BlueprintResult};

/// [`KeySource`] backed by a blocking HTTP client
#[derive(Debug, Clone)]
pub struct HttpKeySource {
    client: Client,
    endpoint: String,
}

impl HttpKeySource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> BlueprintResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("blueprint/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BlueprintError::HttpClient(e.to_string()))?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Use a preconfigured client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &KeysConfig) -> BlueprintResult<Self> {
        Self::new(config.endpoint.clone(), Duration::from_secs(config.timeout_secs))
    }

    /// URL queried for `user`
    pub fn url_for(&self, user: &str) -> String {
        format!("{}/{}.keys", self.endpoint.trim_end_matches('/'), user)
    }
}

impl KeySource for HttpKeySource {
    fn fetch_keys(&self, user: &str) -> BlueprintResult<Vec<String>> {
        let url = self.url_for(user);
        tracing::debug!(%url, "fetching keys");

        let fetch_error = |e: reqwest::Error| BlueprintError::KeyFetch {
            user: user.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(&url).send().map_err(fetch_error)?;
        let status = response.status().as_u16();
        if is_failure_status(status) {
            return Err(BlueprintError::KeyFetchStatus {
                user: user.to_string(),
                status,
            });
        }

        let body = response.text().map_err(fetch_error)?;
        Ok(parse_keys(&body))
    }
}

/// Anything from 300 up is a failed lookup
fn is_failure_status(status: u16) -> bool {
    status >= 300
}

/// One key per non-blank line, trimmed
pub fn parse_keys(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

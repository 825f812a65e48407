//! HTTP client for the club analytics data provider.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{types::CompanyData, Error};

/// HTTP client for the analytics endpoint.
///
/// The provider exposes a single read-only document; there are no query
/// parameters and no pagination. Each request builds a fresh
/// `reqwest::Client` with a 30-second transport timeout. Fetching is a
/// single attempt: no retries and no background refresh.
pub struct Client {
    /// Base URL for the data provider. Defaults to `http://127.0.0.1:5000`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the provider's default bind address.
    pub fn new() -> Self {
        Self {
            base_api_url: "http://127.0.0.1:5000".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with
    /// wiremock and for deployments that serve the document elsewhere.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::ParseFailed
        })?;

        Ok(parsed)
    }

    /// Fetches the full analytics document.
    pub async fn get_all_data(&self) -> Result<CompanyData, Error> {
        self.get::<CompanyData>("/api/data/all").await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}

//! HTTP client for rollbook API.

pub mod health;
pub mod learners;

use crate::error::{ClientError, Result};

/// Default server URL when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// HTTP client for the rollbook API.
#[derive(Debug, Clone)]
pub struct RollbookClient {
    client: reqwest::Client,
    base_url: String,
}

impl RollbookClient {
    /// Create a new client with the given base URL.
    ///
    /// A trailing slash on the base URL is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a JSON body or turn an error status into a [`ClientError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let response = Self::check_status(response, resource).await?;
        response.json().await.map_err(ClientError::from)
    }

    /// Handle responses with no body (e.g. 204 on delete).
    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<()> {
        Self::check_status(response, resource).await.map(|_| ())
    }

    async fn check_status(
        response: reqwest::Response,
        resource: &str,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound {
                resource: resource.to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = RollbookClient::new("http://localhost:9000");

        assert_eq!(client.url("/learners"), "http://localhost:9000/learners");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = RollbookClient::new("http://localhost:9000/");

        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(client.url("/learners/1"), "http://localhost:9000/learners/1");
    }
}

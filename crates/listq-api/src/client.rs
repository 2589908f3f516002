//! HTTP client wrapper for list endpoints.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ApiError, Error, Result};
use crate::models::ListResponse;

/// Client for calling list/search endpoints.
#[derive(Clone)]
pub struct ListClient {
    token: Option<String>,
    http_client: reqwest::Client,
    base_url: String,
}

impl ListClient {
    /// Creates a new client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| Error::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(format!(
                "{base_url}: unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self {
            token: None,
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends `token` as a bearer token with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Returns the API token, if one is set.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Returns the base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page from a list endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - The endpoint path (e.g., "/api/records/v1/movies")
    /// * `query` - Query parameters, typically the filter and pagination pairs
    pub async fn list<T, Q>(&self, endpoint: &str, query: &Q) -> Result<ListResponse<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.get(endpoint, query).await
    }

    /// Performs a GET request with query parameters and decodes the JSON body.
    pub async fn get<T, Q>(&self, endpoint: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        tracing::debug!(%url, "GET");

        let mut request = self.http_client.get(&url).query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        self.handle_response(endpoint, response).await
    }

    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// Handles the HTTP response, converting it to our error types.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Response");

        if status.is_success() {
            let body = response.json::<T>().await?;
            return Ok(body);
        }

        Err(self.parse_error_response(endpoint, response).await)
    }

    /// Parses an error response into our error types.
    async fn parse_error_response(&self, endpoint: &str, response: reqwest::Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        // Try to get error message from body
        let message = response.text().await.unwrap_or_default();
        let message_or = |fallback: &str| {
            if message.is_empty() {
                fallback.to_string()
            } else {
                message.clone()
            }
        };

        let api_error = match status_code {
            401 | 403 => ApiError::Auth {
                message: message_or("Authentication failed"),
            },
            404 => ApiError::NotFound {
                path: endpoint.to_string(),
            },
            400 => ApiError::BadRequest {
                message: message_or("Bad request"),
            },
            _ => ApiError::Http {
                status: status_code,
                message: message_or(status.canonical_reason().unwrap_or("Unknown error")),
            },
        };

        Error::Api(api_error)
    }
}

impl fmt::Debug for ListClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListClient")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_client_new_trims_trailing_slash() {
        let client = ListClient::new("http://localhost:4000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000");
    }

    #[test]
    fn test_list_client_rejects_invalid_url() {
        assert!(matches!(
            ListClient::new("not a url"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            ListClient::new("ftp://example.com"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_list_client_stores_token() {
        let client = ListClient::new("http://localhost").unwrap();
        assert_eq!(client.token(), None);

        let client = client.with_token("my-secret-token");
        assert_eq!(client.token(), Some("my-secret-token"));
    }

    #[test]
    fn test_list_client_is_clone() {
        let client = ListClient::new("http://localhost").unwrap();
        let _cloned = client.clone();
        let _http_client = client.http_client();
    }

    #[test]
    fn test_list_client_debug_redacts_token() {
        let client = ListClient::new("http://localhost")
            .unwrap()
            .with_token("test-token");
        let debug_str = format!("{:?}", client);
        assert!(
            !debug_str.contains("test-token"),
            "Token should be redacted in debug output"
        );
    }

    #[test]
    fn test_url_joins_endpoint() {
        let client = ListClient::new("http://localhost:4000").unwrap();
        assert_eq!(client.url("/api/x"), "http://localhost:4000/api/x");
        assert_eq!(client.url("api/x"), "http://localhost:4000/api/x");
    }
}

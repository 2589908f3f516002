//! Error types for the list API client.

use thiserror::Error;

/// A specialized Result type for list API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP-level error with status code.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Authentication or authorization failure (401/403).
    #[error("Auth error: {message}")]
    Auth { message: String },

    /// The endpoint does not exist (404).
    #[error("not found: {path}")]
    NotFound { path: String },

    /// The server rejected the request, e.g. an unknown filter column (400).
    #[error("Bad request: {message}")]
    BadRequest { message: String },
}

impl ApiError {
    /// Returns the HTTP status code this error was created from.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Auth { .. } => None,
            ApiError::NotFound { .. } => Some(404),
            ApiError::BadRequest { .. } => Some(400),
        }
    }
}

/// Errors that can occur when calling a list endpoint.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Transport, TLS or response decoding failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The configured base URL cannot be used.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Returns the server error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

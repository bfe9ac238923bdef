//! HTTP client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// HTTP client errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network request failed
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Header name or value rejected by the HTTP layer
    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Invalid proxy configuration
    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),

    /// Non-2xx status; the message is the server's `message` field when it sent one
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Request body could not be serialized
    #[error("Failed to serialize request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// 2xx body could not be turned into the requested type
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// A middleware stage aborted the call
    #[error("Middleware '{stage}' failed: {message}")]
    Middleware { stage: String, message: String },

    /// Client build error
    #[error("Failed to build HTTP client: {0}")]
    BuildError(String),
}

impl HttpError {
    /// Status error with the generic `HTTP Error: <code>` message
    pub fn generic_status(status: StatusCode) -> Self {
        HttpError::Status {
            status,
            message: format!("HTTP Error: {}", status.as_u16()),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// True for `401 Unauthorized`
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// True for any 4xx status
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_client_error())
    }

    /// Build a middleware error for the named stage
    pub fn middleware(stage: impl Into<String>, message: impl std::fmt::Display) -> Self {
        HttpError::Middleware {
            stage: stage.into(),
            message: message.to_string(),
        }
    }
}

//! Authentication error types

use thiserror::Error;

/// Result type for credential and claims operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Credential storage and token decoding errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token decode error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("No refresh token available")]
    MissingRefreshToken,

    #[error("Request failed: {0}")]
    Http(#[from] yadwy_http::HttpError),
}

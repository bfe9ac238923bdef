//! API error types

use thiserror::Error;
use yadwy_auth::AuthError;
use yadwy_http::{HttpError, StatusCode};

/// API client errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport or status failure; displays the server message unchanged
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http(e) => e.status(),
            ApiError::Auth(AuthError::Http(e)) => e.status(),
            _ => None,
        }
    }

    /// The caller should send the user back to login
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
            || matches!(self, ApiError::Auth(AuthError::MissingRefreshToken))
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

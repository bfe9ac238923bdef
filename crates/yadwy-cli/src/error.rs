// CLI error types

use thiserror::Error;
use yadwy_api::ApiError;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<config::ConfigError> for CliError {
    fn from(e: config::ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(e: toml::ser::Error) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<yadwy_http::HttpError> for CliError {
    fn from(e: yadwy_http::HttpError) -> Self {
        CliError::Api(ApiError::Http(e))
    }
}

impl CliError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'yadwy --help' for usage information.",
                    message
                )
            }
            CliError::Io(e) => format!("File operation failed: {}", e),
            CliError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\nCheck ~/.config/yadwy/config.toml and YADWY_* variables.",
                    msg
                )
            }
            CliError::NotLoggedIn => {
                "You are not logged in.\n\nRun 'yadwy login' first.".to_string()
            }
            CliError::Api(e) if e.is_unauthorized() => {
                format!("{}\n\nYour session has ended. Run 'yadwy login' again.", e)
            }
            CliError::Api(e) => match e.status() {
                Some(status) => format!("Request failed ({}): {}", status.as_u16(), e),
                None => format!("Request failed: {}", e),
            },
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

pub type CliResult<T> = Result<T, CliError>;

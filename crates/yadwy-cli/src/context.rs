//! Everything a command needs to run

use std::sync::Arc;

use tracing::debug;
use yadwy_api::SellerApi;
use yadwy_auth::{CredentialStore, FileCredentialStore};

use crate::error::{CliError, CliResult};
use crate::output::OutputStyle;
use crate::settings::Settings;

pub struct AppContext {
    pub settings: Settings,
    pub api: SellerApi,
    pub style: OutputStyle,
}

impl AppContext {
    /// Credentials are read from and written to the configured file
    pub fn from_settings(settings: Settings) -> CliResult<Self> {
        let path = settings.credentials_path();
        debug!("using credentials file {}", path.display());
        Self::with_store(settings, Arc::new(FileCredentialStore::new(path)))
    }

    pub fn with_store(settings: Settings, store: Arc<dyn CredentialStore>) -> CliResult<Self> {
        if settings.api_url.is_none() {
            return Err(CliError::Config(
                "no API URL configured; set YADWY_API_URL or api_url in config.toml".to_string(),
            ));
        }
        let api = SellerApi::new(settings.http_config(), store)?;
        Ok(Self {
            settings,
            api,
            style: OutputStyle::default(),
        })
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// Fail early when there is no token to send at all
    pub fn require_login(&self) -> CliResult<()> {
        let token = self
            .api
            .store()
            .access_token()
            .map_err(yadwy_api::ApiError::from)?;
        match token {
            Some(_) => Ok(()),
            None => Err(CliError::NotLoggedIn),
        }
    }
}

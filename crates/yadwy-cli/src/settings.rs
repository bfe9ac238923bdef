//! Layered CLI settings
//!
//! Sources, lowest precedence first: built-in defaults, the TOML file at
//! `~/.config/yadwy/config.toml`, then `YADWY_*` environment variables
//! (`YADWY_API_URL`, `YADWY_TIMEOUT_SECS`, ...).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use yadwy_http::HttpConfig;

use crate::error::{CliError, CliResult};

pub const ENV_PREFIX: &str = "YADWY";
const APP_DIR: &str = "yadwy";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend base URL
    pub api_url: Option<String>,
    /// Where tokens are kept between runs
    pub credentials_path: Option<PathBuf>,
    pub timeout_secs: u64,
    /// Default page size for list commands
    pub page_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: None,
            credentials_path: None,
            timeout_secs: 30,
            page_size: 10,
        }
    }
}

impl Settings {
    /// `~/.config/yadwy`, or `./.yadwy` when there is no config dir
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(".").join(format!(".{}", APP_DIR)))
    }

    pub fn default_config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load from the default file and the process environment
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);
        Self::from_sources(&path, None)
    }

    /// Load from `path` and an environment map; `None` reads the real
    /// environment.
    pub fn from_sources(path: &Path, env: Option<HashMap<String, String>>) -> CliResult<Self> {
        let config = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.page_size == 0 {
            return Err(CliError::Config(
                "page_size must be greater than 0".to_string(),
            ));
        }
        if let Some(url) = &self.api_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(CliError::Config(format!(
                    "api_url must start with http:// or https://, got '{}'",
                    url
                )));
            }
        }
        Ok(())
    }

    pub fn credentials_path(&self) -> PathBuf {
        self.credentials_path
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("credentials.json"))
    }

    pub fn http_config(&self) -> HttpConfig {
        let mut config = HttpConfig::new().with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url.trim_end_matches('/'));
        }
        config
    }

    /// Effective settings as TOML
    pub fn to_toml(&self) -> CliResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

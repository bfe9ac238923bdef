// Show effective configuration

use crate::error::CliResult;
use crate::settings::Settings;

/// Runs without a backend, so it is not a [`super::Command`]
pub struct ConfigCommand;

impl ConfigCommand {
    /// Effective settings with defaults filled in, as TOML
    pub fn render(settings: &Settings) -> CliResult<String> {
        let effective = Settings {
            credentials_path: Some(settings.credentials_path()),
            ..settings.clone()
        };
        Ok(format!(
            "# {}\n{}",
            Settings::default_config_path().display(),
            effective.to_toml()?
        ))
    }

    pub fn execute(&self, settings: &Settings) -> CliResult<()> {
        print!("{}", Self::render(settings)?);
        Ok(())
    }
}

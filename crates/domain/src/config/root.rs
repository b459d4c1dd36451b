use serde::{Deserialize, Serialize};

use super::discovery::DiscoveryConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::ntp::NtpConfig;

/// Main configuration structure for probewire
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// NTP timestamp rendering
    #[serde(default)]
    pub ntp: NtpConfig,

    /// NAPTR discovery selection
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. probewire.toml in current directory
    /// 3. /etc/probewire/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(timezone) = overrides.timezone {
            self.ntp.timezone = timezone;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discovery.service.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Discovery service tag cannot be empty".to_string(),
            ));
        }

        self.ntp.display_zone()?;

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("probewire.toml").exists() {
            Some("probewire.toml".to_string())
        } else if std::path::Path::new("/etc/probewire/config.toml").exists() {
            Some("/etc/probewire/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub timezone: Option<String>,
}

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NtpConfig {
    /// Zone used to render parsed timestamps: `local`, `utc` or an IANA name.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for NtpConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl NtpConfig {
    pub fn display_zone(&self) -> Result<DisplayZone, ConfigError> {
        DisplayZone::parse(&self.timezone)
    }
}

/// Time zone a parsed NTP timestamp is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// Zone of the host environment.
    #[default]
    Local,
    Named(Tz),
}

impl DisplayZone {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(DisplayZone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") {
            return Ok(DisplayZone::Named(Tz::UTC));
        }
        trimmed.parse::<Tz>().map(DisplayZone::Named).map_err(|e| {
            ConfigError::Validation(format!("Unknown time zone '{}': {}", trimmed, e))
        })
    }
}

fn default_timezone() -> String {
    "local".to_string()
}

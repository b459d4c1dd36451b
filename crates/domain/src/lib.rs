//! Probewire Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, DiscoveryConfig, LoggingConfig, NtpConfig};
pub use dns_record::RecordType;
pub use errors::DomainError;

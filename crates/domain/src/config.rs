mod discovery;
mod errors;
mod logging;
mod ntp;
mod root;

pub use discovery::{DiscoveryConfig, SCION_DISCOVERY_SERVICE};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use ntp::{DisplayZone, NtpConfig};
pub use root::{CliOverrides, Config};

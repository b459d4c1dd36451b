use serde::{Deserialize, Serialize};

/// NAPTR service tag that marks a record as a discovery pointer.
pub const SCION_DISCOVERY_SERVICE: &str = "x-sciondiscovery:tcp";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Exact `services` value a NAPTR record must carry to be considered.
    #[serde(default = "default_service")]
    pub service: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            service: default_service(),
        }
    }
}

fn default_service() -> String {
    SCION_DISCOVERY_SERVICE.to_string()
}

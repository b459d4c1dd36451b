use probewire_domain::Config;
use probewire_infrastructure::{NtpCodec, ScbDiscoveryResolver};
use tracing::debug;

/// Codecs configured from the loaded [`Config`].
pub struct Codecs {
    pub ntp: NtpCodec,
    pub discovery: ScbDiscoveryResolver,
}

impl Codecs {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let zone = config.ntp.display_zone()?;
        let discovery = ScbDiscoveryResolver::from_config(&config.discovery);

        debug!(zone = ?zone, service = discovery.service(), "Codecs configured");

        Ok(Self {
            ntp: NtpCodec::new(zone),
            discovery,
        })
    }
}

pub mod packet;
pub mod timestamp;

use chrono::{DateTime, Utc};
use probewire_domain::config::DisplayZone;
use probewire_domain::DomainError;
use tracing::debug;

pub use packet::{LeapVersionMode, MIN_RESPONSE_LEN, NTP_PACKET_LEN};

/// Time probe codec: a bare client request out, a display timestamp back.
#[derive(Debug, Clone, Copy, Default)]
pub struct NtpCodec {
    zone: DisplayZone,
}

impl NtpCodec {
    pub fn new(zone: DisplayZone) -> Self {
        Self { zone }
    }

    pub fn build() -> [u8; NTP_PACKET_LEN] {
        packet::client_request()
    }

    /// Server transmit time from a response packet.
    pub fn timestamp(&self, response: &[u8]) -> Result<DateTime<Utc>, DomainError> {
        let seconds = packet::transmit_seconds(response)?;
        let header = LeapVersionMode::from_byte(response[0]);
        debug!(
            seconds,
            version = header.version,
            mode = header.mode,
            "NTP response parsed"
        );
        Ok(timestamp::from_ntp_seconds(seconds))
    }

    /// Server transmit time rendered in the codec's zone.
    pub fn parse(&self, response: &[u8]) -> Result<String, DomainError> {
        let instant = self.timestamp(response)?;
        Ok(timestamp::format_display(instant, self.zone))
    }
}

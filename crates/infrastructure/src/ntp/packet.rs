//! NTP packet layout
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |LI | VN  |Mode |    Stratum    |     Poll      |   Precision   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |            root delay / dispersion / reference id             |
//! |              reference / originate / receive ts               |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |              transmit timestamp, seconds (offset 40)          |
//! |              transmit timestamp, fraction (offset 44)         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

use probewire_domain::DomainError;

pub const NTP_PACKET_LEN: usize = 48;

pub const TRANSMIT_SECONDS_OFFSET: usize = 40;

/// Shortest response that still carries the transmit seconds field.
pub const MIN_RESPONSE_LEN: usize = TRANSMIT_SECONDS_OFFSET + 4;

/// First octet of an NTP packet: leap indicator, version number and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeapVersionMode {
    pub leap: u8,
    pub version: u8,
    pub mode: u8,
}

impl LeapVersionMode {
    /// No leap warning, version 3, client mode (`0x1b`).
    pub const CLIENT_V3: Self = Self {
        leap: 0,
        version: 3,
        mode: 3,
    };

    pub fn to_byte(self) -> u8 {
        ((self.leap & 0x03) << 6) | ((self.version & 0x07) << 3) | (self.mode & 0x07)
    }

    pub fn from_byte(byte: u8) -> Self {
        Self {
            leap: byte >> 6,
            version: (byte >> 3) & 0x07,
            mode: byte & 0x07,
        }
    }
}

/// Zero-filled client request. Servers stamp their own transmit time, so
/// the originate timestamp is left at zero.
pub fn client_request() -> [u8; NTP_PACKET_LEN] {
    let mut packet = [0u8; NTP_PACKET_LEN];
    packet[0] = LeapVersionMode::CLIENT_V3.to_byte();
    packet
}

/// Big-endian transmit seconds at offset 40.
pub fn transmit_seconds(packet: &[u8]) -> Result<u32, DomainError> {
    let field: [u8; 4] = packet
        .get(TRANSMIT_SECONDS_OFFSET..MIN_RESPONSE_LEN)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or_else(|| {
            DomainError::MalformedPacket(format!(
                "NTP response is {} bytes, need at least {}",
                packet.len(),
                MIN_RESPONSE_LEN
            ))
        })?;

    Ok(u32::from_be_bytes(field))
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed packet: {0}")]
    MalformedPacket(String),

    #[error("Failed to encode DNS query: {0}")]
    Encoding(String),

    #[error("Failed to decode DNS response: {0}")]
    Decoding(String),
}

impl DomainError {
    pub fn is_malformed_packet(&self) -> bool {
        matches!(self, DomainError::MalformedPacket(_))
    }

    pub fn is_encoding(&self) -> bool {
        matches!(self, DomainError::Encoding(_))
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, DomainError::Decoding(_))
    }
}

//! DNS Message Builder
//!
//! Constructs single-question DNS query messages in wire format using
//! `hickory-proto`. Both the address codec and the discovery resolver go
//! through here so their questions are encoded identically.

use super::record_type_map::RecordTypeMapper;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use probewire_domain::{DomainError, RecordType};
use std::str::FromStr;
use tracing::debug;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message and serialize to wire format bytes
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section, class IN
    ///
    /// The name is made fully qualified first, so `example.com` and
    /// `example.com.` produce the same question.
    pub fn build_query(domain: &str, record_type: &RecordType) -> Result<Vec<u8>, DomainError> {
        let (_, bytes) = Self::build_query_with_id(domain, record_type)?;
        Ok(bytes)
    }

    /// Build a query message and return both the message ID and bytes
    pub fn build_query_with_id(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        if !record_type.is_queryable() {
            return Err(DomainError::Encoding(format!(
                "Record type {} cannot be queried",
                record_type
            )));
        }

        let fqdn = Self::normalize_name(domain);
        let name = Name::from_str(&fqdn).map_err(|e| {
            DomainError::Encoding(format!("Invalid domain '{}': {}", domain, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(hickory_proto::rr::DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        debug!(domain = %fqdn, record_type = %record_type, id, len = bytes.len(), "DNS query built");
        Ok((id, bytes))
    }

    /// Append the root label unless the name already ends with one.
    pub fn normalize_name(domain: &str) -> String {
        let trimmed = domain.strip_suffix('.').unwrap_or(domain);
        format!("{}.", trimmed)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::Encoding(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

use super::forwarding::{AnswerRecord, MessageBuilder, ResponseParser};
use probewire_domain::{DomainError, RecordType};
use tracing::debug;

/// Address probe codec: builds A/AAAA questions and reads back the first answer.
pub struct DnsQueryCodec;

impl DnsQueryCodec {
    pub fn build_query(name: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
        MessageBuilder::build_query(name, &record_type)
    }

    /// Textual address of the first answer, if that answer is A or AAAA.
    ///
    /// Later answers are never looked at. An empty answer section or a first
    /// answer of any other type yields `None`.
    pub fn parse_answer_address(response_bytes: &[u8]) -> Result<Option<String>, DomainError> {
        let response = ResponseParser::parse(response_bytes)?;

        let Some(first) = response.first_answer() else {
            debug!("DNS response has no answers");
            return Ok(None);
        };

        match first {
            AnswerRecord::A(ip) => Ok(Some(ip.to_string())),
            // IPv4-mapped addresses print as dotted quad.
            AnswerRecord::AAAA(ip) => Ok(Some(match ip.to_ipv4_mapped() {
                Some(v4) => v4.to_string(),
                None => ip.to_string(),
            })),
            AnswerRecord::NAPTR(_) | AnswerRecord::Other(_) => {
                debug!(answer = %first, "First answer is not an address record");
                Ok(None)
            }
        }
    }
}

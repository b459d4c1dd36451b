use super::answer::AnswerRecord;
use hickory_proto::op::{Message, ResponseCode};
use probewire_domain::DomainError;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ParsedResponse {
    /// Answer section in wire order.
    pub answers: Vec<AnswerRecord>,
}

impl ParsedResponse {
    pub fn first_answer(&self) -> Option<&AnswerRecord> {
        self.answers.first()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<ParsedResponse, DomainError> {
        let message = Message::from_vec(response_bytes)
            .map_err(|e| DomainError::Decoding(format!("Failed to parse DNS response: {}", e)))?;

        let answers: Vec<AnswerRecord> = message
            .answers()
            .iter()
            .map(AnswerRecord::from_record)
            .collect();

        debug!(
            rcode = Self::rcode_to_status(message.response_code()),
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(ParsedResponse { answers })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_decoding_error() {
        let err = ResponseParser::parse(&[0xde, 0xad, 0xbe]).unwrap_err();
        assert!(err.is_decoding());
    }

    #[test]
    fn test_empty_input_is_decoding_error() {
        assert!(ResponseParser::parse(&[]).unwrap_err().is_decoding());
    }

    #[test]
    fn test_rcode_status_names() {
        assert_eq!(ResponseParser::rcode_to_status(ResponseCode::NoError), "NOERROR");
        assert_eq!(ResponseParser::rcode_to_status(ResponseCode::NXDomain), "NXDOMAIN");
    }
}

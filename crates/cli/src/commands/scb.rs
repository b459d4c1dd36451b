use super::render_optional;
use crate::di::Codecs;
use crate::payload;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ScbAction {
    /// Print a NAPTR query for a discovery zone as hex
    Build {
        /// Discovery zone name; a trailing dot is optional
        name: String,
    },

    /// Print the endpoint selected from a NAPTR response
    Parse {
        /// Response payload in hex, or `-` for raw bytes on stdin
        payload: String,
    },
}

pub fn run(action: ScbAction, codecs: &Codecs) -> anyhow::Result<String> {
    match action {
        ScbAction::Build { name } => {
            let bytes = codecs.discovery.build_query(&name)?;
            Ok(payload::encode_hex(&bytes))
        }
        ScbAction::Parse { payload } => {
            let bytes = payload::read_payload(&payload)?;
            Ok(render_optional(codecs.discovery.resolve(&bytes)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ABSENT;
    use hickory_proto::op::{Message, MessageType, OpCode};
    use hickory_proto::rr::rdata::NAPTR;
    use hickory_proto::rr::{Name, RData, Record};
    use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
    use probewire_domain::Config;
    use std::str::FromStr;

    fn naptr_response(records: &[(&str, &str, &str)]) -> String {
        let mut message = Message::new(7, MessageType::Response, OpCode::Query);
        for (service, flags, replacement) in records {
            let naptr = NAPTR::new(
                100,
                10,
                flags.as_bytes().to_vec().into_boxed_slice(),
                service.as_bytes().to_vec().into_boxed_slice(),
                Vec::new().into_boxed_slice(),
                Name::from_str(replacement).unwrap(),
            );
            message.add_answer(Record::from_rdata(
                Name::from_str("example.").unwrap(),
                60,
                RData::NAPTR(naptr),
            ));
        }

        let mut buf = Vec::new();
        message.emit(&mut BinEncoder::new(&mut buf)).unwrap();
        payload::encode_hex(&buf)
    }

    #[test]
    fn test_parse_prints_endpoint() {
        let codecs = Codecs::new(&Config::default()).unwrap();
        let hex = naptr_response(&[("x-sciondiscovery:tcp", "A", "boot1.example.")]);

        let out = run(ScbAction::Parse { payload: hex }, &codecs).unwrap();
        assert_eq!(out, "boot1.example.");
    }

    #[test]
    fn test_parse_prints_absent_marker() {
        let codecs = Codecs::new(&Config::default()).unwrap();
        let hex = naptr_response(&[("E2U+sip", "A", "sip.example.")]);

        let out = run(ScbAction::Parse { payload: hex }, &codecs).unwrap();
        assert_eq!(out, ABSENT);
    }

    #[test]
    fn test_configured_service_tag() {
        let mut config = Config::default();
        config.discovery.service = "E2U+sip".to_string();
        let codecs = Codecs::new(&config).unwrap();
        let hex = naptr_response(&[("E2U+sip", "A", "sip.example.")]);

        let out = run(ScbAction::Parse { payload: hex }, &codecs).unwrap();
        assert_eq!(out, "sip.example.");
    }
}

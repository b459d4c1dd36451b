use super::render_optional;
use crate::payload;
use clap::Subcommand;
use probewire_domain::RecordType;
use probewire_infrastructure::DnsQueryCodec;

#[derive(Subcommand)]
pub enum DnsAction {
    /// Print a single-question query as hex
    Build {
        /// Name to look up; a trailing dot is optional
        name: String,

        /// Record type: A, AAAA or NAPTR
        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: RecordType,
    },

    /// Print the address in the first answer of a response
    Parse {
        /// Response payload in hex, or `-` for raw bytes on stdin
        payload: String,
    },
}

pub fn run(action: DnsAction) -> anyhow::Result<String> {
    match action {
        DnsAction::Build { name, record_type } => {
            let bytes = DnsQueryCodec::build_query(&name, record_type)?;
            Ok(payload::encode_hex(&bytes))
        }
        DnsAction::Parse { payload } => {
            let bytes = payload::read_payload(&payload)?;
            Ok(render_optional(DnsQueryCodec::parse_answer_address(&bytes)?))
        }
    }
}

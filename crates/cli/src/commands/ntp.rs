use crate::di::Codecs;
use crate::payload;
use clap::Subcommand;
use probewire_infrastructure::NtpCodec;

#[derive(Subcommand)]
pub enum NtpAction {
    /// Print a 48-byte client request as hex
    Build,

    /// Print the server transmit time of a response
    Parse {
        /// Response payload in hex, or `-` for raw bytes on stdin
        payload: String,

        /// Print RFC 3339 UTC instead of the display format
        #[arg(long)]
        utc: bool,
    },
}

pub fn run(action: NtpAction, codecs: &Codecs) -> anyhow::Result<String> {
    match action {
        NtpAction::Build => Ok(payload::encode_hex(&NtpCodec::build())),
        NtpAction::Parse { payload, utc } => {
            let bytes = payload::read_payload(&payload)?;
            if utc {
                Ok(codecs.ntp.timestamp(&bytes)?.to_rfc3339())
            } else {
                Ok(codecs.ntp.parse(&bytes)?)
            }
        }
    }
}

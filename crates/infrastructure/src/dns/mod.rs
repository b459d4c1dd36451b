pub mod discovery;
pub mod forwarding;
pub mod query_codec;

pub use discovery::ScbDiscoveryResolver;
pub use forwarding::{AnswerRecord, MessageBuilder, NaptrRecord, ParsedResponse, ResponseParser};
pub use query_codec::DnsQueryCodec;

pub mod answer;
pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;

pub use answer::{AnswerRecord, NaptrRecord};
pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::{ParsedResponse, ResponseParser};

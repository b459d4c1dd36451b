use hickory_proto::rr::rdata::NAPTR;
use hickory_proto::rr::{RData, Record};
use probewire_domain::RecordType;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// One answer-section record, reduced to what the probe codecs inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerRecord {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NAPTR(NaptrRecord),
    /// Any other record, by its wire type code.
    Other(u16),
}

impl AnswerRecord {
    pub fn from_record(record: &Record) -> Self {
        match record.data() {
            RData::A(a) => AnswerRecord::A(a.0),
            RData::AAAA(aaaa) => AnswerRecord::AAAA(aaaa.0),
            RData::NAPTR(naptr) => AnswerRecord::NAPTR(NaptrRecord::from(naptr)),
            _ => AnswerRecord::Other(u16::from(record.record_type())),
        }
    }

    pub fn type_code(&self) -> u16 {
        match self {
            AnswerRecord::A(_) => RecordType::A.to_u16(),
            AnswerRecord::AAAA(_) => RecordType::AAAA.to_u16(),
            AnswerRecord::NAPTR(_) => RecordType::NAPTR.to_u16(),
            AnswerRecord::Other(code) => *code,
        }
    }
}

impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerRecord::A(ip) => write!(f, "A {}", ip),
            AnswerRecord::AAAA(ip) => write!(f, "AAAA {}", ip),
            AnswerRecord::NAPTR(naptr) => write!(f, "NAPTR {}", naptr),
            AnswerRecord::Other(code) => match RecordType::from_u16(*code) {
                Some(rt) => write!(f, "{}", rt),
                None => write!(f, "TYPE{}", code),
            },
        }
    }
}

/// NAPTR rdata with the character-strings decoded as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaptrRecord {
    pub order: u16,
    pub preference: u16,
    pub flags: String,
    pub service: String,
    pub regexp: String,
    /// Presentation form as on the wire: fully qualified, IDN labels left as punycode.
    pub replacement: String,
}

impl From<&NAPTR> for NaptrRecord {
    fn from(naptr: &NAPTR) -> Self {
        Self {
            order: naptr.order(),
            preference: naptr.preference(),
            flags: String::from_utf8_lossy(naptr.flags()).into_owned(),
            service: String::from_utf8_lossy(naptr.services()).into_owned(),
            regexp: String::from_utf8_lossy(naptr.regexp()).into_owned(),
            replacement: naptr.replacement().to_ascii(),
        }
    }
}

impl fmt::Display for NaptrRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} \"{}\" \"{}\" \"{}\" {}",
            self.order, self.preference, self.flags, self.service, self.regexp, self.replacement
        )
    }
}

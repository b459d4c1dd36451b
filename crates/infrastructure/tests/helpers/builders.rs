#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, AAAA, MX, NAPTR};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

pub const DISCOVERY_SERVICE: &str = "x-sciondiscovery:tcp";

/// Hand-built DNS responses for feeding the codecs.
pub struct ResponseBuilder {
    owner: Name,
    message: Message,
}

impl ResponseBuilder {
    pub fn new(domain: &str, query_type: RecordType) -> Self {
        let owner = Name::from_str(domain).unwrap();

        let mut query = Query::new();
        query.set_name(owner.clone());
        query.set_query_type(query_type);
        query.set_query_class(hickory_proto::rr::DNSClass::IN);

        let mut message = Message::new(0x4242, MessageType::Response, OpCode::Query);
        message.set_recursion_desired(true);
        message.set_recursion_available(true);
        message.add_query(query);

        Self { owner, message }
    }

    pub fn a(self, ip: &str) -> Self {
        let ip = Ipv4Addr::from_str(ip).unwrap();
        self.answer(RData::A(A(ip)))
    }

    pub fn aaaa(self, ip: &str) -> Self {
        let ip = Ipv6Addr::from_str(ip).unwrap();
        self.answer(RData::AAAA(AAAA(ip)))
    }

    pub fn mx(self, preference: u16, exchange: &str) -> Self {
        let exchange = Name::from_str(exchange).unwrap();
        self.answer(RData::MX(MX::new(preference, exchange)))
    }

    pub fn naptr(self, service: &str, flags: &str, replacement: &str) -> Self {
        self.naptr_ordered(100, 10, service, flags, replacement)
    }

    pub fn naptr_ordered(
        self,
        order: u16,
        preference: u16,
        service: &str,
        flags: &str,
        replacement: &str,
    ) -> Self {
        let naptr = NAPTR::new(
            order,
            preference,
            flags.as_bytes().to_vec().into_boxed_slice(),
            service.as_bytes().to_vec().into_boxed_slice(),
            Vec::new().into_boxed_slice(),
            Name::from_str(replacement).unwrap(),
        );
        self.answer(RData::NAPTR(naptr))
    }

    fn answer(mut self, rdata: RData) -> Self {
        let record = Record::from_rdata(self.owner.clone(), 300, rdata);
        self.message.add_answer(record);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        self.message.emit(&mut encoder).unwrap();
        buf
    }
}

use hickory_proto::op::Message;
use probewire_domain::RecordType;
use probewire_infrastructure::dns::forwarding::MessageBuilder;

#[test]
fn test_build_a_query() {
    let bytes = MessageBuilder::build_query("google.com", &RecordType::A).unwrap();

    assert!(
        bytes.len() >= 12,
        "DNS message too short: {} bytes",
        bytes.len()
    );
    assert_eq!(bytes[2] & 0x01, 0x01, "RD flag should be set");
}

#[test]
fn test_single_question() {
    let bytes = MessageBuilder::build_query("example.com", &RecordType::NAPTR).unwrap();

    // QDCOUNT=1, ANCOUNT=NSCOUNT=ARCOUNT=0
    assert_eq!(&bytes[4..12], &[0, 1, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_query_id_uniqueness() {
    let mut ids = std::collections::HashSet::new();

    for _ in 0..100 {
        let (id, _) = MessageBuilder::build_query_with_id("test.com", &RecordType::A).unwrap();
        ids.insert(id);
    }

    assert!(ids.len() > 50, "Should generate varied IDs");
}

#[test]
fn test_query_with_id_different_domains() {
    let domains = vec!["google.com", "cloudflare.com", "example.com"];

    for domain in domains {
        let (id, bytes) = MessageBuilder::build_query_with_id(domain, &RecordType::A).unwrap();
        let wire_id = u16::from_be_bytes([bytes[0], bytes[1]]);
        assert_eq!(wire_id, id);
    }
}

#[test]
fn test_domain_with_hyphen() {
    let result = MessageBuilder::build_query("my-domain.com", &RecordType::A);
    assert!(result.is_ok());
}

#[test]
fn test_single_label_domain() {
    let bytes = MessageBuilder::build_query("localhost", &RecordType::A).unwrap();
    let message = Message::from_vec(&bytes).unwrap();
    assert_eq!(message.queries()[0].name().to_ascii(), "localhost.");
}

#[test]
fn test_root_name() {
    let bytes = MessageBuilder::build_query(".", &RecordType::NAPTR).unwrap();
    let message = Message::from_vec(&bytes).unwrap();
    assert!(message.queries()[0].name().is_root());
}

#[test]
fn test_label_too_long() {
    let domain = format!("{}.com", "x".repeat(64));
    let err = MessageBuilder::build_query(&domain, &RecordType::A).unwrap_err();
    assert!(err.is_encoding());
}

#[test]
fn test_queryable_types_build() {
    for rt in [RecordType::A, RecordType::AAAA, RecordType::NAPTR] {
        let result = MessageBuilder::build_query("example.com", &rt);
        assert!(result.is_ok(), "Failed to build query for {:?}", rt);
    }
}

#[test]
fn test_other_types_rejected() {
    for rt in [RecordType::MX, RecordType::TXT, RecordType::SOA, RecordType::CNAME] {
        let err = MessageBuilder::build_query("example.com", &rt).unwrap_err();
        assert!(err.is_encoding(), "{:?} should not be queryable", rt);
    }
}

use probewire_domain::RecordType;
use std::str::FromStr;

#[test]
fn test_wire_codes() {
    assert_eq!(RecordType::A.to_u16(), 1);
    assert_eq!(RecordType::AAAA.to_u16(), 28);
    assert_eq!(RecordType::NAPTR.to_u16(), 35);
    assert_eq!(RecordType::from_u16(35), Some(RecordType::NAPTR));
    assert_eq!(RecordType::from_u16(257), None);
}

#[test]
fn test_from_str_case_insensitive() {
    assert_eq!(RecordType::from_str("naptr").unwrap(), RecordType::NAPTR);
    assert_eq!(RecordType::from_str("Aaaa").unwrap(), RecordType::AAAA);
    assert!(RecordType::from_str("BOGUS").is_err());
}

#[test]
fn test_only_probe_types_are_queryable() {
    assert!(RecordType::A.is_queryable());
    assert!(RecordType::AAAA.is_queryable());
    assert!(RecordType::NAPTR.is_queryable());
    assert!(!RecordType::MX.is_queryable());
    assert!(!RecordType::TXT.is_queryable());
}

#[test]
fn test_display_matches_as_str() {
    assert_eq!(RecordType::NAPTR.to_string(), "NAPTR");
    assert_eq!(RecordType::AAAA.to_string(), RecordType::AAAA.as_str());
}

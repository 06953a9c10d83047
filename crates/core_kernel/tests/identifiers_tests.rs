//! Tests for the fund identifier type

use core_kernel::FundId;

#[test]
fn test_ordering_follows_raw_value() {
    let mut ids = vec![FundId::new(3), FundId::new(1), FundId::new(2)];
    ids.sort();
    assert_eq!(ids, vec![FundId::new(1), FundId::new(2), FundId::new(3)]);
}

#[test]
fn test_raw_conversion() {
    let id = FundId::from(99);
    let raw: i64 = id.into();
    assert_eq!(raw, 99);
    assert_eq!(id.value(), 99);
}

#[test]
fn test_serializes_as_plain_number() {
    let json = serde_json::to_string(&FundId::new(5)).unwrap();
    assert_eq!(json, "5");

    let back: FundId = serde_json::from_str("12").unwrap();
    assert_eq!(back, FundId::new(12));
}

#[test]
fn test_parse_rejects_non_numeric() {
    assert!("FND-1".parse::<FundId>().is_err());
    assert!("".parse::<FundId>().is_err());
}

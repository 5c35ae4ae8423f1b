//! Tests for per-kind cell decoding

use chrono::NaiveDate;

use super::super::field_parsers::{decode_value, parse_date};
use crate::app::models::{FieldSpec, Value};
use crate::Error;

fn midnight(year: i32, month: u32, day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn test_string_identity() {
    let spec = FieldSpec::new("NAME", "S", 20, 0);
    assert_eq!(
        decode_value(&spec, "USA STANDARD").unwrap(),
        Value::String("USA STANDARD".to_string())
    );
}

#[test]
fn test_unknown_tag_falls_back_to_string() {
    let spec = FieldSpec::new("FLAG", "Q", 1, 0);
    assert_eq!(
        decode_value(&spec, "42").unwrap(),
        Value::String("42".to_string())
    );
}

#[test]
fn test_integer_decode() {
    let spec = FieldSpec::new("COUNT", "N", 5, 0);
    assert_eq!(decode_value(&spec, "123").unwrap(), Value::Integer(123));
    assert_eq!(decode_value(&spec, "-7").unwrap(), Value::Integer(-7));
}

#[test]
fn test_wide_numeric_decodes_as_float() {
    // Width above 10 selects the float decode even for integer-looking text
    let spec = FieldSpec::new("MCAP", "N", 12, 0);
    assert_eq!(decode_value(&spec, "42").unwrap(), Value::Float(42.0));
}

#[test]
fn test_decimal_numeric_decodes_as_float() {
    let spec = FieldSpec::new("PRICE", "N", 8, 4);
    assert_eq!(
        decode_value(&spec, "1234.5678").unwrap(),
        Value::Float(1234.5678)
    );
}

#[test]
fn test_integer_decode_failure() {
    let spec = FieldSpec::new("COUNT", "N", 5, 0);
    let err = decode_value(&spec, "abc").unwrap_err();
    match err {
        Error::Decode { column, value, .. } => {
            assert_eq!(column, "COUNT");
            assert_eq!(value, "abc");
        }
        other => panic!("expected Decode error, got {:?}", other),
    }
}

#[test]
fn test_float_decode_failure() {
    let spec = FieldSpec::new("PRICE", "N", 12, 4);
    assert!(decode_value(&spec, "n/a").is_err());
}

#[test]
fn test_date_decode() {
    let spec = FieldSpec::new("ASOF", "D", 10, 0);
    assert_eq!(
        decode_value(&spec, "2023-01-31").unwrap(),
        Value::Date(midnight(2023, 1, 31))
    );
}

#[test]
fn test_date_decode_failure() {
    let spec = FieldSpec::new("ASOF", "D", 10, 0);
    let err = decode_value(&spec, "yesterday").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_parse_date_common_forms() {
    assert_eq!(parse_date("2023-01-31"), Some(midnight(2023, 1, 31)));
    assert_eq!(parse_date("20230131"), Some(midnight(2023, 1, 31)));
    assert_eq!(parse_date("01/31/2023"), Some(midnight(2023, 1, 31)));
    assert_eq!(parse_date("31-Jan-2023"), Some(midnight(2023, 1, 31)));
}

#[test]
fn test_parse_date_datetime_forms() {
    let expected = NaiveDate::from_ymd_opt(2023, 1, 31)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();

    assert_eq!(parse_date("2023-01-31 09:30:00"), Some(expected));
    assert_eq!(parse_date("2023-01-31T09:30:00"), Some(expected));
}

#[test]
fn test_parse_date_rejects_garbage() {
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("not a date"), None);
    assert_eq!(parse_date("2023-13-01"), None);
}

//! Tests for metadata header assembly

use super::super::header::SchemaBuilder;
use crate::app::models::FieldKind;
use crate::Error;

#[test]
fn test_field_count_line() {
    let mut builder = SchemaBuilder::new();
    builder.ingest("#3").unwrap();

    assert!(builder.started());
    assert_eq!(builder.declared_count(), Some(3));
    assert_eq!(builder.fields_collected(), 0);
    assert!(!builder.is_complete());
}

#[test]
fn test_field_count_with_trailing_text() {
    // Only the first whitespace token of the first definition line counts
    let mut builder = SchemaBuilder::new();
    builder.ingest("#2   attributes follow").unwrap();

    assert_eq!(builder.declared_count(), Some(2));
}

#[test]
fn test_definition_lines_use_last_four_tokens() {
    let mut builder = SchemaBuilder::new();
    builder.ingest("#1").unwrap();
    builder.ingest("#  17  PRICE  N  12  4").unwrap();

    assert!(builder.is_complete());
    let schema = builder.finish().unwrap();
    let field = schema.field("PRICE").unwrap();

    assert_eq!(field.kind, FieldKind::Float);
    assert_eq!(field.width, 12);
    assert_eq!(field.decimal_len, 4);
}

#[test]
fn test_complete_header() {
    let mut builder = SchemaBuilder::new();
    builder.ingest("#2").unwrap();
    builder.ingest("# 1 NAME  S 20 0").unwrap();
    assert!(!builder.is_complete());

    builder.ingest("# 2 VALUE N 5 0").unwrap();
    assert!(builder.is_complete());

    let schema = builder.finish().unwrap();
    assert_eq!(schema.field_names(), vec!["NAME", "VALUE"]);
    assert_eq!(schema.field("VALUE").unwrap().kind, FieldKind::Integer);
}

#[test]
fn test_bad_field_count_token() {
    let mut builder = SchemaBuilder::new();
    let err = builder.ingest("#lots").unwrap_err();
    assert!(matches!(err, Error::Metadata { .. }));
}

#[test]
fn test_empty_definition_line() {
    let mut builder = SchemaBuilder::new();
    assert!(builder.ingest("#").is_err());
}

#[test]
fn test_short_definition_line() {
    let mut builder = SchemaBuilder::new();
    builder.ingest("#2").unwrap();

    let err = builder.ingest("# NAME S 20").unwrap_err();
    assert!(matches!(err, Error::Metadata { .. }));
}

#[test]
fn test_non_integer_width_and_decimals() {
    let mut builder = SchemaBuilder::new();
    builder.ingest("#2").unwrap();

    assert!(builder.ingest("# 1 NAME S wide 0").is_err());
    assert!(builder.ingest("# 1 NAME S 20 none").is_err());
}

#[test]
fn test_duplicate_field_name() {
    let mut builder = SchemaBuilder::new();
    builder.ingest("#2").unwrap();
    builder.ingest("# 1 NAME S 20 0").unwrap();

    let err = builder.ingest("# 2 NAME N 5 0").unwrap_err();
    assert!(matches!(err, Error::Metadata { .. }));
}

#[test]
fn test_finish_without_definitions() {
    let builder = SchemaBuilder::new();
    assert!(builder.finish().is_err());
}

#[test]
fn test_finish_incomplete() {
    let mut builder = SchemaBuilder::new();
    builder.ingest("#3").unwrap();
    builder.ingest("# 1 NAME S 20 0").unwrap();

    let err = builder.finish().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("declared 3"));
    assert!(message.contains("only 1"));
}

#[test]
fn test_surplus_definitions_rejected() {
    let mut builder = SchemaBuilder::new();
    builder.ingest("#1").unwrap();
    builder.ingest("# 1 NAME S 20 0").unwrap();

    assert!(builder.ingest("# 2 EXTRA S 20 0").is_err());
}

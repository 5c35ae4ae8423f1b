//! Cell decoding for index file records.
//!
//! This module provides the decode functions behind each
//! [`FieldKind`](crate::FieldKind): identity strings, integers, floats,
//! and calendar dates accepted in several common textual forms.

use chrono::{NaiveDate, NaiveDateTime};

use crate::app::models::{FieldKind, FieldSpec, Value};
use crate::constants::{DATETIME_FORMATS, DATE_FORMATS};
use crate::{Error, Result};

/// Decode one present cell against its field's declared kind.
///
/// Absent cells never reach this function; callers keep them as the
/// absent marker regardless of column type.
pub fn decode_value(spec: &FieldSpec, raw: &str) -> Result<Value> {
    match spec.kind {
        FieldKind::String | FieldKind::Fallback => Ok(Value::String(raw.to_string())),
        FieldKind::Integer => decode_integer(spec, raw),
        FieldKind::Float => decode_float(spec, raw),
        FieldKind::Date => decode_date(spec, raw),
    }
}

/// Decode an integer cell
fn decode_integer(spec: &FieldSpec, raw: &str) -> Result<Value> {
    raw.parse::<i64>()
        .map(Value::Integer)
        .map_err(|e| Error::decode(&spec.name, raw, format!("invalid integer: {}", e)))
}

/// Decode a floating-point cell
fn decode_float(spec: &FieldSpec, raw: &str) -> Result<Value> {
    raw.parse::<f64>()
        .map(Value::Float)
        .map_err(|e| Error::decode(&spec.name, raw, format!("invalid number: {}", e)))
}

/// Decode a date cell via the accepted textual representations
fn decode_date(spec: &FieldSpec, raw: &str) -> Result<Value> {
    parse_date(raw).map(Value::Date).ok_or_else(|| {
        Error::decode(
            &spec.name,
            raw,
            "not a recognized date or datetime representation",
        )
    })
}

/// Parse a textual date or datetime.
///
/// Datetime forms are tried first; date-only forms resolve to midnight.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

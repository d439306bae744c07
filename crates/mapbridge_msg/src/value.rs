//! Typed field-extraction helpers over [`serde_json::Value`].
//!
//! These are the building blocks for [`Messageable`](crate::Messageable)
//! `from_message` implementations: each helper either yields the requested
//! shape or reports exactly which field was missing or mistyped.

use crate::error::{MsgError, Result};
use serde_json::{Map, Value};

/// View a message as a key-value map.
pub fn as_map<'a>(value: &'a Value, name: &'static str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or(MsgError::InvalidField {
        field: name,
        expected: "map",
    })
}

/// Look up a required field in a message map.
pub fn field<'a>(map: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value> {
    map.get(name).ok_or(MsgError::MissingField(name))
}

/// Extract a required string field.
pub fn str_field<'a>(map: &'a Map<String, Value>, name: &'static str) -> Result<&'a str> {
    field(map, name)?.as_str().ok_or(MsgError::InvalidField {
        field: name,
        expected: "string",
    })
}

/// Extract a required numeric field as `f64`.
///
/// Integral JSON numbers are accepted; the platform channel encodes whole
/// floats without a fractional part.
pub fn f64_field(map: &Map<String, Value>, name: &'static str) -> Result<f64> {
    field(map, name)?.as_f64().ok_or(MsgError::InvalidField {
        field: name,
        expected: "number",
    })
}

/// Extract a required sub-message field as a map.
pub fn map_field<'a>(
    map: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Map<String, Value>> {
    as_map(field(map, name)?, name)
}

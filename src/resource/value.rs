//! Typed scalar values carried by simple and primitive multi-valued attributes.
//!
//! Values are kept as semantic scalars rather than raw wire strings so that
//! equality and comparison follow the declared data type: two date-times
//! denoting the same instant are equal regardless of their offsets.

use crate::error::{ScimError, ScimResult};
use crate::schema::DataType;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Number, Value};
use std::fmt;

/// A single scalar attribute value, tagged with its SCIM data type.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    String(String),
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
    DateTime(DateTime<Utc>),
    Binary(Vec<u8>),
    Reference(String),
}

impl ScalarValue {
    /// The SCIM data type of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            ScalarValue::String(_) => DataType::String,
            ScalarValue::Boolean(_) => DataType::Boolean,
            ScalarValue::Integer(_) => DataType::Integer,
            ScalarValue::Decimal(_) => DataType::Decimal,
            ScalarValue::DateTime(_) => DataType::DateTime,
            ScalarValue::Binary(_) => DataType::Binary,
            ScalarValue::Reference(_) => DataType::Reference,
        }
    }

    /// Convert a raw JSON scalar into a value of the declared data type.
    ///
    /// The JSON kind must match the data type: strings for string, reference,
    /// dateTime and binary; booleans for boolean; integral numbers for integer;
    /// any number for decimal. Anything else is a malformed request.
    pub fn from_json(attribute: &str, data_type: DataType, raw: &Value) -> ScimResult<Self> {
        let mismatch = || {
            ScimError::malformed_request(format!(
                "Attribute '{}' expects a {} value, got {}",
                attribute,
                data_type.as_str(),
                json_kind(raw)
            ))
        };

        match data_type {
            DataType::String => raw
                .as_str()
                .map(|s| ScalarValue::String(s.to_string()))
                .ok_or_else(mismatch),
            DataType::Reference => raw
                .as_str()
                .map(|s| ScalarValue::Reference(s.to_string()))
                .ok_or_else(mismatch),
            DataType::Boolean => raw
                .as_bool()
                .map(ScalarValue::Boolean)
                .ok_or_else(mismatch),
            DataType::Integer => raw
                .as_i64()
                .map(ScalarValue::Integer)
                .ok_or_else(mismatch),
            DataType::Decimal => raw
                .as_f64()
                .map(ScalarValue::Decimal)
                .ok_or_else(mismatch),
            DataType::DateTime => {
                let text = raw.as_str().ok_or_else(mismatch)?;
                DateTime::parse_from_rfc3339(text)
                    .map(|dt| ScalarValue::DateTime(dt.with_timezone(&Utc)))
                    .map_err(|e| {
                        ScimError::malformed_request(format!(
                            "Attribute '{}' has invalid dateTime '{}': {}",
                            attribute, text, e
                        ))
                    })
            }
            DataType::Binary => {
                let text = raw.as_str().ok_or_else(mismatch)?;
                BASE64.decode(text).map(ScalarValue::Binary).map_err(|e| {
                    ScimError::malformed_request(format!(
                        "Attribute '{}' has invalid base64 data: {}",
                        attribute, e
                    ))
                })
            }
            DataType::Complex => Err(ScimError::internal(format!(
                "Attribute '{}' is complex and has no scalar representation",
                attribute
            ))),
        }
    }

    /// Canonical wire representation of this value.
    pub fn to_json(&self) -> Value {
        match self {
            ScalarValue::String(s) | ScalarValue::Reference(s) => Value::String(s.clone()),
            ScalarValue::Boolean(b) => Value::Bool(*b),
            ScalarValue::Integer(i) => Value::Number((*i).into()),
            ScalarValue::Decimal(d) => Number::from_f64(*d)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            ScalarValue::DateTime(dt) => {
                Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            ScalarValue::Binary(bytes) => Value::String(BASE64.encode(bytes)),
        }
    }

    /// Borrow the text of a string or reference value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) | ScalarValue::Reference(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) | ScalarValue::Reference(s) => f.write_str(s),
            ScalarValue::Boolean(b) => write!(f, "{}", b),
            ScalarValue::Integer(i) => write!(f, "{}", i),
            ScalarValue::Decimal(d) => write!(f, "{}", d),
            ScalarValue::DateTime(dt) => {
                f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            ScalarValue::Binary(bytes) => f.write_str(&BASE64.encode(bytes)),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::String(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Boolean(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        ScalarValue::Integer(value)
    }
}

/// Name of a JSON value's kind, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "decimal",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

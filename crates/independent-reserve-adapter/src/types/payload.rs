/*
[INPUT]:  Endpoint field values in wire order
[OUTPUT]: Order-preserving JSON bodies and their signed-message forms
[POS]:    Data layer - ordered key/value payload for private requests
[UPDATE]: When a new value shape is needed on the wire
*/

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::Value;
use serde_json::value::RawValue;

use crate::http::{IrError, Result};

/// A single payload value.
///
/// Each variant has two independent renderings: the string used in the
/// signed message and the JSON value sent in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// JSON string, signed as-is
    Text(String),
    /// JSON integer
    Integer(u64),
    /// JSON number written with the decimal's exact digits
    Number(Decimal),
    /// JSON array of strings, signed comma-joined
    List(Vec<String>),
}

impl ParamValue {
    pub fn text(value: impl Into<String>) -> Self {
        ParamValue::Text(value.into())
    }

    /// String form used inside the canonical message.
    pub fn signing_form(&self) -> String {
        match self {
            ParamValue::Text(value) => value.clone(),
            ParamValue::Integer(value) => value.to_string(),
            ParamValue::Number(value) => value.to_string(),
            ParamValue::List(values) => values.join(","),
        }
    }

    fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(ParamValue::Text(text)),
            Value::Number(number) => match number.as_u64() {
                Some(integer) => Ok(ParamValue::Integer(integer)),
                None => Decimal::from_str(&number.to_string())
                    .map(ParamValue::Number)
                    .map_err(|e| IrError::Protocol(format!("invalid number {number}: {e}"))),
            },
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => Ok(text),
                    other => Err(IrError::Protocol(format!(
                        "expected string list item, got {other}"
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(ParamValue::List),
            other => Err(IrError::Protocol(format!(
                "unsupported payload value {other}"
            ))),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            ParamValue::Text(value) => serializer.serialize_str(value),
            ParamValue::Integer(value) => serializer.serialize_u64(*value),
            ParamValue::Number(value) => {
                let raw = RawValue::from_string(value.to_string()).map_err(S::Error::custom)?;
                raw.serialize(serializer)
            }
            ParamValue::List(values) => values.serialize(serializer),
        }
    }
}

/// Ordered list of `(key, value)` pairs.
///
/// The remote recomputes the signature from the body fields in transmission
/// order, so this is a list and not a map. Serialization emits entries in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedPayload {
    fields: Vec<(String, ParamValue)>,
}

impl OrderedPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, key: impl Into<String>, value: ParamValue) {
        self.fields.push((key.into(), value));
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Rebuild the signed-message parts from this payload.
    ///
    /// `signature` is skipped; every other field becomes `key=value` in body
    /// order, after the leading `url`.
    pub fn canonical_parts(&self, url: &str) -> Vec<String> {
        std::iter::once(url.to_string())
            .chain(
                self.iter()
                    .filter(|(name, _)| *name != "signature")
                    .map(|(name, value)| format!("{name}={}", value.signing_form())),
            )
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a JSON object body, keeping field order.
    pub fn from_json(body: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(body)? {
            Value::Object(map) => {
                let mut payload = Self::with_capacity(map.len());
                for (key, value) in map {
                    payload.push(key, ParamValue::from_json(value)?);
                }
                Ok(payload)
            }
            other => Err(IrError::Protocol(format!(
                "expected JSON object payload, got {other}"
            ))),
        }
    }
}

impl Serialize for OrderedPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, ParamValue)> for OrderedPayload {
    fn from_iter<I: IntoIterator<Item = (K, ParamValue)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

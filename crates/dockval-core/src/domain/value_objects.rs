//! Domain value objects: FieldValue, FormData, FieldDescriptor, FormKind.
//!
//! # Design
//!
//! Submitted forms are loosely typed. A field can be absent, present but
//! undefined, `null`, or carry any JSON shape. [`FieldValue`] keeps those
//! cases apart so rules can tell "wrong type" from "missing", and
//! [`FormData`] keeps "key absent" apart from "key present with an undefined
//! value".

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::DomainError;

// ── FieldValue ───────────────────────────────────────────────────────────────

/// The dynamic value of one submitted form field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum FieldValue {
    /// The key is present but carries no value.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Arrays and objects. No rule accepts these.
    Other(Value),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// `true` for `Null` and `Undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Short type name used in log events.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Other(Value::Array(_)) => "array",
            Self::Other(_) => "object",
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => Self::Number(f),
                None => Self::Other(Value::Number(n)),
            },
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Undefined | FieldValue::Null => Value::Null,
            FieldValue::Bool(b) => Value::Bool(b),
            // Whole numbers go back out as integers so `42` stays `42`.
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                Value::from(n as i64)
            }
            FieldValue::Number(n) => Value::from(n),
            FieldValue::Text(s) => Value::String(s),
            FieldValue::Other(v) => v,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

// ── FormData ─────────────────────────────────────────────────────────────────

/// A submitted form: field key to value.
///
/// `contains_key` answers "was the key sent at all", which is what the
/// "key is missing" checks look at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    fields: BTreeMap<String, FieldValue>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl TryFrom<Value> for FormData {
    type Error = DomainError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(DomainError::NotAnObject {
                found: FieldValue::from(other).type_name(),
            }),
        }
    }
}

// ── FieldDescriptor ──────────────────────────────────────────────────────────

/// A form field key paired with the name used in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub display_name: &'static str,
}

impl FieldDescriptor {
    pub const fn new(key: &'static str, display_name: &'static str) -> Self {
        Self { key, display_name }
    }

    /// `"<display name> key is missing"`.
    pub fn missing_message(&self) -> String {
        format!("{} key is missing", self.display_name)
    }
}

// ── FormKind ─────────────────────────────────────────────────────────────────

/// Which domain validator a form goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Spacecraft,
    Docking,
}

impl FormKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spacecraft => "spacecraft",
            Self::Docking => "docking",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spacecraft" | "ship" => Ok(Self::Spacecraft),
            "docking" | "dock" => Ok(Self::Docking),
            other => Err(DomainError::UnknownFormKind(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_values_map_to_field_values() {
        assert_eq!(FieldValue::from(json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from(json!("x")), FieldValue::Text("x".into()));
        assert_eq!(FieldValue::from(json!(42)), FieldValue::Number(42.0));
        assert_eq!(FieldValue::from(json!(42.5)), FieldValue::Number(42.5));
        assert_eq!(FieldValue::from(json!([1])).type_name(), "array");
        assert_eq!(FieldValue::from(json!({})).type_name(), "object");
    }

    #[test]
    fn whole_numbers_serialize_as_integers() {
        assert_eq!(Value::from(FieldValue::Number(42.0)), json!(42));
        assert_eq!(Value::from(FieldValue::Number(42.5)), json!(42.5));
        assert_eq!(Value::from(FieldValue::Undefined), json!(null));
    }

    #[test]
    fn form_data_distinguishes_absent_from_undefined() {
        let form = FormData::new().with("bayId", FieldValue::Undefined);
        assert!(form.contains_key("bayId"));
        assert_eq!(form.get("bayId"), Some(&FieldValue::Undefined));
        assert!(!form.contains_key("spacecraftId"));
    }

    #[test]
    fn form_data_from_json_object() {
        let form = FormData::try_from(json!({ "name": "Voyager", "bayId": 7 })).unwrap();
        assert_eq!(form.len(), 2);
        assert_eq!(form.get("name").and_then(FieldValue::as_str), Some("Voyager"));
        assert_eq!(form.get("bayId").and_then(FieldValue::as_f64), Some(7.0));
    }

    #[test]
    fn form_data_rejects_non_objects() {
        let err = FormData::try_from(json!([1, 2])).unwrap_err();
        assert_eq!(err, DomainError::NotAnObject { found: "array" });
    }

    #[test]
    fn form_data_deserializes_directly() {
        let form: FormData = serde_json::from_str(r#"{"type": null}"#).unwrap();
        assert_eq!(form.get("type"), Some(&FieldValue::Null));
    }

    #[test]
    fn form_kind_parses() {
        assert_eq!("Docking".parse::<FormKind>().unwrap(), FormKind::Docking);
        assert_eq!("ship".parse::<FormKind>().unwrap(), FormKind::Spacecraft);
        assert!("crew".parse::<FormKind>().is_err());
    }
}

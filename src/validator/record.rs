//! Form record types and their construction from JSON documents.
use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::lib::errors::FormError;

use super::rules::RequiredField;

/// A single form field's wrapped string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldValue {
    /// Text entered by the user. An empty string means the field was left blank.
    pub value: String,
}

impl FieldValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// A user-submitted form: field name to wrapped value.
///
/// Only the required fields are inspected; any other entries are carried
/// along untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), FieldValue::new(value));
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

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Build a record from a JSON document shaped like
    /// `{ "name": { "value": "..." }, "email": { "value": "..." } }`.
    ///
    /// Required entries with the wrong shape are rejected. Other malformed
    /// entries are skipped. Absent required keys are left for the validator
    /// to judge under its policy.
    pub fn from_json(document: &Value) -> Result<Self, FormError> {
        let entries = document.as_object().ok_or(FormError::NotAnObject {
            found: json_kind(document),
        })?;

        let mut record = FormRecord::new();
        for (key, entry) in entries {
            match (RequiredField::from_key(key), read_field_value(entry)) {
                (_, Ok(value)) => {
                    record.fields.insert(key.clone(), value);
                }
                (Some(field), Err(reason)) => {
                    return Err(FormError::InvalidField {
                        field: field.key(),
                        reason,
                    });
                }
                (None, Err(reason)) => {
                    debug!(
                        target: "formcheck::validator",
                        key = %key,
                        reason = %reason,
                        "Skipping malformed optional form entry"
                    );
                }
            }
        }
        Ok(record)
    }

    /// Parse a JSON string into a record.
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let document: Value = serde_json::from_str(raw)?;
        Ok(Self::from_json(&document)?)
    }
}

impl<K, V> FromIterator<(K, V)> for FormRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = FormRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

fn read_field_value(entry: &Value) -> Result<FieldValue, String> {
    let object = entry
        .as_object()
        .ok_or_else(|| format!("expected an object with `value`, found {}", json_kind(entry)))?;
    match object.get("value") {
        Some(Value::String(text)) => Ok(FieldValue::new(text.as_str())),
        Some(other) => Err(format!(
            "`value` must be a string, found {}",
            json_kind(other)
        )),
        None => Err("`value` attribute is missing".to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! JSON Schema describing the accepted input document.
use std::collections::BTreeMap;

use anyhow::Result;
use schemars::{JsonSchema, Schema};
use serde_json::Value;

use super::record::FieldValue;

/// Input document accepted by `FormRecord::from_json`.
#[derive(Debug, JsonSchema)]
#[schemars(title = "FormRecord")]
pub struct FormDocument {
    /// Name entered by the user.
    pub name: FieldValue,
    /// Email address entered by the user.
    pub email: FieldValue,
    /// Additional fields are accepted and ignored.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

pub fn input_schema() -> Schema {
    schemars::schema_for!(FormDocument)
}

/// Render the input schema as pretty-printed JSON.
pub fn input_schema_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&input_schema())?)
}

//! Required fields and the policy for absent ones.
use std::fmt;

use serde::{Deserialize, Serialize};

/// A field every form record must fill out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    Email,
}

impl RequiredField {
    /// Evaluation order. Notifications are emitted in this order.
    pub const ALL: [RequiredField; 2] = [RequiredField::Name, RequiredField::Email];

    /// Key of the field inside a form record.
    pub const fn key(&self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Email => "email",
        }
    }

    /// User-facing notification for an empty field.
    pub const fn missing_message(&self) -> &'static str {
        match self {
            RequiredField::Name => "Name must be filled out",
            RequiredField::Email => "Email must be filled out",
        }
    }

    /// Look up a required field by record key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How the validator treats a required key that is absent from the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Fail with `FormError::MissingField` before any notification is sent.
    #[default]
    Reject,
    /// Treat the absent field as an empty value and notify as usual.
    TreatAsEmpty,
}

impl MissingFieldPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MissingFieldPolicy::Reject => "reject",
            MissingFieldPolicy::TreatAsEmpty => "treat_as_empty",
        }
    }

    /// Parse the configuration spelling of a policy.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "reject" => Some(MissingFieldPolicy::Reject),
            "treat_as_empty" | "treat-as-empty" => Some(MissingFieldPolicy::TreatAsEmpty),
            _ => None,
        }
    }
}

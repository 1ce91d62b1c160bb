use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{lib::errors::ConfigError, validator::MissingFieldPolicy};

/// Validator behaviour settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidatorSection {
    pub missing_fields: MissingFieldPolicy,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawValidatorSection {
    pub missing_fields: Option<String>,
}

pub fn parse_validator_section(
    raw: Option<RawValidatorSection>,
    path: &Path,
) -> Result<ValidatorSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let missing_fields = match raw.missing_fields {
        None => MissingFieldPolicy::default(),
        Some(value) => {
            MissingFieldPolicy::parse(&value).ok_or_else(|| ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "validator.missing_fields",
                message: format!("expected `reject` or `treat_as_empty`, got `{value}`"),
            })?
        }
    };
    Ok(ValidatorSection { missing_fields })
}

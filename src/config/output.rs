use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::lib::errors::ConfigError;

/// How the CLI presents a validation outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Notifications on stderr, `valid`/`invalid` on stdout.
    #[default]
    Text,
    /// A JSON report on stdout.
    Json,
}

impl OutputFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutputSection {
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawOutputSection {
    pub format: Option<String>,
}

pub fn parse_output_section(
    raw: Option<RawOutputSection>,
    path: &Path,
) -> Result<OutputSection, ConfigError> {
    let raw = raw.unwrap_or_default();
    let format = match raw.format.as_deref().map(str::trim) {
        None => OutputFormat::default(),
        Some("text") => OutputFormat::Text,
        Some("json") => OutputFormat::Json,
        Some(other) => {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "output.format",
                message: format!("expected `text` or `json`, got `{other}`"),
            })
        }
    };
    Ok(OutputSection { format })
}

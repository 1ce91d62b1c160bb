//! Load and validate formcheck configuration.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod output;
pub mod telemetry;
pub mod validator;

pub use output::{parse_output_section, OutputFormat, OutputSection, RawOutputSection};
pub use validator::{parse_validator_section, RawValidatorSection, ValidatorSection};

pub const CONFIG_ENV_KEY: &str = "FORMCHECK_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "formcheck.toml";

/// Top-level configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormcheckConfig {
    pub validator: ValidatorSection,
    pub output: OutputSection,
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawFormcheckConfig {
    validator: Option<RawValidatorSection>,
    output: Option<RawOutputSection>,
}

impl FormcheckConfig {
    /// Load `path` if it exists, otherwise return defaults.
    pub fn load_optional(path: PathBuf) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::load_from_path(path);
        }
        telemetry::log_defaults_used(&path);
        Ok(Self::default())
    }

    /// Load configuration from a specific path. The file must exist.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "formcheck::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(
            config::File::from(path.clone())
                .format(config::FileFormat::Toml)
                .required(true),
        );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "formcheck::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawFormcheckConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "formcheck::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, &path).map_err(|err| {
            error!(
                target: "formcheck::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub(crate) fn source_display(&self) -> String {
        self.source_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<defaults>".to_string())
    }

    fn from_raw(raw: RawFormcheckConfig, path: &Path) -> Result<Self, ConfigError> {
        let validator = parse_validator_section(raw.validator, path)?;
        let output = parse_output_section(raw.output, path)?;

        Ok(Self {
            validator,
            output,
            source_path: Some(path.to_path_buf()),
        })
    }
}

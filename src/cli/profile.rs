//! RunProfile and config/input resolution.
use std::{env, fs, io::Read, path::PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::{
    config::{FormcheckConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH},
    validator::MissingFieldPolicy,
};

/// CLI spelling of `MissingFieldPolicy`.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum MissingFieldsMode {
    Reject,
    TreatAsEmpty,
}

impl From<MissingFieldsMode> for MissingFieldPolicy {
    fn from(mode: MissingFieldsMode) -> Self {
        match mode {
            MissingFieldsMode::Reject => MissingFieldPolicy::Reject,
            MissingFieldsMode::TreatAsEmpty => MissingFieldPolicy::TreatAsEmpty,
        }
    }
}

/// Where the config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

/// Where the form document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` both mean stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }

    /// Read the whole document, using `stdin` for `InputSource::Stdin`.
    pub fn read_to_string(&self, stdin: &mut dyn Read) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut buffer = String::new();
                stdin
                    .read_to_string(&mut buffer)
                    .context("failed to read form document from stdin")?;
                Ok(buffer)
            }
            InputSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read form document {}", path.display())),
        }
    }
}

/// Resolved run profile.
#[derive(Debug, Clone)]
pub struct RunProfile {
    pub config_path: PathBuf,
    pub config_source: ConfigSource,
}

impl RunProfile {
    /// Load the configuration this profile points at. Only the implicit
    /// default path may be absent.
    pub fn load_config(&self) -> Result<FormcheckConfig> {
        let config = match self.config_source {
            ConfigSource::Cli | ConfigSource::Env => {
                FormcheckConfig::load_from_path(self.config_path.clone())?
            }
            ConfigSource::Default => FormcheckConfig::load_optional(self.config_path.clone())?,
        };
        Ok(config)
    }
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<(PathBuf, ConfigSource)> {
    let (path, source) = match override_path {
        Some(path) => (path, ConfigSource::Cli),
        None => match env::var_os(CONFIG_ENV_KEY).filter(|value| !value.is_empty()) {
            Some(value) => (PathBuf::from(value), ConfigSource::Env),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), ConfigSource::Default),
        },
    };

    Ok((absolutize(path)?, source))
}

fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}

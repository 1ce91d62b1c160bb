//! CLI argument definitions and `RunProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

use super::{resolve_config_path, MissingFieldsMode, RunProfile};

/// Top-level CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Validate a form document.
    #[command(about = "Validate a JSON form document")]
    Check(CheckArgs),
    /// Print the JSON Schema of accepted form documents.
    Schema,
    /// Print the effective configuration as TOML.
    Config,
}

/// Arguments for `check`.
#[derive(Debug, Clone, Args)]
#[command(
    long_about = "Validate a JSON form document.\n\nThe document maps field names to objects with a string `value`; `name` and `email` are required.\nExit status: 0 when valid, 1 when a required field is empty, 2 on malformed input or other errors.",
    after_help = "Hint: use `formcheck check --missing-fields treat-as-empty form.json` to report absent fields instead of failing."
)]
pub struct CheckArgs {
    /// Form document path; `-` or absent reads stdin.
    pub input: Option<PathBuf>,
    /// Output format (overrides `[output].format`).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// How to treat absent required fields (overrides `[validator].missing_fields`).
    #[arg(long = "missing-fields", value_enum)]
    pub missing_fields: Option<MissingFieldsMode>,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "formcheck",
    author,
    version,
    about = "Check that form records have their required fields filled out",
    long_about = None
)]
pub struct FormcheckArgs {
    /// Path to formcheck.toml (overrides FORMCHECK_CONFIG_PATH).
    #[arg(long = "config", global = true)]
    pub config_override: Option<PathBuf>,
    #[command(subcommand)]
    pub command: CliCommand,
}

impl FormcheckArgs {
    /// Split parsed args into the command and its resolved profile.
    pub fn into_parts(self) -> Result<(CliCommand, RunProfile)> {
        let (config_path, config_source) = resolve_config_path(self.config_override)?;
        Ok((
            self.command,
            RunProfile {
                config_path,
                config_source,
            },
        ))
    }
}

//! CLI entrypoint module structure.
use std::io::{Read, Write};

use anyhow::{Context, Result};

use crate::{
    config::{FormcheckConfig, OutputFormat},
    validator::{self, FormRecord, FormValidator, MissingFieldPolicy, WriterSink},
};

pub mod args;
pub mod exit;
pub mod profile;

pub use args::{CheckArgs, CliCommand, FormcheckArgs};
pub use exit::{CheckStatus, RunExit};
pub use profile::{resolve_config_path, ConfigSource, InputSource, MissingFieldsMode, RunProfile};

/// Standard streams handed to a command.
pub struct CommandIo<'a> {
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

/// Execute a CLI command and return the resulting status.
pub fn execute_cli_command(
    command: CliCommand,
    profile: &RunProfile,
    io: CommandIo<'_>,
) -> Result<CheckStatus> {
    match command {
        CliCommand::Check(args) => {
            let config = profile.load_config()?;
            run_check(args, &config, io)
        }
        CliCommand::Schema => {
            let schema = validator::input_schema_json()?;
            writeln!(io.stdout, "{schema}")?;
            Ok(CheckStatus::Valid)
        }
        CliCommand::Config => {
            let config = profile.load_config()?;
            let rendered = config
                .to_toml()
                .context("failed to render configuration")?;
            write!(io.stdout, "{rendered}")?;
            Ok(CheckStatus::Valid)
        }
    }
}

/// Read, validate, and report one form document.
pub fn run_check(
    args: CheckArgs,
    config: &FormcheckConfig,
    io: CommandIo<'_>,
) -> Result<CheckStatus> {
    let policy = args
        .missing_fields
        .map(MissingFieldPolicy::from)
        .unwrap_or(config.validator.missing_fields);
    let format = args.format.unwrap_or(config.output.format);

    let source = InputSource::from_arg(args.input);
    let raw = source.read_to_string(io.stdin)?;
    let form = FormRecord::from_json_str(&raw).context("invalid form document")?;
    let validator = FormValidator::new(policy);

    let valid = match format {
        OutputFormat::Text => {
            let mut sink = WriterSink::new(&mut *io.stderr);
            let valid = validator.validate(&form, &mut sink)?;
            sink.finish().context("failed to write notifications")?;
            writeln!(io.stdout, "{}", if valid { "valid" } else { "invalid" })?;
            valid
        }
        OutputFormat::Json => {
            let report = validator.report(&form)?;
            writeln!(io.stdout, "{}", serde_json::to_string_pretty(&report)?)?;
            report.valid
        }
    };

    Ok(if valid {
        CheckStatus::Valid
    } else {
        CheckStatus::Invalid
    })
}

//! Entry point for formcheck.
use std::{io, process::ExitCode};

use clap::Parser;
use formcheck::{
    cli::{execute_cli_command, CheckStatus, CommandIo, FormcheckArgs, RunExit},
    lib::telemetry,
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(status) => status.into(),
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<CheckStatus, RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let args = FormcheckArgs::parse();
    let (command, profile) = args.into_parts().map_err(RunExit::from_error)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    execute_cli_command(
        command,
        &profile,
        CommandIo {
            stdin: &mut stdin.lock(),
            stdout: &mut stdout.lock(),
            stderr: &mut stderr.lock(),
        },
    )
    .map_err(RunExit::from_error)
}

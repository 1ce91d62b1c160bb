//! Process exit status mapping.
use std::process::ExitCode;

use anyhow::Error;

/// Outcome of a successfully executed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Valid,
    Invalid,
}

impl CheckStatus {
    pub const fn code(&self) -> u8 {
        match self {
            CheckStatus::Valid => 0,
            CheckStatus::Invalid => 1,
        }
    }
}

impl From<CheckStatus> for ExitCode {
    fn from(status: CheckStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Exit code for malformed input, bad configuration and I/O failures.
pub const ERROR_EXIT_CODE: u8 = 2;

/// Bundles a failure message with an exit code.
#[derive(Debug)]
pub struct RunExit {
    message: String,
    exit_code: u8,
}

impl RunExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("error: {err:#}"),
            exit_code: ERROR_EXIT_CODE,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        ExitCode::from(self.exit_code)
    }
}

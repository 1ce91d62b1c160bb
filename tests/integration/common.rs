use std::{
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};
use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_formcheck");

pub fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

/// Run the binary inside `workdir` with no inherited config path.
pub fn run_formcheck(workdir: &Path, args: &[&str], stdin: Option<&str>) -> Result<Output> {
    run_formcheck_with_config_env(workdir, args, None, stdin)
}

/// Run the binary with `FORMCHECK_CONFIG_PATH` set to `config_env`, or removed when `None`.
pub fn run_formcheck_with_config_env(
    workdir: &Path,
    args: &[&str],
    config_env: Option<&Path>,
    stdin: Option<&str>,
) -> Result<Output> {
    let mut command = Command::new(BINARY_PATH);
    command
        .args(args)
        .current_dir(workdir)
        .env_remove("RUST_LOG");
    match config_env {
        Some(path) => command.env("FORMCHECK_CONFIG_PATH", path),
        None => command.env_remove("FORMCHECK_CONFIG_PATH"),
    };
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    let mut child = command.spawn().context("failed to spawn formcheck")?;

    {
        let mut pipe = child.stdin.take().context("child stdin")?;
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes())
                .context("failed to write child stdin")?;
        }
    }

    child
        .wait_with_output()
        .context("failed to wait for formcheck")
}

pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("can create temporary directory")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

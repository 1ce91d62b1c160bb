use std::fs;

use anyhow::Result;
use serde_json::Value;

use super::common::{
    fixture, run_formcheck, run_formcheck_with_config_env, scratch_dir, stderr_of, stdout_of,
};

#[test]
fn default_config_file_in_workdir_is_picked_up() -> Result<()> {
    let dir = scratch_dir();
    fs::write(
        dir.path().join("formcheck.toml"),
        "[validator]\nmissing_fields = \"treat_as_empty\"\n",
    )?;
    let input = fixture("forms/missing_email.json");
    let output = run_formcheck(dir.path(), &["check", &input.to_string_lossy()], None)?;

    assert_eq!(output.status.code(), Some(1), "{}", stderr_of(&output));
    assert_eq!(stderr_of(&output), "Email must be filled out\n");
    Ok(())
}

#[test]
fn explicit_config_selects_json_output() -> Result<()> {
    let dir = scratch_dir();
    let config = fixture("config_valid.toml");
    let input = fixture("forms/valid.json");
    let output = run_formcheck(
        dir.path(),
        &[
            "--config",
            &config.to_string_lossy(),
            "check",
            &input.to_string_lossy(),
        ],
        None,
    )?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    let report: Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(report["valid"], Value::Bool(true));
    Ok(())
}

#[test]
fn missing_explicit_config_exits_two() -> Result<()> {
    let dir = scratch_dir();
    let missing = dir.path().join("absent.toml");
    let output = run_formcheck(
        dir.path(),
        &["config", "--config", &missing.to_string_lossy()],
        None,
    )?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to read configuration file"));
    Ok(())
}

#[test]
fn config_command_prints_effective_settings() -> Result<()> {
    let dir = scratch_dir();
    let config = fixture("config_valid.toml");
    let output = run_formcheck(
        dir.path(),
        &["config", "--config", &config.to_string_lossy()],
        None,
    )?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("missing_fields = \"treat_as_empty\""), "{stdout}");
    assert!(stdout.contains("format = \"json\""), "{stdout}");
    Ok(())
}

#[test]
fn schema_command_prints_json_schema() -> Result<()> {
    let dir = scratch_dir();
    let output = run_formcheck(dir.path(), &["schema"], None)?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    let schema: Value = serde_json::from_str(&stdout_of(&output))?;
    assert!(schema["properties"]["name"].is_object());
    assert!(schema["properties"]["email"].is_object());
    Ok(())
}

#[test]
fn env_var_selects_config() -> Result<()> {
    let dir = scratch_dir();
    let env_config = dir.path().join("env.toml");
    fs::write(&env_config, "[output]\nformat = \"json\"\n")?;
    let input = fixture("forms/empty_name.json");
    let output = run_formcheck_with_config_env(
        dir.path(),
        &["check", &input.to_string_lossy()],
        Some(&env_config),
        None,
    )?;

    assert_eq!(output.status.code(), Some(1), "{}", stderr_of(&output));
    let report: Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(
        report["notifications"],
        serde_json::json!(["Name must be filled out"])
    );
    Ok(())
}

#[test]
fn env_var_beats_default_config_file() -> Result<()> {
    let dir = scratch_dir();
    fs::write(
        dir.path().join("formcheck.toml"),
        "[validator]\nmissing_fields = \"reject\"\n",
    )?;
    let env_config = dir.path().join("env.toml");
    fs::write(
        &env_config,
        "[validator]\nmissing_fields = \"treat_as_empty\"\n",
    )?;
    let output = run_formcheck_with_config_env(dir.path(), &["config"], Some(&env_config), None)?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("missing_fields = \"treat_as_empty\""), "{stdout}");
    Ok(())
}

#[test]
fn config_flag_overrides_env_var() -> Result<()> {
    let dir = scratch_dir();
    let env_config = dir.path().join("env.toml");
    fs::write(&env_config, "[output]\nformat = \"text\"\n")?;
    let flag_config = fixture("config_valid.toml");
    let output = run_formcheck_with_config_env(
        dir.path(),
        &["config", "--config", &flag_config.to_string_lossy()],
        Some(&env_config),
        None,
    )?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("format = \"json\""), "{stdout}");
    assert!(stdout.contains("missing_fields = \"treat_as_empty\""), "{stdout}");
    Ok(())
}

#[test]
fn missing_env_config_exits_two() -> Result<()> {
    let dir = scratch_dir();
    let missing = dir.path().join("absent.toml");
    let output = run_formcheck_with_config_env(dir.path(), &["config"], Some(&missing), None)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Failed to read configuration file"));
    Ok(())
}

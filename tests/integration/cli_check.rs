use anyhow::Result;
use serde_json::Value;

use super::common::{fixture, run_formcheck, scratch_dir, stderr_of, stdout_of};

#[test]
fn valid_file_exits_zero() -> Result<()> {
    let dir = scratch_dir();
    let input = fixture("forms/valid.json");
    let output = run_formcheck(dir.path(), &["check", &input.to_string_lossy()], None)?;

    assert_eq!(output.status.code(), Some(0), "{}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "valid\n");
    assert!(stderr_of(&output).is_empty());
    Ok(())
}

#[test]
fn empty_name_exits_one_with_alert() -> Result<()> {
    let dir = scratch_dir();
    let input = fixture("forms/empty_name.json");
    let output = run_formcheck(dir.path(), &["check", &input.to_string_lossy()], None)?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "invalid\n");
    assert_eq!(stderr_of(&output), "Name must be filled out\n");
    Ok(())
}

#[test]
fn stdin_is_read_when_no_input_is_given() -> Result<()> {
    let dir = scratch_dir();
    let output = run_formcheck(
        dir.path(),
        &["check", "-"],
        Some(r#"{"name":{"value":"Alice"},"email":{"value":""}}"#),
    )?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_of(&output), "Email must be filled out\n");
    Ok(())
}

#[test]
fn json_format_reports_both_fields_in_order() -> Result<()> {
    let dir = scratch_dir();
    let input = fixture("forms/both_empty.json");
    let output = run_formcheck(
        dir.path(),
        &["check", "--format", "json", &input.to_string_lossy()],
        None,
    )?;

    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(report["valid"], Value::Bool(false));
    assert_eq!(
        report["notifications"],
        serde_json::json!(["Name must be filled out", "Email must be filled out"])
    );
    Ok(())
}

#[test]
fn missing_field_exits_two_by_default() -> Result<()> {
    let dir = scratch_dir();
    let input = fixture("forms/missing_email.json");
    let output = run_formcheck(dir.path(), &["check", &input.to_string_lossy()], None)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty());
    assert!(
        stderr_of(&output).contains("missing required field `email`"),
        "{}",
        stderr_of(&output)
    );
    Ok(())
}

#[test]
fn missing_field_can_be_reported_as_empty() -> Result<()> {
    let dir = scratch_dir();
    let input = fixture("forms/missing_email.json");
    let output = run_formcheck(
        dir.path(),
        &[
            "check",
            "--missing-fields",
            "treat-as-empty",
            &input.to_string_lossy(),
        ],
        None,
    )?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_of(&output), "Email must be filled out\n");
    Ok(())
}

#[test]
fn non_string_value_exits_two() -> Result<()> {
    let dir = scratch_dir();
    let input = fixture("forms/numeric_name.json");
    let output = run_formcheck(dir.path(), &["check", &input.to_string_lossy()], None)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr_of(&output).contains("`name` is malformed"),
        "{}",
        stderr_of(&output)
    );
    Ok(())
}

#[test]
fn invalid_json_exits_two() -> Result<()> {
    let dir = scratch_dir();
    let output = run_formcheck(dir.path(), &["check"], Some("{ not json"))?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).starts_with("error: invalid form document"));
    Ok(())
}

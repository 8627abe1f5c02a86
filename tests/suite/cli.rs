//! End-to-end tests of the `genderkit` binary

use std::path::Path;
use std::process::{Command, Output};

use crate::common::config_file;

/// Run the binary against `config` with `RUST_LOG` cleared so the
/// configured filter applies.
fn run_genderkit(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_genderkit"))
        .args(args)
        .env("GENDERKIT_CONFIG", config)
        .env_remove("RUST_LOG")
        .output()
        .expect("run genderkit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn format_flag_overrides_configured_format() {
    let (_dir, path) = config_file("[output]\nformat = \"token\"\n");

    let token = run_genderkit(&path, &["decode", "M"]);
    assert!(token.status.success());
    assert_eq!(stdout(&token), "M\n");

    let json = run_genderkit(&path, &["--format", "json", "decode", "M"]);
    assert!(json.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&json).trim()).unwrap();
    assert_eq!(value["token"], "M");
    assert_eq!(value["description"], "Male");
    assert_eq!(value["custom"], false);
}

#[test]
fn malformed_token_exits_non_zero() {
    let (dir, _path) = config_file("");
    let missing = dir.path().join("absent.toml");

    let output = run_genderkit(&missing, &["decode", "Ohello"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("'Ohello'"), "stderr: {err}");
    assert!(err.contains("no '|'"), "stderr: {err}");
}

#[test]
fn unknown_configured_format_is_logged() {
    let (_dir, path) = config_file("[output]\nformat = \"yaml\"\n");

    let output = run_genderkit(&path, &["decode", "M"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "M\n");
    let err = stderr(&output);
    assert!(err.contains("invalid output format 'yaml'"), "stderr: {err}");
    assert!(err.contains("WARN"), "stderr: {err}");
}

#[test]
fn unparsable_config_is_logged() {
    let (_dir, path) = config_file("[output\n");

    let output = run_genderkit(&path, &["decode", "F"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "F\n");
    assert!(stderr(&output).contains("failed to parse config"));
}

#[test]
fn compare_uses_description_equality() {
    let (dir, _path) = config_file("");
    let missing = dir.path().join("absent.toml");

    let output = run_genderkit(
        &missing,
        &[
            "compare",
            "OAgender|he/him/his/his/himself",
            "OAgender|she/her/her/hers/herself",
        ],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "equal\n");
}

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::NamedTempFile;

fn desequencer() -> Command {
    let mut cmd = Command::cargo_bin("desequencer").unwrap();
    cmd.env_remove("DESEQUENCER_LOG");
    cmd
}

fn run_json(cmd: &mut Command) -> (Option<i32>, Value) {
    let output = cmd.output().unwrap();
    let value = serde_json::from_slice(&output.stdout).unwrap();
    (output.status.code(), value)
}

#[test]
fn empty_command_line_succeeds() {
    let (code, value) = run_json(desequencer().arg("--raw"));

    assert_eq!(code, Some(0));
    assert_eq!(value["outcome"]["error"], "none");
    assert_eq!(value["outcome"]["help_found"], false);
    assert_eq!(value["outcome"]["verbosity"], 0);
}

#[test]
fn builtin_flags_are_reported() {
    let (code, value) = run_json(desequencer().args(["--", "-vv", "--help"]));

    assert_eq!(code, Some(0));
    assert_eq!(value["outcome"]["verbosity"], 2);
    assert_eq!(value["outcome"]["help_found"], true);
}

#[test]
fn unknown_argument_exits_with_two() {
    let (code, value) = run_json(desequencer().args(["--", "--foo"]));

    assert_eq!(code, Some(2));
    assert_eq!(value["outcome"]["error"], "unknown_argument");
    assert_eq!(value["outcome"]["diagnostic"]["token"], "--foo");
}

#[test]
fn manifest_arguments_collect_parcels() {
    let mut manifest = NamedTempFile::new().unwrap();
    writeln!(
        manifest,
        r#"
[[argument]]
id = "arg2"
short = "2"
parcels = 2
"#
    )
    .unwrap();

    let (code, value) = run_json(
        desequencer()
            .arg("--manifest")
            .arg(manifest.path())
            .args(["--", "-2", "foo", "bar", "fish"]),
    );

    assert_eq!(code, Some(2));
    assert_eq!(value["outcome"]["error"], "unknown_argument");
    let arg2 = value["values"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["id"] == "arg2")
        .unwrap();
    assert_eq!(arg2["parcels"], serde_json::json!(["foo", "bar"]));
}

#[test]
fn missing_parcels_exit_with_two() {
    let mut manifest = NamedTempFile::new().unwrap();
    writeln!(manifest, "builtins = false\n[[argument]]\nid = \"out\"\nshort = \"o\"\nparcels = 1").unwrap();

    let (code, value) = run_json(
        desequencer()
            .arg("-m")
            .arg(manifest.path())
            .args(["--", "-o"]),
    );

    assert_eq!(code, Some(2));
    assert_eq!(value["outcome"]["error"], "missing_argument");
    assert_eq!(value["values"].as_array().unwrap().len(), 1);
}

#[test]
fn usage_lists_descriptors() {
    desequencer()
        .args(["--usage", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: desequencer [options]"))
        .stdout(predicate::str::contains("-v, --verbose"));
}

#[test]
fn unreadable_manifest_fails() {
    desequencer()
        .args(["--manifest", "/nonexistent/args.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to build descriptor set"));
}

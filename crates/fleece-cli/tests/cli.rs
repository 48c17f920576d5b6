use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

const FIXTURE: &str = r#"{
  "int": 2,
  "float": -3.3,
  "string": "Hello World",
  "map": {"map2": {"num3": 99}},
  "complex-array": [{"dub": "bub"}, {"answer": 42}]
}"#;

fn fixture(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("document.json");
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

fn cli() -> Command {
    let mut command = Command::cargo_bin("fleece").expect("Binary exists");
    command.env_remove("FLEECE_LOG");
    command
}

fn stdout_of(args: &[&str]) -> String {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let path = fixture(&dir, FIXTURE);
    let output = cli()
        .args(&args[..1])
        .arg(&path)
        .args(&args[1..])
        .output()
        .expect("Failed to run");
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout).expect("UTF-8 output")
}

#[test]
fn get_nested_int() {
    assert_eq!(
        stdout_of(&["get", "map", "map2", "num3", "--as", "int"]),
        "99\n"
    );
}

#[test]
fn get_truncates() {
    assert_eq!(stdout_of(&["get", "float", "--as", "int"]), "-3\n");
}

#[test]
fn get_string() {
    assert_eq!(stdout_of(&["get", "string"]), "\"Hello World\"\n");
    assert_eq!(stdout_of(&["get", "string", "--raw"]), "Hello World\n");
}

#[test]
fn get_indexed_map() {
    assert_eq!(
        stdout_of(&["get", "complex-array", "--index", "1"]),
        "{\"answer\":42}\n"
    );
}

#[test]
fn pointer() {
    assert_eq!(stdout_of(&["pointer", "/complex-array/0/dub"]), "\"bub\"\n");
}

#[test]
fn dump_pretty() {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let path = fixture(&dir, r#"{"a":{"b":1}}"#);
    cli()
        .arg("dump")
        .arg(&path)
        .args(["--indent", "4"])
        .assert()
        .success()
        .stdout("{\n    \"a\": {\n        \"b\": 1\n    }\n}\n");
}

#[test]
fn dump_raw_is_byte_identical() {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let path = fixture(&dir, FIXTURE);
    cli()
        .arg("dump")
        .arg(&path)
        .arg("--raw")
        .assert()
        .success()
        .stdout(FIXTURE);
}

#[test]
fn reads_stdin() {
    cli()
        .args(["get", "-", "a", "--as", "bool"])
        .write_stdin(r#"{"a": true}"#)
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn missing_key_fails() {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let path = fixture(&dir, FIXTURE);
    cli()
        .arg("get")
        .arg(&path)
        .arg("blah")
        .assert()
        .code(4)
        .stdout("")
        .stderr(
            "error: Lookup failed\ncaused by: Could not follow path\ncaused by: Key 'blah' does not exist (segment 0)\n",
        );
}

#[test]
fn type_mismatch_fails() {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let path = fixture(&dir, FIXTURE);
    cli()
        .arg("get")
        .arg(&path)
        .args(["string", "--as", "int"])
        .assert()
        .code(4)
        .stderr("error: Lookup failed\ncaused by: Expected number, found string\n");
}

#[test]
fn malformed_input_fails() {
    cli()
        .args(["dump", "-"])
        .write_stdin("test")
        .assert()
        .code(3);
}

#[test]
fn size_limit() {
    cli()
        .args(["--max-size", "3", "dump", "-"])
        .write_stdin(r#"{"a":1}"#)
        .assert()
        .code(3)
        .stderr("error: Failed to load document\ncaused by: Input of 7 bytes exceeds the limit of 3 bytes\n");
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    cli()
        .arg("dump")
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(1);
}

#[test]
fn usage_error() {
    cli().arg("get").assert().code(2);
}

#[test]
fn deep_input_loads() {
    let input = format!("{}1{}", "[".repeat(300), "]".repeat(300));
    cli()
        .args(["dump", "-", "--raw"])
        .write_stdin(input.clone())
        .assert()
        .success()
        .stdout(input);
}

#[test]
fn depth_limit() {
    cli()
        .args(["--max-depth", "2", "dump", "-"])
        .write_stdin("[[[1]]]")
        .assert()
        .code(3)
        .stderr("error: Failed to load document\ncaused by: Input nests deeper than the limit of 2 levels\n");
}

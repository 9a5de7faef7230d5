// CLI integration tests for the minimal convert flow.
use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_sheetcast");
    Command::new(exe)
}

fn parse_json(value: &str) -> Value {
    serde_json::from_str(value).expect("valid json")
}

#[test]
fn converts_file_to_canonical_json() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("input.json");
    std::fs::write(&input, "{ \"b\" : 1 ,\n \"a\" : [ true , null ] }").expect("write");

    let output = cmd()
        .arg(input.to_str().unwrap())
        .output()
        .expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.trim_end(), r#"{"b":1,"a":[true,null]}"#);
}

#[test]
fn reads_stdin_when_no_file_given() {
    let mut child = cmd()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"[3,1,2]")
        .expect("write");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout.trim_end(), "[3,1,2]");
}

#[test]
fn parse_error_exit_code_and_json_shape() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("bad.json");
    std::fs::write(&input, "{bad json").expect("write");

    let output = cmd()
        .arg(input.to_str().unwrap())
        .output()
        .expect("run");
    assert_eq!(output.status.code().unwrap(), 3);

    let stderr = String::from_utf8(output.stderr).expect("utf8");
    let line = stderr.lines().next().expect("stderr line");
    let err_json = parse_json(line);
    let inner = err_json
        .get("error")
        .and_then(|value| value.as_object())
        .expect("error object");
    assert_eq!(inner.get("kind").and_then(|v| v.as_str()), Some("Parse"));
    assert!(inner.get("message").and_then(|v| v.as_str()).is_some());
}

#[test]
fn missing_file_exit_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let absent = temp.path().join("absent.json");

    let output = cmd()
        .arg(absent.to_str().unwrap())
        .output()
        .expect("run");
    assert_eq!(output.status.code().unwrap(), 9);
}

#[test]
fn usage_error_exit_code() {
    let output = cmd().arg("--no-such-flag").output().expect("run");
    assert_eq!(output.status.code().unwrap(), 2);
}

#[test]
fn depth_guard_flag_maps_to_exit_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("deep.json");
    std::fs::write(&input, "[[[[0]]]]").expect("write");

    let output = cmd()
        .args(["--max-depth", "2", input.to_str().unwrap()])
        .output()
        .expect("run");
    assert_eq!(output.status.code().unwrap(), 8);
}

#[test]
fn pretty_output_is_indented_without_ansi_by_default() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = temp.path().join("input.json");
    std::fs::write(&input, r#"{"a":1}"#).expect("write");

    let output = cmd()
        .args(["--pretty", input.to_str().unwrap()])
        .output()
        .expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(stdout, "{\n  \"a\": 1\n}\n");
    assert!(!stdout.contains('\u{1b}'));
}

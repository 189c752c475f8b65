use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::{Value, json};
use tempfile::TempDir;

const PARTS: &str = "region,int,bool,event-id,object";

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("gnmsg"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn sample_dump() -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join("put_request")
        .join("input.hex")
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> Value {
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    serde_json::from_str(&stdout).expect("valid json")
}

#[test]
fn help_supports_decode_and_dump() {
    cmd()
        .args(["message", "decode", "--help"])
        .assert()
        .success();
    cmd().args(["message", "dump", "--help"]).assert().success();
}

#[test]
fn part_decodes_int_example() {
    let assert = cmd()
        .args(["part", "int", "00000000 01 0000002a"])
        .assert()
        .success();
    assert_eq!(
        stdout_json(&assert),
        json!({
            "part": {"Kind": "int", "Size": 0, "IsObject": 1, "Value": "2a"},
            "next_offset": 9
        })
    );
}

#[test]
fn part_honours_offset() {
    let assert = cmd()
        .args(["part", "bool", "ffff 00000001 00 02", "--offset", "2"])
        .assert()
        .success();
    let value = stdout_json(&assert);
    assert_eq!(value["part"]["Value"], "True");
    assert_eq!(value["next_offset"], 8);
}

#[test]
fn part_truncated_shows_error_and_hint() {
    cmd()
        .args(["part", "event-id", "00000012 00 03"])
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("payload too short")).and(contains("hint:")));
}

#[test]
fn part_rejects_unknown_kind() {
    cmd()
        .args(["part", "long", "00"])
        .assert()
        .failure()
        .stderr(contains("unknown part kind"));
}

#[test]
fn part_rejects_invalid_hex() {
    cmd()
        .args(["part", "int", "0g"])
        .assert()
        .failure()
        .stderr(contains("invalid hex input"));
}

#[test]
fn scan_decodes_tagged_parts() {
    let assert = cmd()
        .args(["message", "scan", "02 00000002 00 6162 04 00000001 00 00"])
        .assert()
        .success();
    let value = stdout_json(&assert);
    assert_eq!(value["parts"][0]["Name"], "ab");
    assert_eq!(value["parts"][1]["Value"], "False");
}

#[test]
fn scan_unknown_tag_lists_tags() {
    cmd()
        .args(["message", "scan", "09"])
        .assert()
        .failure()
        .stderr(contains("unknown part tag").and(contains("3=event-id")));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.hex");
    let report = temp.path().join("report.json");

    cmd()
        .args(["message", "decode"])
        .arg(missing)
        .args(["--parts", PARTS, "-o"])
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn stdout_outputs_json_report() {
    let assert = cmd()
        .args(["message", "decode"])
        .arg(sample_dump())
        .args(["--parts", PARTS, "--stdout"])
        .assert()
        .success();
    let value = stdout_json(&assert);
    assert_eq!(value["summary"]["messages_total"], 4);
    assert_eq!(value["messages"][0]["message"]["parts"][0]["Name"], "/orders");
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .args(["message", "decode"])
        .arg(sample_dump())
        .args(["--parts", PARTS, "--stdout", "-o"])
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .args(["message", "decode"])
        .arg(sample_dump())
        .args(["--parts", PARTS, "-o"])
        .arg(report)
        .args(["--pretty", "--compact"])
        .assert()
        .failure()
        .stderr(contains("cannot be used with"));
}

#[test]
fn report_written_to_nested_directory() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("out").join("nested").join("report.json");

    cmd()
        .args(["message", "decode"])
        .arg(sample_dump())
        .args(["--parts", PARTS, "-o"])
        .arg(&report)
        .assert()
        .success()
        .stderr(contains("OK:"));

    let text = std::fs::read_to_string(&report).expect("report file");
    let value: Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["report_version"], 1);
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .args(["message", "decode"])
        .arg(sample_dump())
        .args(["--parts", PARTS, "-o"])
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(contains("OK:").not());
}

#[test]
fn list_errors_outputs_lines() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .args(["message", "decode"])
        .arg(sample_dump())
        .args(["--parts", PARTS, "-o"])
        .arg(report)
        .arg("--list-errors")
        .assert()
        .success()
        .stderr(contains("Failed messages:").and(contains("line 4:")));
}

#[test]
fn strict_fails_when_messages_failed() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .args(["message", "decode"])
        .arg(sample_dump())
        .args(["--parts", PARTS, "-o"])
        .arg(report)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("2 message(s) failed to decode"));
}

#[test]
fn unsupported_extension_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("capture.bin");
    std::fs::write(&input, "00").expect("write input");

    cmd()
        .args(["message", "decode"])
        .arg(input)
        .args(["--parts", "int", "--stdout"])
        .assert()
        .failure()
        .stderr(contains("unsupported input format"));
}

#[test]
fn glob_with_multiple_matches_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    std::fs::write(temp.path().join("a.hex"), "").expect("write a");
    std::fs::write(temp.path().join("b.hex"), "").expect("write b");

    cmd()
        .args(["message", "decode"])
        .arg(temp.path().join("*.hex"))
        .args(["--parts", "int", "--stdout"])
        .assert()
        .failure()
        .stderr(contains("multiple files match pattern"));
}

#[test]
fn report_path_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("capture.hex");
    std::fs::write(&input, "").expect("write input");

    cmd()
        .args(["message", "decode"])
        .arg(&input)
        .args(["--parts", "int", "-o"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("report path must differ from input"));
}

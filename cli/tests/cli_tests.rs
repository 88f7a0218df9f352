//! CLI binary integration tests using assert_cmd + predicates.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("jsontools").expect("binary should exist")
}

#[test]
fn flatten_writes_to_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    fs::write(&input, r#"{"a":{"b":1}}"#).unwrap();

    cmd()
        .args(["flatten", input.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.trim(), r#"{"a.b":1}"#);
}

#[test]
fn flatten_reads_stdin_and_writes_stdout() {
    cmd()
        .arg("flatten")
        .write_stdin(r#"{"a":{"b":1}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""a.b":1"#));
}

#[test]
fn pretty_flag_indents_output() {
    cmd()
        .args(["--pretty", "flatten"])
        .write_stdin(r#"{"a":{"b":1}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\n"));
}

#[test]
fn schema_infers_type_fragment() {
    cmd()
        .arg("schema")
        .write_stdin(r#"{"a":1}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"object\""));
}

#[test]
fn path_types_maps_leaves_to_type_names() {
    cmd()
        .arg("path-types")
        .write_stdin(r#"{"a":"x"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\":\"string\""));
}

#[test]
fn remove_nulls_drops_null_members() {
    cmd()
        .arg("remove-nulls")
        .write_stdin(r#"{"a":1,"b":null}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\":1").and(predicate::str::contains("b").not()));
}

#[test]
fn replace_keys_renames_matching_keys() {
    cmd()
        .args(["replace-keys", "old_.*", "new_key"])
        .write_stdin(r#"{"old_x":1}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"new_key\":1"));
}

#[test]
fn invalid_json_input_fails_with_nonzero_exit() {
    cmd()
        .arg("flatten")
        .write_stdin("{not json}")
        .assert()
        .failure();
}

#[test]
fn batch_flatten_reports_per_document_results() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    fs::write(&a, r#"{"x":1}"#).unwrap();
    fs::write(&b, r#"{"y":{"z":2}}"#).unwrap();

    cmd()
        .args(["batch", "--op", "flatten"])
        .arg(a.to_str().unwrap())
        .arg(b.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"x":1}"#).and(predicate::str::contains(r#"{"y.z":2}"#)));
}

#[test]
fn batch_reports_failing_document_without_aborting_the_others() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    fs::write(&a, r#"{"x":1}"#).unwrap();
    fs::write(&b, "{not json}").unwrap();

    cmd()
        .args(["batch", "--op", "flatten"])
        .arg(a.to_str().unwrap())
        .arg(b.to_str().unwrap())
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#"{"x":1}"#));
}

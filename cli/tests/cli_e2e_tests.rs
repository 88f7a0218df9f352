//! CLI end-to-end tests chaining multiple subcommands through temp files,
//! mirroring how a user would actually invoke the binary in a pipeline.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("jsontools").expect("binary should exist")
}

#[test]
fn remove_nulls_then_flatten_via_files() {
    let dir = TempDir::new().unwrap();
    let raw = dir.path().join("raw.json");
    let cleaned = dir.path().join("cleaned.json");
    let flattened = dir.path().join("flat.json");

    fs::write(&raw, r#"{"user":{"name":"Ann","note":null}}"#).unwrap();

    cmd()
        .args(["remove-nulls", raw.to_str().unwrap()])
        .args(["-o", cleaned.to_str().unwrap()])
        .assert()
        .success();

    let cleaned_content = fs::read_to_string(&cleaned).unwrap();
    assert!(!cleaned_content.contains("note"));

    cmd()
        .args(["flatten", cleaned.to_str().unwrap()])
        .args(["-o", flattened.to_str().unwrap()])
        .assert()
        .success();

    let flattened_content = fs::read_to_string(&flattened).unwrap();
    assert_eq!(flattened_content.trim(), r#"{"user.name":"Ann"}"#);
}

#[test]
fn batch_schema_merges_multiple_files_into_one_document() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    fs::write(&a, r#"{"id":1}"#).unwrap();
    fs::write(&b, r#"{"name":"x"}"#).unwrap();

    cmd()
        .args(["batch", "--op", "schema"])
        .arg(a.to_str().unwrap())
        .arg(b.to_str().unwrap())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"id\"")
                .and(predicate::str::contains("\"name\"")),
        );
}

#[test]
fn verbose_flag_emits_debug_logs_on_stderr() {
    cmd()
        .args(["--verbose", "flatten"])
        .write_stdin(r#"{"a":1}"#)
        .assert()
        .success();
}

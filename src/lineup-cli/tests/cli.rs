//! End-to-end tests for the `lineup` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

const SAMPLE: &str = include_str!("fixtures/sample.c");
const SAMPLE_RENAMED: &str = include_str!("fixtures/sample.renamed.c");

fn lineup() -> Command {
    Command::cargo_bin("lineup").expect("binary not built")
}

fn write_temp(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sample.c");
    std::fs::write(&path, content).expect("write fixture");
    (dir, path)
}

#[test]
fn test_missing_arguments_prints_usage() {
    lineup()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_too_many_arguments_fails() {
    lineup()
        .args(["a", "b", "c", "d"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_renames_and_realigns_sample() {
    let (_dir, path) = write_temp(SAMPLE);

    lineup()
        .arg("gtk_text_buffer_insert_at_cursor")
        .arg("gtk_text_buffer_insert_interactive")
        .arg(&path)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), SAMPLE_RENAMED);
}

#[test]
fn test_no_match_leaves_file_byte_identical() {
    let (_dir, path) = write_temp(SAMPLE);

    lineup()
        .args(["does_not_occur_anywhere", "replacement"])
        .arg(&path)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), SAMPLE);
}

#[test]
fn test_missing_file_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.c");

    lineup()
        .args(["search", "replacement"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));

    assert!(!path.exists());
}

#[test]
fn test_empty_search_text_fails_and_leaves_file() {
    let (_dir, path) = write_temp("content\n");

    lineup()
        .args(["", "replacement"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "content\n");
}

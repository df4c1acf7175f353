//! End-to-end CLI tests for chatlens.
//!
//! These run the actual binary against transcripts written to a temporary
//! directory and check the printed summary and written tables.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_tests
//! ```

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

const TRANSCRIPT: &str = "\
1/1/24, 9:00 am - Messages to this group are now secured
1/1/24, 9:01 am - Alice: Hello hello world 😂
1/1/24, 9:02 am - Bob: <Media omitted>
2/1/24, 10:30 pm - Alice: see https://example.com
3/1/24, 11:45 pm - Carol: the world is round";

fn setup() -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("chat.txt");
    fs::write(&input, TRANSCRIPT).unwrap();
    (dir, input)
}

fn chatlens() -> Command {
    Command::cargo_bin("chatlens").unwrap()
}

#[test]
fn test_summary_overall() {
    let (_dir, input) = setup();

    chatlens()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection: Overall"))
        .stdout(predicate::str::contains("Messages:  5"))
        .stdout(predicate::str::contains("Media:     1"))
        .stdout(predicate::str::contains("Links:     1"))
        .stdout(predicate::str::contains("Most busy users:"))
        .stdout(predicate::str::contains("group_notification"))
        .stdout(predicate::str::contains("😂"));
}

#[test]
fn test_summary_single_user() {
    let (_dir, input) = setup();

    chatlens()
        .arg(&input)
        .args(["--user", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection: Alice"))
        .stdout(predicate::str::contains("Messages:  2"))
        .stdout(predicate::str::contains("Most busy users:").not());
}

#[test]
fn test_stop_words_file() {
    let (dir, input) = setup();
    let stop_words = dir.path().join("stop.txt");
    fs::write(&stop_words, "hello\nthe is").unwrap();

    chatlens()
        .arg(&input)
        .arg("--stop-words")
        .arg(&stop_words)
        .assert()
        .success()
        .stdout(predicate::str::contains("world"))
        .stdout(predicate::str::contains("hello").not());
}

#[test]
fn test_missing_stop_words_file() {
    let (dir, input) = setup();

    chatlens()
        .arg(&input)
        .arg("--stop-words")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load stop words"));
}

#[test]
fn test_write_csv_table() {
    let (dir, input) = setup();
    let output = dir.path().join("records.csv");

    chatlens()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 5 rows"));

    let csv = fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().unwrap(),
        "date,user,message,year,month_num,month,day,only_date,hour,minute,day_name,period"
    );
    assert!(csv.contains("group_notification"));
    assert!(csv.contains("23-00"));
}

#[test]
fn test_write_jsonl_for_one_user() {
    let (dir, input) = setup();
    let output = dir.path().join("alice.jsonl");

    chatlens()
        .arg(&input)
        .args(["--user", "Alice", "-o"])
        .arg(&output)
        .assert()
        .success();

    let jsonl = fs::read_to_string(&output).unwrap();
    let rows: Vec<serde_json::Value> = jsonl
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["user"] == "Alice"));
}

#[test]
fn test_explicit_json_format() {
    let (dir, input) = setup();
    let output = dir.path().join("records.out");

    chatlens()
        .arg(&input)
        .args(["--format", "json", "-o"])
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 5);
}

#[test]
fn test_date_filters() {
    let (_dir, input) = setup();

    chatlens()
        .arg(&input)
        .args(["--after", "2024-01-02", "--before", "2024-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 parsed, 1 after date filters"));
}

#[test]
fn test_invalid_date() {
    let (_dir, input) = setup();

    chatlens()
        .arg(&input)
        .args(["--after", "01/02/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_unknown_output_extension() {
    let (dir, input) = setup();

    chatlens()
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("records.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown file extension"));
}

#[test]
fn test_missing_input_file() {
    chatlens()
        .arg("/definitely/not/a/chat.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_empty_transcript() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    fs::write(&input, "no timestamps here\n").unwrap();

    chatlens()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:  0"));
}

#[test]
fn test_help() {
    chatlens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--stop-words"))
        .stdout(predicate::str::contains("EXAMPLES"));
}

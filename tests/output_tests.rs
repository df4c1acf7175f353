//! Tests for the table writers and format dispatch.

#![cfg(all(feature = "csv-output", feature = "json-output"))]

use chatlens::config::ParserConfig;
use chatlens::core::table::COLUMNS;
use chatlens::format::{OutputFormat, to_format_string, write_to_format};
use chatlens::parser::TranscriptParser;
use chatlens::MessageRecord;
use std::fs;
use tempfile::tempdir;

fn records() -> Vec<MessageRecord> {
    TranscriptParser::new().parse_str(
        "\
1/1/24, 12:10 am - Alice: \"quoted\", with comma
31/2/24, 9:00 am - Bob: impossible date
1/1/24, 11:50 pm - Carol left
1/1/24, 1:00 pm - Dan: multi
line",
    )
}

#[test]
fn test_write_every_format_to_disk() {
    let dir = tempdir().unwrap();
    let config = ParserConfig::default();

    for &format in OutputFormat::all() {
        let path = dir.path().join(format!("records.{}", format.extension()));
        let path = path.to_str().unwrap();

        write_to_format(&records(), path, format, &config).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert_eq!(written, to_format_string(&records(), format, &config).unwrap());
    }
}

#[test]
fn test_csv_escaping_and_empty_cells() {
    let csv = to_format_string(&records(), OutputFormat::Csv, &ParserConfig::default()).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);

    assert_eq!(&rows[0][2], "\"quoted\", with comma");
    assert_eq!(&rows[0][11], "00-1");

    // undated: only user and message are filled
    for (i, column) in COLUMNS.iter().enumerate() {
        match *column {
            "user" => assert_eq!(&rows[1][i], "Bob"),
            "message" => assert_eq!(&rows[1][i], "impossible date"),
            _ => assert_eq!(&rows[1][i], "", "{column} should be empty"),
        }
    }

    assert_eq!(&rows[2][1], "group_notification");
    assert_eq!(&rows[2][11], "23-00");
    assert_eq!(&rows[3][2], "multi\nline");
}

#[test]
fn test_json_nulls_for_undated() {
    let json = to_format_string(&records(), OutputFormat::Json, &ParserConfig::default()).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["hour"], 0);
    assert_eq!(rows[0]["only_date"], "2024-01-01");
    assert!(rows[1]["date"].is_null());
    assert!(rows[1]["period"].is_null());
    assert_eq!(rows[1]["user"], "Bob");

    let keys: Vec<&String> = rows[0].as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), COLUMNS.len());
}

#[test]
fn test_jsonl_one_object_per_line() {
    let jsonl =
        to_format_string(&records(), OutputFormat::Jsonl, &ParserConfig::default()).unwrap();

    let lines: Vec<&str> = jsonl.lines().collect();
    assert_eq!(lines.len(), 4);
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.is_object());
    }
}

#[test]
fn test_custom_system_label_in_output() {
    let config = ParserConfig::new().with_system_author("system");
    let csv = to_format_string(&records(), OutputFormat::Csv, &config).unwrap();
    assert!(csv.contains(",system,Carol left,"));
    assert!(!csv.contains("group_notification"));
}

#[test]
fn test_write_to_unwritable_path() {
    let result = write_to_format(
        &records(),
        "/definitely/not/a/dir/out.csv",
        OutputFormat::Csv,
        &ParserConfig::default(),
    );
    assert!(result.unwrap_err().is_io());
}

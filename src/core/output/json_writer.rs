//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::config::ParserConfig;
use crate::core::table::to_rows;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to a JSON file as an array of rows.
///
/// # Format
/// ```json
/// [
///   {"date": "2024-01-01 10:00:00", "user": "Alice", "message": "Hello", "year": 2024, ...},
///   {"date": null, "user": "group_notification", "message": "Bob left", "year": null, ...}
/// ]
/// ```
pub fn write_json(records: &[MessageRecord], output_path: &str, config: &ParserConfig) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array string.
pub fn to_json(records: &[MessageRecord], config: &ParserConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_rows(records, config))?)
}

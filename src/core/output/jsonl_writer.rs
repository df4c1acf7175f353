//! JSON Lines (JSONL) output writer.
//!
//! One row object per line, which keeps large transcripts easy to stream
//! into dataframe loaders.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::config::ParserConfig;
use crate::core::table::Row;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to a JSONL (JSON Lines) file.
///
/// Each line is a complete row object:
/// ```jsonl
/// {"date":"2024-01-01 10:00:00","user":"Alice","message":"Hello",...}
/// {"date":"2024-01-01 10:01:00","user":"Bob","message":"Hi",...}
/// ```
pub fn write_jsonl(records: &[MessageRecord], output_path: &str, config: &ParserConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &[MessageRecord], config: &ParserConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(records: &[MessageRecord], sink: &mut W, config: &ParserConfig) -> Result<()> {
    for record in records {
        let line = serde_json::to_string(&Row::from_record(record, &config.system_author))?;
        writeln!(sink, "{line}")?;
    }
    Ok(())
}

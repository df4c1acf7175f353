//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::config::ParserConfig;
use crate::core::table::{COLUMNS, Row};
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - Header: the twelve [`COLUMNS`]
/// - Undated records leave every calendar column empty
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: &str, config: &ParserConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(records, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(records: &[MessageRecord], config: &ParserConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: Write>(records: &[MessageRecord], sink: W, config: &ParserConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(sink);

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record(Row::from_record(record, &config.system_author).fields())?;
    }

    writer.flush()?;
    Ok(())
}

//! Flat tabular view of parsed records.
//!
//! Downstream tools (spreadsheets, dataframe libraries, the writers in
//! [`crate::core::output`]) consume records as rows with fixed columns:
//!
//! | Column | Type | Undated records |
//! |--------|------|-----------------|
//! | `date` | `YYYY-MM-DD HH:MM:SS` | empty |
//! | `user` | author label | always set |
//! | `message` | payload | always set |
//! | `year`, `month_num`, `month`, `day` | calendar fields | empty |
//! | `only_date` | `YYYY-MM-DD` | empty |
//! | `hour`, `minute`, `day_name` | time fields | empty |
//! | `period` | hourly bucket label | empty |

use serde::Serialize;

use crate::config::ParserConfig;
use crate::record::MessageRecord;

/// Column names, in output order.
pub const COLUMNS: [&str; 12] = [
    "date",
    "user",
    "message",
    "year",
    "month_num",
    "month",
    "day",
    "only_date",
    "hour",
    "minute",
    "day_name",
    "period",
];

/// One record projected onto [`COLUMNS`].
///
/// The calendar columns are `Some` together or `None` together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub date: Option<String>,
    pub user: String,
    pub message: String,
    pub year: Option<i32>,
    pub month_num: Option<u32>,
    pub month: Option<String>,
    pub day: Option<u32>,
    pub only_date: Option<String>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub day_name: Option<String>,
    pub period: Option<String>,
}

impl Row {
    /// Projects a record, labelling system notices with `system_author`.
    pub fn from_record(record: &MessageRecord, system_author: &str) -> Self {
        let ts = record.timestamp();
        Self {
            date: ts.map(|t| t.datetime().format("%Y-%m-%d %H:%M:%S").to_string()),
            user: record.author().label(system_author).to_string(),
            message: record.text().to_string(),
            year: ts.map(|t| t.year()),
            month_num: ts.map(|t| t.month_num()),
            month: ts.map(|t| t.month_name()),
            day: ts.map(|t| t.day()),
            only_date: ts.map(|t| t.only_date().format("%Y-%m-%d").to_string()),
            hour: ts.map(|t| t.hour()),
            minute: ts.map(|t| t.minute()),
            day_name: ts.map(|t| t.day_name()),
            period: ts.map(|t| t.period().to_string()),
        }
    }

    /// Returns the row as strings in [`COLUMNS`] order, `None` as empty.
    pub fn fields(&self) -> [String; 12] {
        fn cell<T: ToString>(value: Option<&T>) -> String {
            value.map(ToString::to_string).unwrap_or_default()
        }

        [
            cell(self.date.as_ref()),
            self.user.clone(),
            self.message.clone(),
            cell(self.year.as_ref()),
            cell(self.month_num.as_ref()),
            cell(self.month.as_ref()),
            cell(self.day.as_ref()),
            cell(self.only_date.as_ref()),
            cell(self.hour.as_ref()),
            cell(self.minute.as_ref()),
            cell(self.day_name.as_ref()),
            cell(self.period.as_ref()),
        ]
    }
}

/// Projects every record, in order.
///
/// # Example
///
/// ```
/// use chatlens::config::ParserConfig;
/// use chatlens::core::table::to_rows;
/// use chatlens::parser::TranscriptParser;
///
/// let records = TranscriptParser::new().parse_str("1/1/24, 12:15 am - Alice joined");
/// let rows = to_rows(&records, &ParserConfig::default());
///
/// assert_eq!(rows[0].user, "group_notification");
/// assert_eq!(rows[0].period.as_deref(), Some("00-1"));
/// ```
pub fn to_rows(records: &[MessageRecord], config: &ParserConfig) -> Vec<Row> {
    records
        .iter()
        .map(|r| Row::from_record(r, &config.system_author))
        .collect()
}

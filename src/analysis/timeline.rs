//! Message counts over calendar time.
//!
//! Undated records carry no calendar fields and are skipped by everything
//! here.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::{ranked, selected};
use crate::config::AnalysisConfig;
use crate::core::filter::UserSelection;
use crate::record::{MessageRecord, Timestamp};

/// Message count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_num: u32,
    /// Full month name, e.g. `"January"`.
    pub month: String,
    pub count: usize,
    /// `"<Month>-<year>"`, e.g. `"January-2024"`.
    pub label: String,
}

fn timestamps<'a>(
    records: &'a [MessageRecord],
    selection: &'a UserSelection,
    config: &'a AnalysisConfig,
) -> impl Iterator<Item = &'a Timestamp> + 'a {
    selected(records, selection, config).filter_map(MessageRecord::timestamp)
}

/// Counts messages per month, oldest first.
///
/// # Example
///
/// ```
/// use chatlens::analysis::monthly_timeline;
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::filter::UserSelection;
/// use chatlens::parser::TranscriptParser;
///
/// let records = TranscriptParser::new().parse_str(
///     "3/2/24, 9:00 am - A: x\n9/1/24, 9:00 am - A: y\n10/2/24, 9:00 am - B: z",
/// );
/// let timeline = monthly_timeline(&records, &UserSelection::Overall, &AnalysisConfig::default());
///
/// assert_eq!(timeline[0].label, "January-2024");
/// assert_eq!(timeline[1].label, "February-2024");
/// assert_eq!(timeline[1].count, 2);
/// ```
pub fn monthly_timeline(
    records: &[MessageRecord],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), (String, usize)> = BTreeMap::new();
    for ts in timestamps(records, selection, config) {
        months
            .entry((ts.year(), ts.month_num()))
            .or_insert_with(|| (ts.month_name(), 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month_num), (month, count))| MonthlyPoint {
            year,
            month_num,
            label: format!("{month}-{year}"),
            month,
            count,
        })
        .collect()
}

/// Counts messages per calendar day, oldest first. Days without messages
/// are absent.
pub fn daily_timeline(
    records: &[MessageRecord],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> Vec<(NaiveDate, usize)> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for ts in timestamps(records, selection, config) {
        *days.entry(ts.only_date()).or_default() += 1;
    }
    days.into_iter().collect()
}

/// Counts messages per weekday name, busiest first.
pub fn week_activity_map(
    records: &[MessageRecord],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> Vec<(String, usize)> {
    ranked(timestamps(records, selection, config).map(Timestamp::day_name))
}

/// Counts messages per month name across all years, busiest first.
pub fn month_activity_map(
    records: &[MessageRecord],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> Vec<(String, usize)> {
    ranked(timestamps(records, selection, config).map(Timestamp::month_name))
}

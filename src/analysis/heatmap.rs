//! Weekday by hour-period activity grid.
//!
//! Rows are always Monday through Sunday. Columns are only the period
//! labels that occur in the selection.

use std::collections::BTreeSet;

use serde::Serialize;

use super::selected;
use crate::config::AnalysisConfig;
use crate::core::filter::UserSelection;
use crate::record::MessageRecord;

/// Heatmap rows, in order.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Message counts pivoted by weekday and hourly period.
///
/// `counts[d][p]` is the number of messages on `days[d]` in `periods[p]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub days: Vec<String>,
    /// Period labels that occur in the data, sorted as strings.
    pub periods: Vec<String>,
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Returns the count for a weekday name and period label, or `None` if
    /// either is not a row or column.
    pub fn get(&self, day: &str, period: &str) -> Option<usize> {
        let d = self.days.iter().position(|x| x == day)?;
        let p = self.periods.iter().position(|x| x == period)?;
        Some(self.counts[d][p])
    }
}

/// Builds the weekday × period heatmap.
///
/// Columns are the period labels present in the selection, ordered
/// lexicographically like a dataframe pivot (so `"10-11"` sorts before
/// `"2-3"`). Cells with no messages are zero. Undated records are skipped.
///
/// # Example
///
/// ```
/// use chatlens::analysis::activity_heatmap;
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::filter::UserSelection;
/// use chatlens::parser::TranscriptParser;
///
/// let records = TranscriptParser::new().parse_str(
///     "1/1/24, 12:30 am - A: late\n2/1/24, 11:10 pm - B: later",
/// );
/// let heatmap = activity_heatmap(&records, &UserSelection::Overall, &AnalysisConfig::default());
///
/// assert_eq!(heatmap.periods, vec!["00-1", "23-00"]);
/// assert_eq!(heatmap.get("Monday", "00-1"), Some(1));
/// assert_eq!(heatmap.get("Tuesday", "00-1"), Some(0));
/// ```
pub fn activity_heatmap(
    records: &[MessageRecord],
    selection: &UserSelection,
    config: &AnalysisConfig,
) -> Heatmap {
    let cells: Vec<(String, String)> = selected(records, selection, config)
        .filter_map(MessageRecord::timestamp)
        .map(|ts| (ts.day_name(), ts.period().to_string()))
        .collect();

    let periods: Vec<String> = cells
        .iter()
        .map(|(_, period)| period.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut counts = vec![vec![0; periods.len()]; WEEKDAYS.len()];
    for (day, period) in &cells {
        let d = WEEKDAYS.iter().position(|w| *w == day.as_str());
        let p = periods.binary_search(period).ok();
        if let (Some(d), Some(p)) = (d, p) {
            counts[d][p] += 1;
        }
    }

    Heatmap {
        days: WEEKDAYS.iter().map(ToString::to_string).collect(),
        periods,
        counts,
    }
}

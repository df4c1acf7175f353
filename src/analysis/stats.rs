//! Headline totals and per-user activity.

use serde::Serialize;

use super::{LinkExtractor, ranked, selected};
use crate::config::AnalysisConfig;
use crate::core::filter::UserSelection;
use crate::record::MessageRecord;

/// Headline totals for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    /// Number of records, system notices included.
    pub messages: usize,
    /// Whitespace-separated tokens across all message text.
    pub words: usize,
    /// Records whose text is exactly the media placeholder.
    pub media: usize,
    /// Links found by the [`LinkExtractor`].
    pub links: usize,
}

/// Computes [`ChatStats`] for the selected records.
pub fn fetch_stats(
    records: &[MessageRecord],
    selection: &UserSelection,
    links: &dyn LinkExtractor,
    config: &AnalysisConfig,
) -> ChatStats {
    selected(records, selection, config).fold(ChatStats::default(), |mut stats, record| {
        stats.messages += 1;
        stats.words += record.text().split_whitespace().count();
        if record.is_media(&config.media_placeholder) {
            stats.media += 1;
        }
        stats.links += links.find_urls(record.text()).len();
        stats
    })
}

/// One user's share of all records, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub name: String,
    /// Rounded to two decimals.
    pub percent: f64,
}

/// Result of [`most_busy_users`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The `top_users` most active authors with their record counts.
    pub top: Vec<(String, usize)>,
    /// Every author's share of the transcript, most active first.
    pub shares: Vec<UserShare>,
}

/// Ranks authors by record count over the whole transcript.
///
/// System notices are counted under the configured system label, so they
/// appear in the ranking like any other author.
///
/// # Example
///
/// ```
/// use chatlens::analysis::most_busy_users;
/// use chatlens::config::AnalysisConfig;
/// use chatlens::parser::TranscriptParser;
///
/// let records = TranscriptParser::new().parse_str(
///     "1/1/24, 9:00 am - A: x\n1/1/24, 9:01 am - B: y\n1/1/24, 9:02 am - A: z",
/// );
/// let busy = most_busy_users(&records, &AnalysisConfig::default());
///
/// assert_eq!(busy.top[0], ("A".to_string(), 2));
/// assert_eq!(busy.shares[1].percent, 33.33);
/// ```
pub fn most_busy_users(records: &[MessageRecord], config: &AnalysisConfig) -> BusyUsers {
    let counts = ranked(
        records
            .iter()
            .map(|r| r.author().label(&config.system_author).to_string()),
    );
    let total = records.len();

    let shares = counts
        .iter()
        .map(|(name, count)| UserShare {
            name: name.clone(),
            percent: round2(*count as f64 / total as f64 * 100.0),
        })
        .collect();

    BusyUsers {
        top: counts.into_iter().take(config.top_users).collect(),
        shares,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

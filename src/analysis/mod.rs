//! Statistics over parsed records.
//!
//! These are read-only consumers of [`MessageRecord`]s: they group and count,
//! and never modify what the parser produced. Each takes a
//! [`UserSelection`](crate::core::filter::UserSelection) ("Overall" or one
//! user) and the collaborators it needs, passed in explicitly.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`fetch_stats`] | message, word, media and link totals |
//! | [`most_busy_users`] | top users and every user's share |
//! | [`most_common_words`] | top words, stop words removed |
//! | [`word_cloud_text`] | corpus for a word-cloud renderer |
//! | [`emoji_counts`] | emoji frequencies |
//! | [`monthly_timeline`] / [`daily_timeline`] | message counts over time |
//! | [`week_activity_map`] / [`month_activity_map`] | busiest weekdays / months |
//! | [`activity_heatmap`] | weekday × hourly-period counts |
//!
//! # Example
//!
//! ```
//! use chatlens::analysis::{RegexLinkExtractor, fetch_stats};
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::filter::UserSelection;
//! use chatlens::parser::TranscriptParser;
//!
//! let records = TranscriptParser::new().parse_str(
//!     "1/1/24, 9:00 am - Alice: see https://example.com\n1/1/24, 9:01 am - Bob: <Media omitted>",
//! );
//!
//! let stats = fetch_stats(
//!     &records,
//!     &UserSelection::Overall,
//!     &RegexLinkExtractor::new(),
//!     &AnalysisConfig::default(),
//! );
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.media, 1);
//! assert_eq!(stats.links, 1);
//! ```
//!
//! [`MessageRecord`]: crate::record::MessageRecord

mod collaborators;
mod emoji;
mod heatmap;
mod stats;
mod timeline;
mod words;

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::AnalysisConfig;
use crate::core::filter::UserSelection;
use crate::record::MessageRecord;

pub use collaborators::{
    EmojiClassifier, LinkExtractor, RegexLinkExtractor, StopWords, UnicodeEmojiClassifier,
};
pub use emoji::emoji_counts;
pub use heatmap::{Heatmap, WEEKDAYS, activity_heatmap};
pub use stats::{BusyUsers, ChatStats, UserShare, fetch_stats, most_busy_users};
pub use timeline::{
    MonthlyPoint, daily_timeline, month_activity_map, monthly_timeline, week_activity_map,
};
pub use words::{most_common_words, word_cloud_text};

/// Records covered by `selection`, with system notices labelled per `config`.
fn selected<'a>(
    records: &'a [MessageRecord],
    selection: &'a UserSelection,
    config: &'a AnalysisConfig,
) -> impl Iterator<Item = &'a MessageRecord> + 'a {
    records
        .iter()
        .filter(move |r| selection.matches_with(r, &config.system_author))
}

/// Counts items, most frequent first; equal counts keep first-seen order.
fn ranked<K: Eq + Hash + Clone>(items: impl IntoIterator<Item = K>) -> Vec<(K, usize)> {
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

//! Emoji frequency, classified by an injected [`EmojiClassifier`].

use super::{EmojiClassifier, ranked, selected};
use crate::config::AnalysisConfig;
use crate::core::filter::UserSelection;
use crate::record::MessageRecord;

/// Counts every emoji character in the selected messages, most frequent
/// first.
///
/// Classification is per `char`: skin-tone modifiers and the parts of a
/// joined sequence are counted separately.
///
/// # Example
///
/// ```
/// use chatlens::analysis::{UnicodeEmojiClassifier, emoji_counts};
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::filter::UserSelection;
/// use chatlens::parser::TranscriptParser;
///
/// let records = TranscriptParser::new().parse_str("1/1/24, 9:00 am - A: 😂😂 ok 👍");
/// let emoji = emoji_counts(
///     &records,
///     &UserSelection::Overall,
///     &UnicodeEmojiClassifier::new(),
///     &AnalysisConfig::default(),
/// );
///
/// assert_eq!(emoji, vec![("😂".to_string(), 2), ("👍".to_string(), 1)]);
/// ```
pub fn emoji_counts(
    records: &[MessageRecord],
    selection: &UserSelection,
    classifier: &dyn EmojiClassifier,
    config: &AnalysisConfig,
) -> Vec<(String, usize)> {
    ranked(
        selected(records, selection, config)
            .flat_map(|r| r.text().chars())
            .filter(|&c| classifier.is_emoji(c))
            .map(String::from),
    )
}

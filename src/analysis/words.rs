//! Word frequencies and word-cloud corpus.

use super::{StopWords, ranked, selected};
use crate::config::AnalysisConfig;
use crate::core::filter::UserSelection;
use crate::record::MessageRecord;

/// Records that carry human-written text: no notices, no media placeholders.
fn texts<'a>(
    records: &'a [MessageRecord],
    selection: &'a UserSelection,
    config: &'a AnalysisConfig,
) -> impl Iterator<Item = &'a str> + 'a {
    selected(records, selection, config)
        .filter(|r| !r.is_system() && !r.is_media(&config.media_placeholder))
        .map(MessageRecord::text)
}

/// Lowercases `token` and keeps only its ASCII letters.
fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Returns the `top_words` most frequent words, most frequent first.
///
/// # Example
///
/// ```
/// use chatlens::analysis::{StopWords, most_common_words};
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::filter::UserSelection;
/// use chatlens::parser::TranscriptParser;
///
/// let records = TranscriptParser::new().parse_str(
///     "1/1/24, 9:00 am - A: Hello, hello world!\n1/1/24, 9:01 am - B: the world",
/// );
/// let words = most_common_words(
///     &records,
///     &UserSelection::Overall,
///     &StopWords::from_text("the"),
///     &AnalysisConfig::default(),
/// );
///
/// assert_eq!(words[0], ("hello".to_string(), 2));
/// assert_eq!(words[1], ("world".to_string(), 2));
/// assert_eq!(words.len(), 2);
/// ```
pub fn most_common_words(
    records: &[MessageRecord],
    selection: &UserSelection,
    stop_words: &StopWords,
    config: &AnalysisConfig,
) -> Vec<(String, usize)> {
    let words = texts(records, selection, config)
        .flat_map(str::split_whitespace)
        .map(clean_token)
        .filter(|w| !w.is_empty() && !stop_words.contains(w));

    let mut counts = ranked(words);
    counts.truncate(config.top_words);
    counts
}

/// Joins the selected messages into one space-separated corpus for a
/// word-cloud renderer.
///
/// Stop words are dropped case-insensitively; the remaining tokens keep
/// their original spelling.
pub fn word_cloud_text(
    records: &[MessageRecord],
    selection: &UserSelection,
    stop_words: &StopWords,
    config: &AnalysisConfig,
) -> String {
    texts(records, selection, config)
        .flat_map(str::split_whitespace)
        .filter(|w| !stop_words.contains(&w.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

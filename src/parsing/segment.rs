//! Splitting a raw transcript into timestamp-delimited segments.
//!
//! Exports have no explicit record separator: a message simply runs until the
//! next timestamp. The segmenter therefore finds every timestamp token and
//! treats the text between two tokens as the body of the first one.

use std::sync::OnceLock;

use regex::Regex;

/// Lexical shape of a message timestamp, e.g. `15/01/2024, 9:05 pm`.
///
/// Day/month digit counts and two- versus four-digit years are accepted
/// alike, and calendar validity is not checked here (`13/13/24` matches).
pub const TIMESTAMP_PATTERN: &str = r"(?i)\d{1,2}/\d{1,2}/\d{2,4},\s*\d{1,2}:\d{2}\s*(?:am|pm)";

pub fn timestamp_regex() -> &'static Regex {
    static TIMESTAMP_REGEX: OnceLock<Regex> = OnceLock::new();
    TIMESTAMP_REGEX
        .get_or_init(|| Regex::new(TIMESTAMP_PATTERN).expect("Failed to compile timestamp regex"))
}

/// A timestamp token and the raw text that follows it.
///
/// Both slices borrow from the transcript. `token` and `raw_body` are
/// adjacent, and consecutive segments are adjacent to each other, so the
/// segments tile the document from the first token to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The matched timestamp token, verbatim.
    pub token: &'a str,
    /// Everything up to the next token (or end of text), untrimmed.
    pub raw_body: &'a str,
    /// Byte offset of `token` in the transcript.
    pub start: usize,
}

impl<'a> Segment<'a> {
    /// Returns the body with surrounding whitespace removed.
    pub fn body(&self) -> &'a str {
        self.raw_body.trim()
    }

    /// Byte offset one past the end of `raw_body`.
    pub fn end(&self) -> usize {
        self.start + self.token.len() + self.raw_body.len()
    }
}

/// Splits `text` into one segment per timestamp token, in document order.
///
/// Text before the first token belongs to no segment. A transcript without
/// any token yields an empty vector.
///
/// # Example
///
/// ```
/// use chatlens::parsing::segment;
///
/// let text = "1/1/24, 10:00 am - Alice: Hi\n1/1/24, 10:01 am - Bob: Hey";
/// let segments = segment(text);
///
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].token, "1/1/24, 10:00 am");
/// assert_eq!(segments[0].body(), "- Alice: Hi");
/// assert_eq!(segments[1].body(), "- Bob: Hey");
/// ```
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let tokens: Vec<regex::Match<'_>> = timestamp_regex().find_iter(text).collect();

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let end = tokens.get(i + 1).map_or(text.len(), |next| next.start());
            Segment {
                token: token.as_str(),
                raw_body: &text[token.end()..end],
                start: token.start(),
            }
        })
        .collect()
}

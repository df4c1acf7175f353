//! Helpers the statistics depend on, passed in rather than global.
//!
//! - [`StopWords`] - tokens excluded from word frequencies
//! - [`LinkExtractor`] - finds URLs in message text ([`RegexLinkExtractor`])
//! - [`EmojiClassifier`] - decides whether a char is an emoji ([`UnicodeEmojiClassifier`])

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::error::{ChatlensError, Result};

/// A set of lowercase tokens to leave out of word statistics.
///
/// # Example
///
/// ```
/// use chatlens::analysis::StopWords;
///
/// let stop_words = StopWords::from_text("the a\nAnd");
/// assert!(stop_words.contains("and"));
/// assert!(!stop_words.contains("hello"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates an empty set; nothing is filtered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from whitespace-separated text, lowercasing each token.
    pub fn from_text(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    /// Reads a stop-word file.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected, since
    /// stop-word lists collected from the web are often mis-encoded.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| ChatlensError::stop_words(path, e))?;
        let stop_words = Self::from_text(&String::from_utf8_lossy(&bytes));
        debug!(path = %path.display(), count = stop_words.len(), "loaded stop words");
        Ok(stop_words)
    }

    /// Returns `true` if `word` is in the set. Matching is exact.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for StopWords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(str::to_lowercase).collect(),
        }
    }
}

/// Finds links in message text.
pub trait LinkExtractor {
    /// Returns every link in `text`, in order of appearance.
    fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Link extractor for scheme URLs, `www.` hosts and bare domains with a
/// common top-level domain.
///
/// # Example
///
/// ```
/// use chatlens::analysis::{LinkExtractor, RegexLinkExtractor};
///
/// let links = RegexLinkExtractor::new();
/// assert_eq!(
///     links.find_urls("see https://example.com/a?b=1, or www.rust-lang.org."),
///     vec!["https://example.com/a?b=1", "www.rust-lang.org"],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RegexLinkExtractor {
    regex: Regex,
}

const LINK_PATTERN: &str = r#"(?i)\b(?:(?:https?|ftp)://|www\.)[^\s<>"']+|\b[a-z0-9][a-z0-9-]*(?:\.[a-z0-9-]+)*\.(?:com|org|net|io|dev|edu|gov|info|app|co|in|uk|de|me|ly|gl|be)\b(?:/[^\s<>"']*)?"#;

/// Trailing characters that end a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

impl Default for RegexLinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexLinkExtractor {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(LINK_PATTERN).expect("Failed to compile link regex"),
        }
    }
}

impl LinkExtractor for RegexLinkExtractor {
    fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.regex
            .find_iter(text)
            // the domain half of an e-mail address is not a link
            .filter(|m| !text[..m.start()].ends_with('@'))
            .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION))
            .filter(|url| !url.is_empty())
            .collect()
    }
}

/// Decides whether a single character is an emoji.
pub trait EmojiClassifier {
    fn is_emoji(&self, c: char) -> bool;
}

/// Emoji classifier based on the Unicode `Extended_Pictographic` and
/// `Emoji_Modifier` properties.
///
/// Keycap bases (`0`-`9`, `#`, `*`) and regional-indicator letters are not
/// emoji on their own and are rejected.
///
/// # Example
///
/// ```
/// use chatlens::analysis::{EmojiClassifier, UnicodeEmojiClassifier};
///
/// let emoji = UnicodeEmojiClassifier::new();
/// assert!(emoji.is_emoji('😂'));
/// assert!(!emoji.is_emoji('7'));
/// ```
#[derive(Debug, Clone)]
pub struct UnicodeEmojiClassifier {
    regex: Regex,
}

impl Default for UnicodeEmojiClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl UnicodeEmojiClassifier {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(r"^[\p{Extended_Pictographic}\p{Emoji_Modifier}]$")
                .expect("Failed to compile emoji regex"),
        }
    }
}

impl EmojiClassifier for UnicodeEmojiClassifier {
    fn is_emoji(&self, c: char) -> bool {
        if c.is_ascii() {
            return false;
        }
        let mut buf = [0u8; 4];
        self.regex.is_match(c.encode_utf8(&mut buf))
    }
}

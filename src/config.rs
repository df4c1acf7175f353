//! Configuration types for parsing and analysis.
//!
//! Plain builder structs with no CLI framework dependency, so library users
//! can construct them directly or load them with serde.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, ParserConfig};
//!
//! let parser = ParserConfig::new().with_system_author("system");
//! let analysis = AnalysisConfig::new().with_top_words(10);
//!
//! assert_eq!(parser.system_author, "system");
//! assert_eq!(analysis.top_words, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Label written for records that have no human author.
pub const DEFAULT_SYSTEM_AUTHOR: &str = "group_notification";

/// Literal placeholder exporters emit in place of attachments.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::with_config(ParserConfig::new().with_max_author_len(64));
/// assert_eq!(parser.config().max_author_len, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum length, in characters, of a `Name: ` author header (default: 200)
    pub max_author_len: usize,

    /// Label used for system notices in tabular output (default: `group_notification`)
    pub system_author: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_author_len: 200,
            system_author: DEFAULT_SYSTEM_AUTHOR.to_string(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author header length bound. Values below 1 are clamped to 1.
    #[must_use]
    pub fn with_max_author_len(mut self, len: usize) -> Self {
        self.max_author_len = len.max(1);
        self
    }

    /// Sets the label used for system notices.
    #[must_use]
    pub fn with_system_author(mut self, label: impl Into<String>) -> Self {
        self.system_author = label.into();
        self
    }
}

/// Configuration for the statistics in [`crate::analysis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Message text that marks an omitted attachment (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// How many users [`most_busy_users`](crate::analysis::most_busy_users) ranks (default: 5)
    pub top_users: usize,

    /// How many words [`most_common_words`](crate::analysis::most_common_words) returns (default: 20)
    pub top_words: usize,

    /// Label that system notices are counted under (default: `group_notification`)
    pub system_author: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
            top_users: 5,
            top_words: 20,
            system_author: DEFAULT_SYSTEM_AUTHOR.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder text.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets how many users are ranked.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets how many words are returned.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the label system notices are counted under.
    #[must_use]
    pub fn with_system_author(mut self, label: impl Into<String>) -> Self {
        self.system_author = label.into();
        self
    }
}

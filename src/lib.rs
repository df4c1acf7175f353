//! # Chatlens
//!
//! A Rust library for parsing exported group-chat transcripts into typed
//! records, and for computing activity statistics over them.
//!
//! ## Overview
//!
//! A transcript is one text blob of interleaved messages and system
//! notifications, each introduced by a timestamp:
//!
//! ```text
//! 12/03/2024, 9:15 pm - Alice: Hello everyone
//! 12/03/2024, 9:16 pm - Alice added Bob
//! ```
//!
//! Parsing runs in two stages:
//! - the **segmenter** ([`parsing::segment`]) finds timestamp tokens and
//!   splits the text at them
//! - the **normalizer** ([`parsing::Normalizer`]) resolves each timestamp,
//!   splits off the `Name: ` author header and derives the calendar fields
//!
//! The parser never fails: unknown date encodings give undated records and
//! header-less bodies give system notices.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let records = TranscriptParser::new().parse_str(
//!     "12/03/2024, 9:15 pm - Alice: Hello everyone\n12/03/2024, 9:16 pm - Alice added Bob",
//! );
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].author(), &Author::user("Alice"));
//! assert!(records[1].is_system());
//!
//! let stats = fetch_stats(
//!     &records,
//!     &UserSelection::Overall,
//!     &RegexLinkExtractor::new(),
//!     &AnalysisConfig::default(),
//! );
//! assert_eq!(stats.messages, 2);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), the entry point
//! - [`parsing`] - segmenter and record normalizer
//! - [`record`] - [`MessageRecord`], [`Author`](record::Author), [`Timestamp`](record::Timestamp), [`Period`](record::Period)
//! - [`analysis`] - statistics and their collaborators (stop words, link and emoji detection)
//! - [`core`] - user/date filtering, tabular rows and writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;

pub use error::{ChatlensError, Result};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChatlensError, Result};
    pub use crate::record::{Author, MessageRecord, Period, Timestamp};

    pub use crate::config::{AnalysisConfig, ParserConfig};
    pub use crate::parser::TranscriptParser;

    pub use crate::core::filter::{FilterConfig, UserSelection, apply_filters};
    pub use crate::core::table::{Row, to_rows};

    pub use crate::analysis::{
        EmojiClassifier, LinkExtractor, RegexLinkExtractor, StopWords, UnicodeEmojiClassifier,
        activity_heatmap, emoji_counts, fetch_stats, monthly_timeline, most_busy_users,
        most_common_words,
    };

    pub use crate::format::OutputFormat;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}

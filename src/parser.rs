//! Transcript parser entry point.
//!
//! [`TranscriptParser`] runs the segmenter and the normalizer over a whole
//! transcript. It holds no state between calls: the same text always yields
//! the same records, so independent transcripts can be parsed on separate
//! threads with a shared parser.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//! use chatlens::record::Author;
//!
//! let text = "\
//! 1/1/24, 10:00 am - Messages to this group are now secured
//! 1/1/24, 10:01 am - Alice: Hello
//! 1/1/24, 10:02 am - Bob: <Media omitted>";
//!
//! let records = TranscriptParser::new().parse_str(text);
//!
//! assert_eq!(records.len(), 3);
//! assert!(records[0].is_system());
//! assert_eq!(records[1].author(), &Author::user("Alice"));
//! assert_eq!(records[2].text(), "<Media omitted>");
//! ```

use tracing::debug;

use crate::config::ParserConfig;
use crate::parsing::{Normalizer, Segment, segment};
use crate::record::MessageRecord;

/// Parser for exported chat transcripts.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
    normalizer: Normalizer,
}

impl TranscriptParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        let normalizer = Normalizer::new(&config);
        Self { config, normalizer }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a transcript into records, one per timestamp token.
    ///
    /// Never fails. A transcript without timestamps gives an empty vector,
    /// an unparsable timestamp gives an undated record, and a body without
    /// an author header gives a system notice.
    pub fn parse_str(&self, content: &str) -> Vec<MessageRecord> {
        let records = self.parse_segments(&segment(content));

        debug!(
            records = records.len(),
            undated = records.iter().filter(|r| !r.is_dated()).count(),
            system = records.iter().filter(|r| r.is_system()).count(),
            "parsed transcript"
        );

        records
    }

    /// Normalizes already segmented text.
    pub fn parse_segments(&self, segments: &[Segment<'_>]) -> Vec<MessageRecord> {
        segments
            .iter()
            .map(|s| self.normalizer.normalize(s.token, s.raw_body))
            .collect()
    }
}

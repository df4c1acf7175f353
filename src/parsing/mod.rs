//! Transcript parsing primitives.
//!
//! - [`segment`] splits a transcript into timestamp-delimited [`Segment`]s.
//! - [`normalize`] turns one segment into a [`MessageRecord`](crate::MessageRecord).
//!
//! [`TranscriptParser`](crate::parser::TranscriptParser) chains the two.

pub mod normalize;
pub mod segment;

// Re-export commonly used items
pub use normalize::{DateEncoding, Normalizer, normalize, parse_timestamp};
pub use segment::{Segment, TIMESTAMP_PATTERN, segment, timestamp_regex};

//! Record post-processing: selection, tabular projection and writers.
//!
//! This module contains:
//! - [`filter`] - record selection by user and date
//! - [`table`] - flat row view of records ([`Row`], [`COLUMNS`])
//! - [`output`] - table writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::config::ParserConfig;
//! use chatlens::core::{FilterConfig, UserSelection, apply_filters, to_csv};
//! use chatlens::parser::TranscriptParser;
//!
//! let records = TranscriptParser::new()
//!     .parse_str("1/1/24, 9:00 am - Alice: Hello\n1/1/24, 9:01 am - Bob: Hi");
//! let alice = apply_filters(
//!     records,
//!     &FilterConfig::new().with_selection(UserSelection::user("Alice")),
//! );
//!
//! let csv = to_csv(&alice, &ParserConfig::default())?;
//! assert_eq!(csv.lines().count(), 2);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

pub mod filter;
pub mod output;
pub mod table;

pub use filter::{FilterConfig, OVERALL, UserSelection, apply_filters};
pub use table::{COLUMNS, Row, to_rows};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};

//! Output format writers.
//!
//! Every writer emits the [`table`](crate::core::table) projection of the
//! records, one row per record, in transcript order:
//! - [`write_csv`] / [`to_csv`] - CSV with a header row - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of rows - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines (one row per line) - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::config::ParserConfig;
//! use chatlens::core::output::{to_csv, write_csv, write_jsonl};
//! use chatlens::parser::TranscriptParser;
//!
//! let records = TranscriptParser::new().parse_str("1/1/24, 10:00 am - Alice: Hello");
//! let config = ParserConfig::default();
//!
//! write_csv(&records, "chat.csv", &config)?;
//! write_jsonl(&records, "chat.jsonl", &config)?;
//!
//! // Or get as a string
//! let csv_string = to_csv(&records, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

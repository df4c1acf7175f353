//! Select records by user and date range.
//!
//! [`UserSelection`] is the "whose messages?" choice every statistic in
//! [`crate::analysis`] takes. [`FilterConfig`] adds optional date bounds on
//! top of it for callers that want to slice a transcript before analysis.
//!
//! # Examples
//!
//! ## Select a User
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, UserSelection, apply_filters};
//! use chatlens::parser::TranscriptParser;
//!
//! let records = TranscriptParser::new().parse_str(
//!     "1/1/24, 9:00 am - Alice: Hello\n1/1/24, 9:01 am - Bob: Hi\n1/1/24, 9:02 am - Alice: Bye",
//! );
//!
//! let config = FilterConfig::new().with_selection(UserSelection::user("Alice"));
//! let filtered = apply_filters(records, &config);
//!
//! assert_eq!(filtered.len(), 2);
//! ```
//!
//! ## Filter by Date Range
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::parser::TranscriptParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let records = TranscriptParser::new().parse_str(
//!     "1/1/24, 9:00 am - Alice: Old\n15/6/24, 9:00 am - Alice: New",
//! );
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - User matching is exact on the author label; system notices are
//!   selected by the system label (`group_notification` by default)
//! - Undated records are **excluded** when date filters are active
//! - Multiple filters are combined with AND logic

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SYSTEM_AUTHOR;
use crate::error::ChatlensError;
use crate::record::MessageRecord;

/// Label that selects every record.
pub const OVERALL: &str = "Overall";

/// Whose records a statistic covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserSelection {
    /// Every record, system notices included.
    #[default]
    Overall,
    /// Records whose author label equals this name exactly.
    User(String),
}

impl UserSelection {
    /// Selects a single user by label.
    pub fn user(name: impl Into<String>) -> Self {
        UserSelection::User(name.into())
    }

    /// Returns `true` if `record` is covered, labelling system notices
    /// with `system`.
    pub fn matches_with(&self, record: &MessageRecord, system: &str) -> bool {
        match self {
            UserSelection::Overall => true,
            UserSelection::User(name) => record.author().label(system) == name.as_str(),
        }
    }

    /// Returns `true` if `record` is covered, using the default system label.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        self.matches_with(record, DEFAULT_SYSTEM_AUTHOR)
    }

    /// Returns the records covered by this selection.
    pub fn select<'a>(&self, records: &'a [MessageRecord]) -> Vec<&'a MessageRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

impl fmt::Display for UserSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserSelection::Overall => write!(f, "{OVERALL}"),
            UserSelection::User(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for UserSelection {
    type Err = std::convert::Infallible;

    /// `"Overall"` selects everyone; anything else is a user label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == OVERALL {
            UserSelection::Overall
        } else {
            UserSelection::user(s)
        })
    }
}

/// Configuration for filtering records by user and date.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Whose records to keep.
    pub selection: UserSelection,

    /// Label system notices answer to when a user is selected.
    pub system_author: String,

    /// Include only records on or after this instant.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this instant.
    pub before: Option<NaiveDateTime>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            selection: UserSelection::Overall,
            system_author: DEFAULT_SYSTEM_AUTHOR.to_string(),
            after: None,
            before: None,
        }
    }
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user selection.
    #[must_use]
    pub fn with_selection(mut self, selection: UserSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the label system notices are selected by.
    ///
    /// Should match the label the records are written with, see
    /// [`crate::config::ParserConfig::system_author`].
    #[must_use]
    pub fn with_system_author(mut self, label: impl Into<String>) -> Self {
        self.system_author = label.into();
        self
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.after = Some(parse_date_at(date_str, 0, 0, 0)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.before = Some(parse_date_at(date_str, 23, 59, 59)?);
        Ok(self)
    }

    /// Sets the start instant directly.
    #[must_use]
    pub fn with_after(mut self, at: NaiveDateTime) -> Self {
        self.after = Some(at);
        self
    }

    /// Sets the end instant directly.
    #[must_use]
    pub fn with_before(mut self, at: NaiveDateTime) -> Self {
        self.before = Some(at);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.has_user_filter()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if a specific user is selected.
    pub fn has_user_filter(&self) -> bool {
        self.selection != UserSelection::Overall
    }

    fn keeps(&self, record: &MessageRecord) -> bool {
        if !self.selection.matches_with(record, &self.system_author) {
            return false;
        }

        if self.has_date_filter() {
            let Some(ts) = record.timestamp() else {
                return false;
            };
            let at = ts.datetime();
            if self.after.is_some_and(|after| at < after) {
                return false;
            }
            if self.before.is_some_and(|before| at > before) {
                return false;
            }
        }

        true
    }
}

/// Parses `YYYY-MM-DD` and pins it to the given time of day.
fn parse_date_at(date_str: &str, h: u32, m: u32, s: u32) -> Result<NaiveDateTime, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(h, m, s))
        .ok_or_else(|| ChatlensError::invalid_date(date_str))
}

/// Filters records, keeping only those that match every active filter.
///
/// Consumes the input; if no filter is active it is returned unchanged.
pub fn apply_filters(records: Vec<MessageRecord>, config: &FilterConfig) -> Vec<MessageRecord> {
    if !config.is_active() {
        return records;
    }

    records.into_iter().filter(|r| config.keeps(r)).collect()
}

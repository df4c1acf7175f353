//! Typed records produced by the transcript parser.
//!
//! A [`MessageRecord`] is one chat event. Its two axes of uncertainty are
//! modelled as types rather than sentinel strings:
//!
//! - [`Author`] is either a named [`User`](Author::User) or a
//!   [`SystemNotice`](Author::SystemNotice) ("X added Y", encryption banners).
//! - The timestamp is `Option<Timestamp>`: every calendar field is derived
//!   from one resolved instant, so a record is either fully dated or fully
//!   undated.
//!
//! # Example
//!
//! ```
//! use chatlens::record::{Author, MessageRecord, Timestamp};
//! use chrono::NaiveDate;
//!
//! let at = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let record = MessageRecord::new(Some(Timestamp::new(at)), Author::user("Alice"), "Hello");
//!
//! let ts = record.timestamp().unwrap();
//! assert_eq!(ts.day_name(), "Monday");
//! assert_eq!(ts.period().to_string(), "10-11");
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Who sent a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    /// A participant, by literal display name.
    User(String),
    /// A system or group notification with no human author.
    SystemNotice,
}

impl Author {
    /// Creates a named author.
    pub fn user(name: impl Into<String>) -> Self {
        Author::User(name.into())
    }

    /// Returns the display name, or `system` for notices.
    ///
    /// ```
    /// use chatlens::record::Author;
    ///
    /// assert_eq!(Author::user("Bob").label("group_notification"), "Bob");
    /// assert_eq!(Author::SystemNotice.label("group_notification"), "group_notification");
    /// ```
    pub fn label<'a>(&'a self, system: &'a str) -> &'a str {
        match self {
            Author::User(name) => name.as_str(),
            Author::SystemNotice => system,
        }
    }

    /// Returns the name of a human author.
    pub fn name(&self) -> Option<&str> {
        match self {
            Author::User(name) => Some(name.as_str()),
            Author::SystemNotice => None,
        }
    }

    /// Returns `true` for system notices.
    pub fn is_system(&self) -> bool {
        matches!(self, Author::SystemNotice)
    }
}

/// One of the 24 hourly buckets used for activity heatmaps.
///
/// The label format is kept byte-for-byte compatible with existing
/// heatmap consumers, including its irregular ends: hour 0 renders as
/// `"00-1"` and hour 23 as `"23-00"`, while every other hour renders
/// unpadded as `"{h}-{h+1}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period(u8);

impl Period {
    /// Creates the bucket for `hour`, or `None` if it is not in `0..24`.
    pub fn new(hour: u32) -> Option<Self> {
        u8::try_from(hour).ok().filter(|h| *h < 24).map(Period)
    }

    /// Returns the hour this bucket starts at.
    pub fn hour(self) -> u32 {
        u32::from(self.0)
    }

    /// Returns all 24 buckets in hour order.
    pub fn all() -> impl Iterator<Item = Period> {
        (0..24).map(Period)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            23 => write!(f, "23-00"),
            0 => write!(f, "00-1"),
            h => write!(f, "{}-{}", h, h + 1),
        }
    }
}

impl Serialize for Period {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A resolved message instant and its calendar breakdown.
///
/// Exporters write local wall-clock time without a zone, so this is a
/// naive date-time; no timezone conversion is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Wraps a resolved date-time.
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    /// Returns the underlying date-time.
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1-12.
    pub fn month_num(&self) -> u32 {
        self.0.month()
    }

    /// Full English month name, e.g. `"January"`.
    pub fn month_name(&self) -> String {
        self.0.format("%B").to_string()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Calendar date without the time of day.
    pub fn only_date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Hour, 0-23.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Full English weekday name, e.g. `"Monday"`.
    pub fn day_name(&self) -> String {
        self.0.format("%A").to_string()
    }

    /// Hourly bucket this instant falls into.
    pub fn period(&self) -> Period {
        Period(self.0.hour() as u8)
    }
}

/// One parsed chat event.
///
/// Records are immutable values; their only identity is their position in
/// the parser output, which follows document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    timestamp: Option<Timestamp>,
    author: Author,
    text: String,
}

impl MessageRecord {
    /// Creates a record from its parts.
    pub fn new(timestamp: Option<Timestamp>, author: Author, text: impl Into<String>) -> Self {
        Self {
            timestamp,
            author,
            text: text.into(),
        }
    }

    /// Returns the timestamp, or `None` if no known date encoding matched.
    pub fn timestamp(&self) -> Option<&Timestamp> {
        self.timestamp.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Returns the message payload with author header and separators removed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_dated(&self) -> bool {
        self.timestamp.is_some()
    }

    pub fn is_system(&self) -> bool {
        self.author.is_system()
    }

    /// Returns `true` if the whole payload equals the media `placeholder`.
    pub fn is_media(&self, placeholder: &str) -> bool {
        self.text == placeholder
    }
}

//! Turning a `(timestamp, body)` segment into a [`MessageRecord`].
//!
//! Two independent steps:
//!
//! - **Author split**: strip the `- ` export separator, then read a leading
//!   `Name: ` header. Bodies without one are system notices.
//! - **Timestamp resolution**: try each [`DateEncoding`] in order; the first
//!   that parses wins, and if none does the record is left undated.
//!
//! Neither step can fail the batch. Bad input degrades the single record.

use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::trace;

use crate::config::ParserConfig;
use crate::record::{Author, MessageRecord, Timestamp};

/// Character some exporters put between the time and `am`/`pm`.
const NARROW_NO_BREAK_SPACE: char = '\u{202f}';

/// chrono format of a token after [`TimestampFields::canonical`].
const CANONICAL_FORMAT: &str = "%d/%m/%Y, %I:%M %p";

/// Date encodings tried when resolving a timestamp.
///
/// Exporters vary the year width, and a regex alone cannot tell which
/// encoding a token uses once day/month widths also vary. Resolution tries
/// the four-digit form first so a two-digit reading is never chosen for a
/// token that carries a full year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateEncoding {
    /// `15/01/2024, 9:05 PM`
    DayFirstFullYear,
    /// `15/01/24, 9:05 PM`, years 00-68 map to 20xx and 69-99 to 19xx
    DayFirstShortYear,
}

impl DateEncoding {
    /// Number of year digits this encoding accepts.
    fn year_width(self) -> usize {
        match self {
            DateEncoding::DayFirstFullYear => 4,
            DateEncoding::DayFirstShortYear => 2,
        }
    }

    /// Returns all encodings in resolution order.
    pub fn all() -> &'static [DateEncoding] {
        &[DateEncoding::DayFirstFullYear, DateEncoding::DayFirstShortYear]
    }

    /// Parses a timestamp with this encoding only.
    ///
    /// chrono's `%Y` happily reads `24` as the year 24, so the year width
    /// is checked here and two-digit years are widened before parsing.
    pub fn parse(self, timestamp: &str) -> Option<NaiveDateTime> {
        let fields = TimestampFields::read(timestamp)?;
        let year = self.full_year(fields.year)?;
        NaiveDateTime::parse_from_str(&fields.canonical(year), CANONICAL_FORMAT).ok()
    }

    /// Expands the year digits, or `None` if their width does not fit.
    fn full_year(self, digits: &str) -> Option<i32> {
        if digits.len() != self.year_width() {
            return None;
        }
        let year: i32 = digits.parse().ok()?;
        Some(match self {
            DateEncoding::DayFirstFullYear => year,
            DateEncoding::DayFirstShortYear if year <= 68 => 2000 + year,
            DateEncoding::DayFirstShortYear => 1900 + year,
        })
    }
}

/// The pieces of a timestamp token, before calendar validation.
struct TimestampFields<'a> {
    day: &'a str,
    month: &'a str,
    year: &'a str,
    hour: &'a str,
    minute: &'a str,
    meridiem: &'a str,
}

fn fields_regex() -> &'static Regex {
    static FIELDS_REGEX: OnceLock<Regex> = OnceLock::new();
    FIELDS_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4}),\s+(\d{1,2}):(\d{2})\s+([AaPp][Mm])$")
            .expect("Failed to compile timestamp fields regex")
    })
}

impl<'a> TimestampFields<'a> {
    fn read(timestamp: &'a str) -> Option<Self> {
        let caps = fields_regex().captures(timestamp)?;
        let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        Some(Self {
            day: field(1),
            month: field(2),
            year: field(3),
            hour: field(4),
            minute: field(5),
            meridiem: field(6),
        })
    }

    /// Rebuilds the token with a four-digit year, single spaces and an
    /// upper-case meridiem.
    fn canonical(&self, year: i32) -> String {
        format!(
            "{}/{}/{:04}, {}:{} {}",
            self.day,
            self.month,
            year,
            self.hour,
            self.minute,
            self.meridiem.to_ascii_uppercase()
        )
    }
}

/// Resolves a raw timestamp token, trying every [`DateEncoding`] in order.
///
/// Returns `None` when no encoding matches; callers keep the record and
/// leave it undated.
///
/// # Example
///
/// ```
/// use chatlens::parsing::parse_timestamp;
///
/// let ts = parse_timestamp("1/1/24, 9:05 am").unwrap();
/// assert_eq!(ts.year(), 2024);
/// assert_eq!(ts.hour(), 9);
///
/// assert!(parse_timestamp("31/02/2024, 9:05 am").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let cleaned = raw.replace(NARROW_NO_BREAK_SPACE, " ");
    let cleaned = cleaned.trim();

    DateEncoding::all().iter().find_map(|&encoding| {
        let at = encoding.parse(cleaned)?;
        if encoding != DateEncoding::DayFirstFullYear {
            trace!(token = cleaned, ?encoding, "timestamp resolved by fallback encoding");
        }
        Some(Timestamp::new(at))
    })
}

/// Converts raw segments into records.
///
/// Holds the author header bound; construct it from a [`ParserConfig`] or
/// use [`Normalizer::default`] for the standard 200-character bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    max_author_len: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

impl Normalizer {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            max_author_len: config.max_author_len.max(1),
        }
    }

    /// Builds the record for one segment.
    pub fn normalize(&self, timestamp: &str, raw_body: &str) -> MessageRecord {
        let (author, text) = self.split_author(raw_body);
        MessageRecord::new(parse_timestamp(timestamp), author, text)
    }

    /// Separates the author header from the payload.
    ///
    /// The header is the text before the *first* colon, when that colon is
    /// followed by whitespace and preceded by 1 to `max_author_len`
    /// characters. Anything else, including a header that is blank after
    /// trimming, makes the whole body a system notice.
    pub fn split_author(&self, raw_body: &str) -> (Author, String) {
        let body = strip_separator(raw_body);

        if let Some((name, rest)) = self.header(body) {
            let name = name.trim();
            if !name.is_empty() {
                return (Author::user(name), rest.trim().to_string());
            }
        }

        (Author::SystemNotice, body.trim().to_string())
    }

    fn header<'a>(&self, body: &'a str) -> Option<(&'a str, &'a str)> {
        let colon = body.find(':')?;
        let (name, rest) = (&body[..colon], &body[colon + 1..]);

        let len = name.chars().count();
        if len == 0 || len > self.max_author_len {
            return None;
        }

        let mut rest_chars = rest.chars();
        let gap = rest_chars.next().filter(|c| c.is_whitespace())?;
        Some((name, &rest[gap.len_utf8()..]))
    }
}

/// Removes one leading `-` export separator and the whitespace around it.
fn strip_separator(body: &str) -> &str {
    let body = body.trim_start();
    body.strip_prefix('-').map_or(body, str::trim_start)
}

/// Builds a record with the default [`Normalizer`].
///
/// # Example
///
/// ```
/// use chatlens::parsing::normalize;
/// use chatlens::record::Author;
///
/// let record = normalize("1/1/24, 10:00 am", " - Alice: Hello");
/// assert_eq!(record.author(), &Author::user("Alice"));
/// assert_eq!(record.text(), "Hello");
/// ```
pub fn normalize(timestamp: &str, raw_body: &str) -> MessageRecord {
    Normalizer::default().normalize(timestamp, raw_body)
}

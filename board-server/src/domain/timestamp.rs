//! Timestamp handling for the Digitraffic API.
//!
//! Digitraffic reports every time as a UTC instant of the form
//! `yyyy-mm-ddTHH:MM:SS.000Z`. Boards show local wall-clock time, so the
//! hour is shifted by a fixed whole-hour offset taken from the host.
//!
//! The shift wraps the hour modulo 24 and leaves the calendar date alone.
//! A train scheduled at `2024-01-10T22:15:00.000Z` shown with a +2 offset
//! reads `00:15` on `2024-01-10`. Callers must not rely on the date being
//! correct when the offset moves the hour across midnight.

use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike};
use std::fmt;

/// Length of `yyyy-mm-ddTHH:MM:SS.000Z`.
const API_TIMESTAMP_LEN: usize = 24;

/// Fixed fractional-second suffix on every Digitraffic timestamp.
const API_SUFFIX: &[u8] = b".000Z";

/// Error returned when a timestamp does not have the API shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed timestamp {input:?}: {reason}")]
pub struct MalformedTimestamp {
    input: String,
    reason: &'static str,
}

impl MalformedTimestamp {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// Error for a timestamp field that is absent altogether.
    pub fn missing() -> Self {
        Self::new("", "timestamp is missing")
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Error returned for an offset outside the range used by real time zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("UTC offset must be between -12 and +14 hours, got {0}")]
pub struct InvalidOffset(i32);

/// A whole-hour offset from UTC.
///
/// # Examples
///
/// ```
/// use board_server::domain::UtcOffset;
///
/// let helsinki_winter = UtcOffset::from_hours(2).unwrap();
/// assert_eq!(helsinki_winter.hours(), 2);
///
/// assert!(UtcOffset::from_hours(15).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UtcOffset(i8);

impl UtcOffset {
    /// Zero offset.
    pub const UTC: Self = Self(0);

    /// Create an offset from a number of hours east of UTC.
    pub fn from_hours(hours: i32) -> Result<Self, InvalidOffset> {
        if !(-12..=14).contains(&hours) {
            return Err(InvalidOffset(hours));
        }
        Ok(Self(hours as i8))
    }

    /// Read the host's current offset, truncated to whole hours.
    ///
    /// This is the offset in effect now, daylight saving time included,
    /// not the zone's standard offset. Boards show current wall-clock time.
    pub fn from_host() -> Self {
        let secs = Local::now().offset().local_minus_utc();
        Self((secs / 3600) as i8)
    }

    /// Hours east of UTC.
    pub fn hours(&self) -> i32 {
        self.0 as i32
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UTC{:+}", self.0)
    }
}

/// An API timestamp shifted into local wall-clock time.
///
/// Ordering compares the date first, then the time of day.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalTimestamp {
    date: NaiveDate,
    time: NaiveTime,
}

impl LocalTimestamp {
    /// Convert an API timestamp into local time.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::domain::{LocalTimestamp, UtcOffset};
    ///
    /// let offset = UtcOffset::from_hours(2).unwrap();
    /// let ts = LocalTimestamp::from_api("2024-01-10T22:15:00.000Z", offset).unwrap();
    /// assert_eq!(ts.hhmm(), "00:15");
    /// assert_eq!(ts.date().to_string(), "2024-01-10");
    ///
    /// // Only the exact `.000Z` suffix is accepted
    /// assert!(LocalTimestamp::from_api("2024-01-10T22:15:00Z", offset).is_err());
    /// assert!(LocalTimestamp::from_api("2024-01-10T22:15:00.123Z", offset).is_err());
    /// ```
    pub fn from_api(input: &str, offset: UtcOffset) -> Result<Self, MalformedTimestamp> {
        let bytes = input.as_bytes();

        if bytes.len() != API_TIMESTAMP_LEN {
            return Err(MalformedTimestamp::new(
                input,
                "expected yyyy-mm-ddTHH:MM:SS.000Z",
            ));
        }

        if &bytes[19..] != API_SUFFIX {
            return Err(MalformedTimestamp::new(input, "expected .000Z suffix"));
        }

        let separators = [(4, b'-'), (7, b'-'), (10, b'T'), (13, b':'), (16, b':')];
        if separators.iter().any(|&(pos, sep)| bytes[pos] != sep) {
            return Err(MalformedTimestamp::new(input, "misplaced separator"));
        }

        let year = parse_digits(&bytes[0..4])
            .ok_or_else(|| MalformedTimestamp::new(input, "invalid year digits"))?;
        let month = parse_digits(&bytes[5..7])
            .ok_or_else(|| MalformedTimestamp::new(input, "invalid month digits"))?;
        let day = parse_digits(&bytes[8..10])
            .ok_or_else(|| MalformedTimestamp::new(input, "invalid day digits"))?;
        let hour = parse_digits(&bytes[11..13])
            .ok_or_else(|| MalformedTimestamp::new(input, "invalid hour digits"))?;
        let minute = parse_digits(&bytes[14..16])
            .ok_or_else(|| MalformedTimestamp::new(input, "invalid minute digits"))?;
        let second = parse_digits(&bytes[17..19])
            .ok_or_else(|| MalformedTimestamp::new(input, "invalid second digits"))?;

        let date = NaiveDate::from_ymd_opt(year as i32, month, day)
            .ok_or_else(|| MalformedTimestamp::new(input, "invalid calendar date"))?;

        if hour > 23 {
            return Err(MalformedTimestamp::new(input, "hour must be 0-23"));
        }

        let local_hour = (hour as i32 + offset.hours()).rem_euclid(24) as u32;
        let time = NaiveTime::from_hms_opt(local_hour, minute, second)
            .ok_or_else(|| MalformedTimestamp::new(input, "invalid time of day"))?;

        Ok(Self { date, time })
    }

    /// Returns the date component. It is the UTC date, never rolled over.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the local time of day.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the local hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Date split into zero-padded `[YYYY, MM, DD]` parts.
    pub fn date_parts(&self) -> [String; 3] {
        [
            format!("{:04}", self.date.year()),
            format!("{:02}", self.date.month()),
            format!("{:02}", self.date.day()),
        ]
    }

    /// Time split into zero-padded `[HH, MM, SS]` parts.
    pub fn time_parts(&self) -> [String; 3] {
        [
            format!("{:02}", self.time.hour()),
            format!("{:02}", self.time.minute()),
            format!("{:02}", self.time.second()),
        ]
    }

    /// Wall-clock time as shown on a board, e.g. `"08:05"`.
    pub fn hhmm(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// Render back into the API shape, treating the local time as UTC.
    pub fn to_api_format(&self) -> String {
        format!(
            "{}T{:02}:{:02}:{:02}.000Z",
            self.date.format("%Y-%m-%d"),
            self.time.hour(),
            self.time.minute(),
            self.time.second()
        )
    }
}

impl fmt::Debug for LocalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalTimestamp({} {})", self.date, self.time)
    }
}

impl fmt::Display for LocalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.date,
            self.time.hour(),
            self.time.minute(),
            self.time.second()
        )
    }
}

/// Parse a run of ASCII digits into a u32.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        let digit = (b as char).to_digit(10)?;
        Some(acc * 10 + digit)
    })
}

//! Service date and time-of-day types.
//!
//! The booking service exchanges dates as "YYYYMMDD" and times as
//! "HHMMSS". Both are fixed-width and zero-padded, so their textual order
//! matches their chronological order. These types keep that property while
//! guaranteeing the value is a real calendar date or time of day.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike};

/// Error returned when parsing an invalid service date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date: {reason}")]
pub struct InvalidDate {
    reason: &'static str,
}

impl InvalidDate {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Error returned when parsing an invalid service time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct InvalidTime {
    reason: &'static str,
}

impl InvalidTime {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A calendar date in the service's "YYYYMMDD" format.
///
/// # Examples
///
/// ```
/// use seat_watch::domain::ServiceDate;
///
/// let date = ServiceDate::parse("20240315").unwrap();
/// assert_eq!(date.to_string(), "20240315");
///
/// assert!(ServiceDate::parse("2024-03-15").is_err());
/// assert!(ServiceDate::parse("20240230").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceDate(NaiveDate);

impl ServiceDate {
    /// Parse a date from "YYYYMMDD".
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidDate> {
        let s = s.trim();
        if s.len() != 8 {
            return Err(InvalidDate::new("expected YYYYMMDD format"));
        }
        let bytes = s.as_bytes();

        let year = parse_digits(&bytes[0..4]).ok_or_else(|| InvalidDate::new("invalid year digits"))?;
        let month =
            parse_digits(&bytes[4..6]).ok_or_else(|| InvalidDate::new("invalid month digits"))?;
        let day = parse_digits(&bytes[6..8]).ok_or_else(|| InvalidDate::new("invalid day digits"))?;

        NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(Self)
            .ok_or_else(|| InvalidDate::new("no such calendar date"))
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Wrap an existing chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying chrono date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Debug for ServiceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceDate({self})")
    }
}

impl fmt::Display for ServiceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl std::str::FromStr for ServiceDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A time of day in the service's "HHMMSS" format.
///
/// Used both as the search cursor (earliest departure to list) and as a
/// train's departure time.
///
/// # Examples
///
/// ```
/// use seat_watch::domain::ServiceTime;
///
/// let time = ServiceTime::parse("090000").unwrap();
/// assert_eq!(time.to_string(), "090000");
/// assert!(time < ServiceTime::parse("101500").unwrap());
///
/// assert!(ServiceTime::parse("09:00").is_err());
/// assert!(ServiceTime::parse("250000").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceTime(NaiveTime);

impl ServiceTime {
    /// Parse a time from "HHMMSS".
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidTime> {
        let s = s.trim();
        if s.len() != 6 {
            return Err(InvalidTime::new("expected HHMMSS format"));
        }
        let bytes = s.as_bytes();

        let hour = parse_digits(&bytes[0..2]).ok_or_else(|| InvalidTime::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(InvalidTime::new("hour must be 0-23"));
        }

        let minute =
            parse_digits(&bytes[2..4]).ok_or_else(|| InvalidTime::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(InvalidTime::new("minute must be 0-59"));
        }

        let second =
            parse_digits(&bytes[4..6]).ok_or_else(|| InvalidTime::new("invalid second digits"))?;
        if second > 59 {
            return Err(InvalidTime::new("second must be 0-59"));
        }

        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self)
            .ok_or_else(|| InvalidTime::new("invalid time"))
    }

    /// The current local time of day, truncated to whole seconds.
    pub fn now() -> Self {
        let now = Local::now().time();
        // from_hms_opt cannot fail for components read off a valid time
        Self(NaiveTime::from_hms_opt(now.hour(), now.minute(), now.second()).unwrap_or(now))
    }

    /// Build a time from hour, minute and second components.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }
}

impl fmt::Debug for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceTime({self})")
    }
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{:02}{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl std::str::FromStr for ServiceTime {
    type Err = InvalidTime;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a run of ASCII digit bytes into a u32.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }
    bytes.iter().try_fold(0u32, |acc, &b| {
        let digit = (b as char).to_digit(10)?;
        Some(acc * 10 + digit)
    })
}

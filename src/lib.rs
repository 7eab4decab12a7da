//! Calendar arithmetic over UTC civil dates.
//!
//! [`CivilDate`] is an instant with millisecond precision whose calendar fields
//! are read in UTC. Text is accepted in a small set of strict formats (see
//! [`CivilDate`]'s `FromStr` impl); the free functions in [`calendar`] and
//! [`schedule`] cover weekday lookup, month lengths, weekend counting,
//! quarters, leap years, Friday-the-13th search, week numbers and rotating
//! work schedules.
//!
//! ```
//! use civil_calendar::{CivilDate, count_weekend_days, next_friday_the_13th};
//!
//! assert_eq!(count_weekend_days(12, 2023), Ok(10));
//!
//! let from: CivilDate = "2024-01-13".parse().unwrap();
//! let found = next_friday_the_13th(&from).unwrap();
//! assert_eq!(found.to_string(), "2024-09-13T00:00:00.000Z");
//! ```

mod consts;
mod prelude;
mod types;

pub mod calendar;
pub mod format;
pub mod period;
pub mod schedule;

#[cfg(test)]
mod test_utils;

pub use calendar::{
    count_weekend_days, day_of_week_name, days_in_month, extract_clock_time, format_us,
    inclusive_day_count, is_leap_year, is_within_period, next_friday, next_friday_the_13th,
    parse_to_epoch_millis, quarter_of_year,
};
pub use consts::*;
pub use period::{DatePeriod, PeriodError};
pub use schedule::{ScheduleError, iso_week, week_number, work_schedule};
pub use types::{Day, Month, Year};

use crate::prelude::*;
use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Timelike, Utc,
    Weekday,
};
use std::borrow::Cow;
use std::str::FromStr;

/// ISO 8601 date-times without an offset, read as UTC
const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const ISO_YEAR_MIN_DIGITS: usize = 4;

const EPOCH_YEAR: i64 = 1970;
/// Mean Gregorian year, 365.2425 days
const MILLIS_PER_GREGORIAN_YEAR: i64 = 31_556_952_000;

/// A specific instant, viewed through its UTC calendar fields.
///
/// The year is always within `MIN_YEAR..=MAX_YEAR`; construction outside that
/// window fails and day arithmetic that would leave it returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "{}", "_0.to_rfc3339_opts(SecondsFormat::Millis, true)")]
pub struct CivilDate(DateTime<Utc>);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid time of day: {_0}")]
    InvalidTime(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CivilDate {
    /// Builds a date at midnight UTC.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first field out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    /// Builds a date from explicit UTC calendar fields.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first field out of range.
    pub fn from_ymd_hms(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ParseError> {
        let year_nz = Year::new(year)?;
        let month_nz = Month::new(month)?;
        let day_nz = Day::new(day, year_nz, month_nz)?;
        if hour > MAX_HOUR || minute > MAX_MINUTE || second > MAX_SECOND {
            return Err(ParseError::InvalidTime(format!(
                "{hour:02}{TIME_SEPARATOR}{minute:02}{TIME_SEPARATOR}{second:02}"
            )));
        }

        NaiveDate::from_ymd_opt(
            i32::from(year_nz.get()),
            u32::from(month_nz.get()),
            u32::from(day_nz.get()),
        )
        .and_then(|date| date.and_hms_opt(u32::from(hour), u32::from(minute), u32::from(second)))
        .map(|naive| Self(Utc.from_utc_datetime(&naive)))
        .ok_or_else(|| {
            ParseError::InvalidFormat(format!("{year:04}-{month:02}-{day:02}"))
        })
    }

    /// Builds a date from milliseconds since 1970-01-01T00:00:00Z.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` when the instant falls outside the
    /// supported years. Instants beyond chrono's range report an estimated
    /// year.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, ParseError> {
        let datetime = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            let estimated = EPOCH_YEAR + millis / MILLIS_PER_GREGORIAN_YEAR;
            let saturated = if millis < 0 { i32::MIN } else { i32::MAX };
            ParseError::InvalidYear(i32::try_from(estimated).unwrap_or(saturated))
        })?;
        Self::try_from(datetime)
    }

    /// Milliseconds since 1970-01-01T00:00:00Z, negative before the epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns the year (always within `MIN_YEAR..=MAX_YEAR`)
    pub fn year(&self) -> u16 {
        // Construction guarantees the range, the fallback is unreachable
        u16::try_from(self.0.year()).unwrap_or(MIN_YEAR)
    }

    /// Returns the month, 1-12
    pub fn month(&self) -> u8 {
        narrow(self.0.month())
    }

    /// Returns the day of the month, 1-31
    pub fn day(&self) -> u8 {
        narrow(self.0.day())
    }

    pub fn hour(&self) -> u8 {
        narrow(self.0.hour())
    }

    pub fn minute(&self) -> u8 {
        narrow(self.0.minute())
    }

    pub fn second(&self) -> u8 {
        narrow(self.0.second())
    }

    pub fn millisecond(&self) -> u16 {
        u16::try_from(self.0.timestamp_subsec_millis()).unwrap_or(0)
    }

    /// Day of the week, 0 = Sunday through 6 = Saturday
    pub fn day_of_week(&self) -> u8 {
        narrow(self.weekday().num_days_from_sunday())
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Day of the year, starting at 1 for January 1st
    pub fn day_of_year(&self) -> u16 {
        u16::try_from(self.0.ordinal()).unwrap_or(1)
    }

    /// Returns the Year type
    pub fn year_typed(&self) -> Year {
        Year::new(self.year()).unwrap_or(Year::MIN)
    }

    /// Returns the Month type
    pub fn month_typed(&self) -> Month {
        Month::new(self.month()).unwrap_or(Month::MIN)
    }

    /// Calendar components as a `(year, month, day)` tuple
    pub fn date_parts(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// The same calendar day at 00:00:00.000 UTC
    pub fn at_midnight(&self) -> Self {
        self.0
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map_or(*self, |naive| Self(Utc.from_utc_datetime(&naive)))
    }

    /// Moves forward by whole days, keeping the time of day.
    /// Returns `None` past `MAX_YEAR`.
    pub fn plus_days(&self, days: u64) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(days))
            .and_then(|datetime| Self::try_from(datetime).ok())
    }

    /// Accesses the underlying chrono value.
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

// chrono hands out calendar and clock fields as u32 values that always fit in a u8
#[inline]
fn narrow(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

impl TryFrom<DateTime<Utc>> for CivilDate {
    type Error = ParseError;

    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        Year::try_from(value.year())?;
        Ok(Self(value))
    }
}

impl FromStr for CivilDate {
    type Err = ParseError;

    /// Accepted formats, tried in order:
    ///
    /// 1. RFC 3339: `2024-02-01T00:00:00.000Z`, `2024-02-01T10:00:00+02:00`
    /// 2. ISO 8601 without offset, read as UTC: `2024-02-01T10:00:00`, `2024-02-01 10:00:00.250`
    /// 3. ISO 8601 calendar date at midnight UTC: `2024-02-01`
    /// 4. RFC 2822, `UTC` accepted as a zone name: `01 Jan 1970 00:00:00 UTC`
    /// 5. US format: `9/13/2024, 8:05:09 PM`, read as UTC
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        if trimmed.contains(MONTH_FIRST_SEPARATOR) {
            return format::parse_us(trimmed);
        }

        let Some(datetime) = Self::parse_rfc3339(trimmed)
            .or_else(|| Self::parse_naive_iso(trimmed))
            .or_else(|| Self::parse_iso_date(trimmed))
            .or_else(|| Self::parse_rfc2822(trimmed))
        else {
            // chrono rejects five-digit years outright
            return Err(match leading_iso_year(trimmed) {
                Some(year) if Year::try_from(year).is_err() => ParseError::InvalidYear(year),
                _ => ParseError::InvalidFormat(trimmed.to_owned()),
            });
        };

        Self::try_from(datetime)
    }
}

impl CivilDate {
    fn parse_rfc3339(s: &str) -> Option<DateTime<Utc>> {
        let parsed = DateTime::parse_from_rfc3339(s).ok()?;
        Some(parsed.with_timezone(&Utc))
    }

    fn parse_naive_iso(s: &str) -> Option<DateTime<Utc>> {
        NAIVE_DATE_TIME_FORMATS.iter().find_map(|format| {
            let naive = NaiveDateTime::parse_from_str(s, format).ok()?;
            Some(Utc.from_utc_datetime(&naive))
        })
    }

    fn parse_iso_date(s: &str) -> Option<DateTime<Utc>> {
        if !s.contains(DATE_SEPARATOR) {
            return None;
        }
        let date = NaiveDate::parse_from_str(s, ISO_DATE_FORMAT).ok()?;
        Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
    }

    fn parse_rfc2822(s: &str) -> Option<DateTime<Utc>> {
        let normalized = normalize_utc_zone(s);
        match DateTime::parse_from_rfc2822(&normalized) {
            Ok(parsed) => Some(parsed.with_timezone(&Utc)),
            Err(err) => {
                log::trace!("'{s}' matched none of the accepted date formats: {err}");
                None
            }
        }
    }
}

/// Signed year leading an ISO 8601 date, e.g. `10000` in `+10000-01-01`.
fn leading_iso_year(s: &str) -> Option<i32> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (digits, _) = unsigned.split_once(DATE_SEPARATOR)?;
    if digits.len() < ISO_YEAR_MIN_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = digits.parse::<i32>().unwrap_or(i32::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// RFC 2822 knows `UT` and `GMT` but not `UTC`.
fn normalize_utc_zone(s: &str) -> Cow<'_, str> {
    const UTC_SUFFIX: &str = " UTC";
    let split = s.len().saturating_sub(UTC_SUFFIX.len());
    match (s.get(..split), s.get(split..)) {
        (Some(head), Some(tail)) if tail.eq_ignore_ascii_case(UTC_SUFFIX) => {
            Cow::Owned(format!("{head} GMT"))
        }
        _ => Cow::Borrowed(s),
    }
}

impl serde::Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

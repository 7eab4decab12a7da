//! Text renderings of a [`CivilDate`] and the parser for the US rendering.

use crate::consts::{
    ANTE_MERIDIEM, HOURS_PER_HALF_DAY, MONTH_FIRST_SEPARATOR, POST_MERIDIEM, TIME_SEPARATOR,
    US_DATE_TIME_SEPARATOR,
};
use crate::{CivilDate, ParseError};

/// `M/D/YYYY, h:mm:ss AM`, no padding on month, day and hour
const US_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Renders the wall-clock time as zero-padded 24-hour `HH:MM:SS`.
pub fn clock_time(date: &CivilDate) -> String {
    format!(
        "{:02}{TIME_SEPARATOR}{:02}{TIME_SEPARATOR}{:02}",
        date.hour(),
        date.minute(),
        date.second()
    )
}

/// Renders `M/D/YYYY, h:mm:ss AM|PM` from the UTC fields.
///
/// Midnight is `12:00:00 AM` and noon is `12:00:00 PM`. Milliseconds are
/// dropped.
pub fn us_date_time(date: &CivilDate) -> String {
    date.as_datetime().format(US_FORMAT).to_string()
}

/// Parses the output of [`us_date_time`] back into a date, read as UTC.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` when the shape is wrong, or the field
/// error when a component is out of range.
pub fn parse_us(s: &str) -> Result<CivilDate, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (date_part, time_part) = trimmed
        .split_once(US_DATE_TIME_SEPARATOR)
        .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;

    let parts: Vec<&str> = date_part.split(MONTH_FIRST_SEPARATOR).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidFormat(format!(
            "Expected M{MONTH_FIRST_SEPARATOR}D{MONTH_FIRST_SEPARATOR}YYYY, found {date_part}"
        )));
    }
    let month = parse_u8(parts[0])?;
    let day = parse_u8(parts[1])?;
    let year = parse_u16(parts[2])?;

    let (hour, minute, second) = parse_twelve_hour_clock(time_part.trim())?;

    CivilDate::from_ymd_hms(year, month, day, hour, minute, second)
}

/// `h:mm:ss AM` to a 24-hour `(hour, minute, second)`
fn parse_twelve_hour_clock(s: &str) -> Result<(u8, u8, u8), ParseError> {
    let (clock, meridiem) = s
        .split_once(' ')
        .ok_or_else(|| ParseError::InvalidTime(s.to_owned()))?;

    let fields: Vec<&str> = clock.split(TIME_SEPARATOR).collect();
    if fields.len() != 3 {
        return Err(ParseError::InvalidTime(s.to_owned()));
    }
    let hour = parse_u8(fields[0])?;
    let minute = parse_u8(fields[1])?;
    let second = parse_u8(fields[2])?;

    if hour == 0 || hour > HOURS_PER_HALF_DAY {
        return Err(ParseError::InvalidTime(s.to_owned()));
    }

    let afternoon = if meridiem.trim().eq_ignore_ascii_case(ANTE_MERIDIEM) {
        false
    } else if meridiem.trim().eq_ignore_ascii_case(POST_MERIDIEM) {
        true
    } else {
        return Err(ParseError::InvalidTime(s.to_owned()));
    };

    let hour = hour % HOURS_PER_HALF_DAY + if afternoon { HOURS_PER_HALF_DAY } else { 0 };
    Ok((hour, minute, second))
}

/// Helper to parse u16 with better error messages
fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

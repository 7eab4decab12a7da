//! Stateless calendar operations.
//!
//! Functions taking text run it through [`CivilDate`]'s strict parser and
//! report a [`ParseError`] instead of producing a value for unparseable input.

use chrono::Weekday;

use crate::consts::{DAYS_PER_WEEK, DECEMBER, MIN_DAY, UNLUCKY_DAY, WEEKDAY_NAMES};
use crate::{CivilDate, DatePeriod, Month, ParseError, Year, format, types};

/// Milliseconds since 1970-01-01T00:00:00Z for the given text.
///
/// # Errors
/// Returns a `ParseError` when the text matches none of the accepted formats.
pub fn parse_to_epoch_millis(text: &str) -> Result<i64, ParseError> {
    text.parse::<CivilDate>().map(|date| date.epoch_millis())
}

/// Zero-padded 24-hour `HH:MM:SS` wall-clock time (UTC).
pub fn extract_clock_time(date: &CivilDate) -> String {
    format::clock_time(date)
}

/// Full English weekday name ("Sunday".."Saturday") of the parsed date.
///
/// # Errors
/// Returns a `ParseError` when the text does not parse.
pub fn day_of_week_name(text: &str) -> Result<&'static str, ParseError> {
    let date = text.parse::<CivilDate>()?;
    Ok(WEEKDAY_NAMES[usize::from(date.day_of_week())])
}

/// The next Friday strictly after `date`, at the same time of day.
///
/// A Friday moves a full week ahead. Returns `None` only when the result
/// would fall past the last supported year.
pub fn next_friday(date: &CivilDate) -> Option<CivilDate> {
    let friday = Weekday::Fri.num_days_from_sunday();
    let today = u32::from(date.day_of_week());
    let ahead = match (friday + DAYS_PER_WEEK - today) % DAYS_PER_WEEK {
        0 => DAYS_PER_WEEK,
        days => days,
    };
    date.plus_days(u64::from(ahead))
}

/// Number of days in `month` (1-12) of `year`, leap years included.
///
/// # Errors
/// Returns `ParseError::InvalidMonth` or `ParseError::InvalidYear` for
/// out-of-range arguments.
pub fn days_in_month(month: u8, year: u16) -> Result<u8, ParseError> {
    let month = Month::new(month)?;
    let year = Year::new(year)?;
    Ok(types::days_in_month(year.get(), month.get()))
}

/// `trunc((end - start) / 1 day) + 1` for two parsed instants.
///
/// # Errors
/// Returns the `ParseError` of the first bound that fails to parse.
pub fn inclusive_day_count(start: &str, end: &str) -> Result<i64, ParseError> {
    Ok(DatePeriod::parse(start, end)?.inclusive_day_count())
}

/// Whether the parsed date lies within `period`, both bounds included.
///
/// # Errors
/// Returns a `ParseError` when the date does not parse.
pub fn is_within_period(date: &str, period: &DatePeriod) -> Result<bool, ParseError> {
    let date = date.parse::<CivilDate>()?;
    Ok(period.contains(&date))
}

/// `M/D/YYYY, h:mm:ss AM|PM` rendering of the parsed date, UTC fields.
///
/// # Errors
/// Returns a `ParseError` when the date does not parse.
pub fn format_us(date: &str) -> Result<String, ParseError> {
    let date = date.parse::<CivilDate>()?;
    Ok(format::us_date_time(&date))
}

/// Saturdays plus Sundays in `month` (1-12) of `year`.
///
/// Four whole weeks always hold eight weekend days; the days after them
/// repeat the weekdays the month starts on, so the remainder is settled by
/// the weekdays of the first and last day.
///
/// # Errors
/// Returns `ParseError::InvalidMonth` or `ParseError::InvalidYear` for
/// out-of-range arguments.
pub fn count_weekend_days(month: u8, year: u16) -> Result<u8, ParseError> {
    let total = days_in_month(month, year)?;
    let first = CivilDate::from_ymd(year, month, MIN_DAY)?.weekday();
    let last = CivilDate::from_ymd(year, month, total)?.weekday();

    let weeks = u32::from(total) / DAYS_PER_WEEK;
    let base = u8::try_from(weeks * 2).unwrap_or(u8::MAX);
    if u32::from(total) % DAYS_PER_WEEK == 0 {
        return Ok(base);
    }

    let adjustment = match (first, last) {
        (Weekday::Sat, Weekday::Sun) => 2,
        (Weekday::Sat, Weekday::Sat) | (Weekday::Sun, Weekday::Sun) => 1,
        (_, Weekday::Sun) if !is_weekend(first) => 2,
        (_, Weekday::Sat) if !is_weekend(first) => 1,
        (Weekday::Sat, _) if !is_weekend(last) => 2,
        (Weekday::Sun, _) if !is_weekend(last) => 1,
        _ => 0,
    };
    Ok(base + adjustment)
}

const fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Calendar quarter, 1 (January-March) through 4 (October-December).
pub fn quarter_of_year(date: &CivilDate) -> u8 {
    date.month_typed().quarter()
}

/// Gregorian leap-year check on the date's year.
pub fn is_leap_year(date: &CivilDate) -> bool {
    date.year_typed().is_leap()
}

/// The first Friday the 13th after `date`'s calendar day, within the same year.
///
/// The current month is only considered while its 13th is still ahead.
/// Returns `None` when no Friday the 13th remains this year; the search never
/// wraps into the following year.
pub fn next_friday_the_13th(date: &CivilDate) -> Option<CivilDate> {
    let year = date.year();
    let first_month = if date.day() < UNLUCKY_DAY {
        date.month()
    } else {
        date.month() + 1
    };

    let found = (first_month..=DECEMBER)
        .filter_map(|month| CivilDate::from_ymd(year, month, UNLUCKY_DAY).ok())
        .find(|candidate| candidate.weekday() == Weekday::Fri);

    match found {
        Some(friday) => log::debug!("next Friday the 13th after {date} is {friday}"),
        None => log::debug!("no Friday the 13th left in {year} after {date}"),
    }
    found
}

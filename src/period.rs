use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CivilDate, MILLIS_PER_DAY, ParseError, RANGE_SEPARATOR, prelude::*};

/// Two instants bounding a period, both ends included.
///
/// [`DatePeriod::new`] takes the bounds as given; callers that need
/// `start <= end` use [`DatePeriod::checked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DatePeriod {
    start: CivilDate,
    end:   CivilDate,
}

/// Error type for date period operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Start date is after end date.
    #[error("Invalid date period: start ({start}) is after end ({end})")]
    Inverted { start: CivilDate, end: CivilDate },

    /// Error parsing a bound.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Invalid period format.
    #[error("Invalid period format: {0}")]
    InvalidFormat(String),
}

impl DatePeriod {
    /// Creates a period without checking the order of its bounds.
    pub const fn new(start: CivilDate, end: CivilDate) -> Self {
        Self { start, end }
    }

    /// Creates a period, rejecting `start > end`.
    ///
    /// # Errors
    /// Returns `PeriodError::Inverted` if start > end.
    pub fn checked(start: CivilDate, end: CivilDate) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses both bounds with the strict date parser.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first bound that fails to parse.
    pub fn parse(start: &str, end: &str) -> Result<Self, ParseError> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }

    /// Returns the start date of the period
    pub const fn start(&self) -> CivilDate {
        self.start
    }

    /// Returns the end date of the period
    pub const fn end(&self) -> CivilDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (CivilDate, CivilDate) {
        (self.start, self.end)
    }

    /// Whether the start falls after the end; equal bounds are not inverted
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Checks if the period contains a given instant, both bounds included
    pub fn contains(&self, date: &CivilDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this period shares at least one instant with another
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whole days between the bounds plus one.
    ///
    /// Partial days are truncated toward zero before the `+ 1`, so an
    /// inverted period can yield zero or a negative count.
    pub fn inclusive_day_count(&self) -> i64 {
        (self.end.epoch_millis() - self.start.epoch_millis()) / MILLIS_PER_DAY + 1
    }

    /// Every calendar day from `start` while it stays `<= end`, at the time of
    /// day of `start`. Empty for an inverted period.
    pub fn days(&self) -> impl Iterator<Item = CivilDate> + use<> {
        let end = self.end;
        std::iter::successors(Some(self.start).filter(|first| *first <= end), move |current| {
            current.plus_days(1).filter(|next| *next <= end)
        })
    }
}

impl FromStr for DatePeriod {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 interval: <start>/<end>
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(PeriodError::InvalidFormat(format!(
                "No period separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    PeriodError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;

                Ok(Self::parse(start_str.trim(), end_str.trim())?)
            },
            _ => Err(PeriodError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DatePeriod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DatePeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{civil, civil_hms, period};

    #[test]
    fn test_checked_cases() {
        struct TestCase {
            start:          CivilDate,
            end:            CivilDate,
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          civil(2024, 2, 2),
                end:            civil(2024, 3, 2),
                should_succeed: true,
                description:    "valid period (start < end)",
            },
            TestCase {
                start:          civil(2024, 3, 2),
                end:            civil(2024, 2, 2),
                should_succeed: false,
                description:    "inverted period (start > end)",
            },
            TestCase {
                start:          civil(2024, 2, 2),
                end:            civil(2024, 2, 2),
                should_succeed: true,
                description:    "equal bounds (start == end)",
            },
        ];

        for case in &cases {
            let result = DatePeriod::checked(case.start, case.end);
            assert_eq!(
                result.is_ok(),
                case.should_succeed,
                "Unexpected outcome for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_new_does_not_enforce_order() {
        let inverted = DatePeriod::new(civil(2024, 3, 2), civil(2024, 2, 2));
        assert!(inverted.is_inverted());
        assert!(!inverted.contains(&civil(2024, 2, 15)));
    }

    #[test]
    fn test_is_inverted_only_when_start_after_end() {
        let instant = civil_hms(2024, 2, 2, 12, 0, 0);
        assert!(!DatePeriod::new(instant, instant).is_inverted());
        assert!(!period("2024-02-02", "2024-03-02").is_inverted());
        assert!(DatePeriod::new(civil_hms(2024, 2, 2, 12, 0, 1), instant).is_inverted());
    }

    #[test]
    fn test_accessors() {
        let start = civil(2024, 2, 2);
        let end = civil(2024, 3, 2);
        let p = DatePeriod::new(start, end);

        assert_eq!(p.start(), start);
        assert_eq!(p.end(), end);
        assert_eq!(p.dates(), (start, end));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let p = period("2024-02-02", "2024-03-02");

        assert!(!p.contains(&civil(2024, 2, 1)));
        assert!(p.contains(&civil(2024, 2, 2)));
        assert!(p.contains(&civil(2024, 2, 20)));
        assert!(p.contains(&civil(2024, 3, 2)));
        assert!(!p.contains(&civil_hms(2024, 3, 2, 0, 0, 1)));
    }

    #[test]
    fn test_overlaps() {
        let first = period("2024-01-01", "2024-01-31");
        let touching = period("2024-01-31", "2024-02-15");
        let later = period("2024-02-01", "2024-02-15");

        assert!(first.overlaps(&touching));
        assert!(touching.overlaps(&first));
        assert!(!first.overlaps(&later));
    }

    #[test]
    fn test_inclusive_day_count() {
        assert_eq!(
            period("2024-02-01T00:00:00.000Z", "2024-02-02T00:00:00.000Z").inclusive_day_count(),
            2
        );
        assert_eq!(period("2024-02-01", "2024-02-01").inclusive_day_count(), 1);
        assert_eq!(
            period("2024-02-01T00:00:00Z", "2024-02-02T23:59:59Z").inclusive_day_count(),
            2,
            "partial days truncate"
        );
        assert_eq!(period("2024-01-01", "2024-12-31").inclusive_day_count(), 366);
        assert_eq!(
            period("2024-02-02T12:00:00Z", "2024-02-02T00:00:00Z").inclusive_day_count(),
            1,
            "half a day backwards truncates toward zero"
        );
    }

    #[test]
    fn test_days_keep_time_of_day() {
        let p = DatePeriod::new(civil_hms(2024, 2, 28, 9, 0, 0), civil_hms(2024, 3, 1, 9, 0, 0));
        let days: Vec<CivilDate> = p.days().collect();
        assert_eq!(
            days,
            vec![
                civil_hms(2024, 2, 28, 9, 0, 0),
                civil_hms(2024, 2, 29, 9, 0, 0),
                civil_hms(2024, 3, 1, 9, 0, 0),
            ]
        );

        let inverted = DatePeriod::new(civil(2024, 3, 1), civil(2024, 2, 1));
        assert_eq!(inverted.days().count(), 0);
    }

    #[test]
    fn test_display() {
        let p = period("2024-02-02", "2024-03-02");
        assert_eq!(
            p.to_string(),
            "2024-02-02T00:00:00.000Z/2024-03-02T00:00:00.000Z"
        );
    }

    #[test]
    fn test_from_str() {
        let p = "2024-02-02 / 2024-03-02T12:00:00Z"
            .parse::<DatePeriod>()
            .expect("failed to parse period");
        assert_eq!(p.start(), civil(2024, 2, 2));
        assert_eq!(p.end(), civil_hms(2024, 3, 2, 12, 0, 0));

        // Inverted bounds are accepted as given
        assert!("2024-03-02/2024-02-02".parse::<DatePeriod>().is_ok());
    }

    #[test]
    fn test_from_str_errors() {
        assert!(matches!(
            "2024-02-02".parse::<DatePeriod>(),
            Err(PeriodError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-02-02/2024-03-02/2024-04-02".parse::<DatePeriod>(),
            Err(PeriodError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-02-02/someday".parse::<DatePeriod>(),
            Err(PeriodError::Parse(ParseError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let p = period("2024-02-02", "2024-03-02");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(
            json,
            r#""2024-02-02T00:00:00.000Z/2024-03-02T00:00:00.000Z""#
        );
        let parsed: DatePeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(p, parsed);
    }

    #[test]
    fn test_inverted_error_message() {
        let err = DatePeriod::checked(civil(2024, 3, 2), civil(2024, 2, 2)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date period: start (2024-03-02T00:00:00.000Z) is after end (2024-02-02T00:00:00.000Z)"
        );
    }
}

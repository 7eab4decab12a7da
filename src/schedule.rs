//! Week numbering and rotating work schedules.

use chrono::Datelike;

use crate::consts::DAYS_PER_WEEK;
use crate::{CivilDate, DatePeriod};

/// Error type for schedule generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The work/off cycle has no days in it.
    #[error("Invalid schedule cycle: {work_days} work day(s) and {off_days} off day(s)")]
    InvalidCycle { work_days: u32, off_days: u32 },
}

/// Week of the year where week 1 holds January 1st and weeks start on Monday.
///
/// Ranges over `1..=54`; the last days of December stay in the current year.
/// See [`iso_week`] for ISO-8601 numbering.
pub fn week_number(date: &CivilDate) -> u32 {
    let day_of_year = u32::from(date.day_of_year()) - 1;
    let weekday = date.weekday().num_days_from_monday();
    // Weekday of January 1st, counted from Monday
    let offset = (weekday + DAYS_PER_WEEK - day_of_year % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    (day_of_year + offset) / DAYS_PER_WEEK + 1
}

/// ISO-8601 week-numbering `(year, week)`: week 1 holds the year's first
/// Thursday, so early January can belong to the previous year's last week and
/// late December to the next year's first.
pub fn iso_week(date: &CivilDate) -> (i32, u32) {
    let week = date.as_datetime().iso_week();
    (week.year(), week.week())
}

/// Days of `period` worked under a repeating `work_days` on / `off_days` off
/// rotation that starts on the period's first day.
///
/// Days keep the time of day of the period start. An inverted period yields
/// an empty schedule.
///
/// # Errors
/// Returns `ScheduleError::InvalidCycle` when the cycle is empty or its
/// length overflows.
pub fn work_schedule(
    period: &DatePeriod,
    work_days: u32,
    off_days: u32,
) -> Result<Vec<CivilDate>, ScheduleError> {
    let cycle = work_days
        .checked_add(off_days)
        .filter(|length| *length > 0)
        .ok_or(ScheduleError::InvalidCycle {
            work_days,
            off_days,
        })?;

    let schedule: Vec<CivilDate> = period
        .days()
        .zip((0..cycle).cycle())
        .filter(|(_, position)| *position < work_days)
        .map(|(day, _)| day)
        .collect();

    log::debug!(
        "{} work day(s) in {period} with a {work_days} on / {off_days} off rotation",
        schedule.len()
    );
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{civil, civil_hms, period};

    #[test]
    fn test_week_number_cases() {
        struct TestCase {
            date:     CivilDate,
            expected: u32,
        }

        let cases = [
            // 2024 starts on a Monday
            TestCase {
                date:     civil(2024, 1, 1),
                expected: 1,
            },
            TestCase {
                date:     civil(2024, 1, 7),
                expected: 1,
            },
            TestCase {
                date:     civil(2024, 1, 8),
                expected: 2,
            },
            TestCase {
                date:     civil(2024, 12, 31),
                expected: 53,
            },
            // 2023 starts on a Sunday, which is a week of its own
            TestCase {
                date:     civil(2023, 1, 1),
                expected: 1,
            },
            TestCase {
                date:     civil(2023, 1, 2),
                expected: 2,
            },
            // Leap year starting on a Sunday reaches week 54
            TestCase {
                date:     civil(2012, 12, 31),
                expected: 54,
            },
        ];

        for case in &cases {
            assert_eq!(week_number(&case.date), case.expected, "{}", case.date);
        }
    }

    #[test]
    fn test_iso_week_rolls_across_years() {
        assert_eq!(iso_week(&civil(2021, 1, 1)), (2020, 53));
        assert_eq!(iso_week(&civil(2023, 1, 1)), (2022, 52));
        assert_eq!(iso_week(&civil(2023, 1, 2)), (2023, 1));
        assert_eq!(iso_week(&civil(2024, 12, 30)), (2025, 1));
        assert_eq!(iso_week(&civil(2024, 6, 15)), (2024, 24));
    }

    #[test]
    fn test_work_schedule_two_on_one_off() {
        let p = period("2024-01-01", "2024-01-10");
        let days: Vec<u8> = work_schedule(&p, 2, 1)
            .unwrap()
            .iter()
            .map(CivilDate::day)
            .collect();
        assert_eq!(days, vec![1, 2, 4, 5, 7, 8, 10]);
    }

    #[test]
    fn test_work_schedule_keeps_start_time() {
        let p = DatePeriod::new(civil_hms(2024, 1, 1, 8, 0, 0), civil_hms(2024, 1, 4, 8, 0, 0));
        let schedule = work_schedule(&p, 1, 1).unwrap();
        assert_eq!(
            schedule,
            vec![civil_hms(2024, 1, 1, 8, 0, 0), civil_hms(2024, 1, 3, 8, 0, 0)]
        );
    }

    #[test]
    fn test_work_schedule_edges() {
        let p = period("2024-01-01", "2024-01-07");
        assert_eq!(work_schedule(&p, 7, 0).unwrap().len(), 7);
        assert!(work_schedule(&p, 0, 3).unwrap().is_empty());

        let single = period("2024-01-01", "2024-01-01");
        assert_eq!(work_schedule(&single, 1, 6).unwrap(), vec![civil(2024, 1, 1)]);

        let inverted = DatePeriod::new(civil(2024, 1, 7), civil(2024, 1, 1));
        assert!(work_schedule(&inverted, 5, 2).unwrap().is_empty());
    }

    #[test]
    fn test_work_schedule_rejects_empty_cycle() {
        let p = period("2024-01-01", "2024-01-07");
        assert_eq!(
            work_schedule(&p, 0, 0),
            Err(ScheduleError::InvalidCycle {
                work_days: 0,
                off_days:  0,
            })
        );
        assert!(work_schedule(&p, u32::MAX, 1).is_err());
    }
}

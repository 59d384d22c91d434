//! Calendar math for the fixed 365-day plan span.
//!
//! Pure functions that map 1-based plan day indices to concrete calendar
//! dates within a reference year and back. The plan span is fixed at 365
//! days; in leap years the reference year's Dec 31 maps to day 366, which
//! has no reading and renders as "plan completed" downstream.

use jiff::civil::Date;
use jiff::{Span, Zoned};

use crate::error::{Result, TrackerError};

/// Number of days in a reading plan.
pub const PLAN_DAYS: u16 = 365;

/// Converts a 1-based day index to a calendar date in the reference year.
///
/// Day 1 is January 1 of `reference_year`. No upper bounds check is applied;
/// callers are expected to pass indices in `[1, PLAN_DAYS]`.
pub fn day_to_date(day: u16, reference_year: i16) -> Result<Date> {
    let jan1 = Date::new(reference_year, 1, 1).map_err(|e| {
        TrackerError::invalid_input("reference_year", e.to_string())
    })?;
    jan1.checked_add(Span::new().days(i64::from(day) - 1))
        .map_err(|e| TrackerError::invalid_input("day", e.to_string()))
}

/// Returns the 1-based day of year for a date (January 1 is day 1).
pub fn day_of_year(date: Date) -> u16 {
    date.day_of_year() as u16
}

/// Returns the day of year only when the date falls in `year`.
///
/// Used to decide whether "today" should be highlighted in a calendar that
/// is fixed to a specific plan year.
pub fn day_of_year_in(date: Date, year: i16) -> Option<u16> {
    if date.year() == year {
        Some(day_of_year(date))
    } else {
        None
    }
}

/// Formats a date as a short label, e.g. `Thu, Jan 1`.
pub fn format_date(date: Date) -> String {
    date.strftime("%a, %b %-d").to_string()
}

/// Today's date in the system timezone.
pub fn today() -> Date {
    Zoned::now().date()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_one_is_january_first() {
        let date = day_to_date(1, 2026).expect("day 1 should map to a date");
        assert_eq!(date, Date::new(2026, 1, 1).unwrap());
    }

    #[test]
    fn test_day_365_is_december_31() {
        let date = day_to_date(365, 2026).expect("day 365 should map to a date");
        assert_eq!(date, Date::new(2026, 12, 31).unwrap());
    }

    #[test]
    fn test_day_of_year_round_trip() {
        for day in 1..=PLAN_DAYS {
            let date = day_to_date(day, 2026).expect("valid day");
            assert_eq!(day_of_year(date), day);
        }
    }

    #[test]
    fn test_leap_year_day_366_spills_past_the_plan() {
        // 2028 is a leap year; the 365-day span stops short of Dec 31.
        let date = day_to_date(365, 2028).expect("valid day");
        assert_eq!(date, Date::new(2028, 12, 30).unwrap());
        assert_eq!(day_of_year(Date::new(2028, 12, 31).unwrap()), 366);
    }

    #[test]
    fn test_day_of_year_in_matching_year() {
        let date = Date::new(2026, 3, 1).unwrap();
        assert_eq!(day_of_year_in(date, 2026), Some(60));
    }

    #[test]
    fn test_day_of_year_in_other_year_is_none() {
        let date = Date::new(2025, 3, 1).unwrap();
        assert_eq!(day_of_year_in(date, 2026), None);
    }

    #[test]
    fn test_format_date_label() {
        let date = Date::new(2026, 1, 1).unwrap();
        assert_eq!(format_date(date), "Thu, Jan 1");
    }
}

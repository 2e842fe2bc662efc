//! Calendar primitives.
//!
//! This module provides day counting, weekend detection and same-day
//! detection for naive wall-clock timestamps.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

const DAYS_IN_WEEK: i64 = 7;
const WEEKEND_DAYS_IN_WEEK: i64 = 2;

/// Counts the calendar days between two timestamps.
///
/// Only the calendar dates take part, so the time of day never affects the
/// result. Returns 0 for two timestamps on the same date and a positive
/// count when `end` falls on a later date.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::days_between;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-14 23:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-15 00:15:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(days_between(start, end), 1);
/// ```
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end.date() - start.date()).num_days()
}

/// Returns true if the date falls on a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
/// // 2026-01-16 is a Friday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()));
/// ```
pub fn is_weekend<D: Datelike>(date: D) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true if both timestamps fall on the same calendar date.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Counts weekend days among the `days` consecutive dates beginning at `start`.
///
/// `start` is included and the date `days` steps later is not. Any seven
/// consecutive days contain exactly two weekend days.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::count_weekend_days_in_range;
/// use chrono::NaiveDate;
///
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
/// assert_eq!(count_weekend_days_in_range(friday, 0), 0);
/// assert_eq!(count_weekend_days_in_range(friday, 3), 2);
/// assert_eq!(count_weekend_days_in_range(friday, 7), 2);
/// ```
pub fn count_weekend_days_in_range(start: NaiveDate, days: u32) -> u32 {
    start
        .iter_days()
        .take(days as usize)
        .filter(|date| is_weekend(*date))
        .count() as u32
}

/// Counts weekdays among the dates from `start` (inclusive) to `end` (exclusive).
///
/// Whole weeks contribute five weekdays each; only the remaining partial
/// week is scanned day by day, so the cost is bounded regardless of length.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::weekdays_between;
/// use chrono::NaiveDateTime;
///
/// // Monday to the Monday two weeks later
/// let start = NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-26 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(weekdays_between(start, end), 10);
/// ```
pub fn weekdays_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let days = days_between(start, end);
    let full_week_weekends = days.div_euclid(DAYS_IN_WEEK) * WEEKEND_DAYS_IN_WEEK;
    let remainder = days.rem_euclid(DAYS_IN_WEEK) as u32;

    days - full_week_weekends - i64::from(count_weekend_days_in_range(start.date(), remainder))
}

//! Short stay billing window primitives.
//!
//! Short stay hours only accrue inside the daily [`BillingWindow`]
//! (08:00 to 18:00 by default). These functions work out how many window
//! hours fall on the first day of a stay, on the last day of a stay, and
//! within a stay that starts and ends on the same date.

use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;

use crate::config::BillingWindow;

use super::is_weekend;

const MS_PER_HOUR: i64 = 3_600_000;

/// Billable hours on the day a multi-day stay starts.
///
/// - Arriving in or after the closing hour bills nothing for that day.
/// - Arriving in or before the opening hour bills the full window.
/// - Otherwise the hours from arrival until closing are billed.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::hours_from_start_exclusive;
/// use parking_tariff::config::BillingWindow;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let window = BillingWindow::default();
/// let arrival = NaiveDateTime::parse_from_str("2026-01-14 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(hours_from_start_exclusive(arrival, &window), Decimal::from(4));
/// ```
pub fn hours_from_start_exclusive(from: NaiveDateTime, window: &BillingWindow) -> Decimal {
    if from.hour() >= window.end_hour() {
        return Decimal::ZERO;
    }
    if from.hour() <= window.start_hour() {
        return window.max_hours();
    }
    hours_between(from, window.closes_on(from.date()))
}

/// Billable hours on the day a multi-day stay ends.
///
/// - Leaving before the opening hour bills nothing for that day.
/// - Leaving in or after the closing hour bills the full window.
/// - Otherwise the hours from opening until departure are billed.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::hours_from_end_exclusive;
/// use parking_tariff::config::BillingWindow;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let window = BillingWindow::default();
/// let departure = NaiveDateTime::parse_from_str("2026-01-14 13:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(hours_from_end_exclusive(departure, &window), Decimal::from(5));
/// ```
pub fn hours_from_end_exclusive(to: NaiveDateTime, window: &BillingWindow) -> Decimal {
    if to.hour() < window.start_hour() {
        return Decimal::ZERO;
    }
    if to.hour() >= window.end_hour() {
        return window.max_hours();
    }
    hours_between(window.opens_on(to.date()), to)
}

/// Billable hours for a stay that starts and ends on the same date.
///
/// Weekend stays bill nothing. Otherwise this is the overlap of
/// `[start, end)` with the billing window, never less than zero.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::hours_same_day;
/// use parking_tariff::config::BillingWindow;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let window = BillingWindow::default();
/// // Wednesday 07:00 to 19:00 is clamped to 08:00 to 18:00
/// let start = NaiveDateTime::parse_from_str("2026-01-14 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-14 19:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(hours_same_day(start, end, &window), Decimal::from(10));
/// ```
pub fn hours_same_day(start: NaiveDateTime, end: NaiveDateTime, window: &BillingWindow) -> Decimal {
    if is_weekend(start) {
        return Decimal::ZERO;
    }

    let opens = window.opens_on(start.date());
    let closes = window.closes_on(start.date());
    let from = start.clamp(opens, closes);
    let to = end.clamp(opens, closes);

    if to <= from {
        return Decimal::ZERO;
    }
    hours_between(from, to)
}

/// Fractional hours from `from` to `to`, at millisecond resolution.
fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> Decimal {
    Decimal::from((to - from).num_milliseconds().abs()) / Decimal::from(MS_PER_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn window() -> BillingWindow {
        BillingWindow::default()
    }

    // ==========================================================================
    // BW-001: Start day
    // ==========================================================================
    #[test]
    fn test_bw_001_arrival_after_close_bills_nothing() {
        let from = make_datetime("2026-01-14", "19:00:00");
        assert_eq!(hours_from_start_exclusive(from, &window()), Decimal::ZERO);
    }

    #[test]
    fn test_bw_001_arrival_at_close_bills_nothing() {
        let from = make_datetime("2026-01-14", "18:00:00");
        assert_eq!(hours_from_start_exclusive(from, &window()), Decimal::ZERO);
    }

    #[test]
    fn test_bw_001_arrival_before_open_bills_full_window() {
        let from = make_datetime("2026-01-14", "07:00:00");
        assert_eq!(hours_from_start_exclusive(from, &window()), dec("10"));
    }

    #[test]
    fn test_bw_001_arrival_in_opening_hour_bills_full_window() {
        let from = make_datetime("2026-01-14", "08:45:00");
        assert_eq!(hours_from_start_exclusive(from, &window()), dec("10"));
    }

    #[test]
    fn test_bw_001_arrival_mid_window() {
        let from = make_datetime("2026-01-14", "14:00:00");
        assert_eq!(hours_from_start_exclusive(from, &window()), dec("4"));
    }

    #[test]
    fn test_bw_001_arrival_fractional_hours() {
        let from = make_datetime("2026-01-14", "16:30:00");
        assert_eq!(hours_from_start_exclusive(from, &window()), dec("1.5"));
    }

    // ==========================================================================
    // BW-002: End day
    // ==========================================================================
    #[test]
    fn test_bw_002_departure_before_open_bills_nothing() {
        let to = make_datetime("2026-01-14", "07:00:00");
        assert_eq!(hours_from_end_exclusive(to, &window()), Decimal::ZERO);
    }

    #[test]
    fn test_bw_002_departure_after_close_bills_full_window() {
        let to = make_datetime("2026-01-14", "19:00:00");
        assert_eq!(hours_from_end_exclusive(to, &window()), dec("10"));
    }

    #[test]
    fn test_bw_002_departure_in_closing_hour_bills_full_window() {
        let to = make_datetime("2026-01-14", "18:00:00");
        assert_eq!(hours_from_end_exclusive(to, &window()), dec("10"));
    }

    #[test]
    fn test_bw_002_departure_mid_window() {
        let to = make_datetime("2026-01-14", "13:00:00");
        assert_eq!(hours_from_end_exclusive(to, &window()), dec("5"));
    }

    #[test]
    fn test_bw_002_departure_at_open_bills_nothing_yet() {
        let to = make_datetime("2026-01-14", "08:00:00");
        assert_eq!(hours_from_end_exclusive(to, &window()), Decimal::ZERO);
    }

    // ==========================================================================
    // BW-003: Same day
    // ==========================================================================
    #[test]
    fn test_bw_003_clamps_both_ends() {
        let start = make_datetime("2026-01-14", "07:00:00");
        let end = make_datetime("2026-01-14", "19:00:00");
        assert_eq!(hours_same_day(start, end, &window()), dec("10"));
    }

    #[test]
    fn test_bw_003_inside_window() {
        let start = make_datetime("2026-01-14", "09:00:00");
        let end = make_datetime("2026-01-14", "17:00:00");
        assert_eq!(hours_same_day(start, end, &window()), dec("8"));
    }

    #[test]
    fn test_bw_003_saturday_bills_nothing() {
        let start = make_datetime("2026-01-17", "09:00:00");
        let end = make_datetime("2026-01-17", "17:00:00");
        assert_eq!(hours_same_day(start, end, &window()), Decimal::ZERO);
    }

    #[test]
    fn test_bw_003_entirely_before_window() {
        let start = make_datetime("2026-01-14", "05:00:00");
        let end = make_datetime("2026-01-14", "07:00:00");
        assert_eq!(hours_same_day(start, end, &window()), Decimal::ZERO);
    }

    #[test]
    fn test_bw_003_entirely_after_window() {
        let start = make_datetime("2026-01-14", "18:30:00");
        let end = make_datetime("2026-01-14", "22:00:00");
        assert_eq!(hours_same_day(start, end, &window()), Decimal::ZERO);
    }

    #[test]
    fn test_bw_003_departure_in_closing_hour_is_clamped() {
        let start = make_datetime("2026-01-14", "17:00:00");
        let end = make_datetime("2026-01-14", "18:30:00");
        assert_eq!(hours_same_day(start, end, &window()), dec("1"));
    }

    #[test]
    fn test_bw_003_twenty_minutes() {
        let start = make_datetime("2026-01-14", "10:00:00");
        let end = make_datetime("2026-01-14", "10:20:00");
        let hours = hours_same_day(start, end, &window());
        assert!(hours > dec("0.3333") && hours < dec("0.3334"));
    }

    #[test]
    fn test_bw_003_custom_window() {
        let window = BillingWindow::new(6, 22).unwrap();
        let start = make_datetime("2026-01-14", "05:00:00");
        let end = make_datetime("2026-01-14", "23:00:00");
        assert_eq!(hours_same_day(start, end, &window), dec("16"));
    }
}

//! Property tests for the tariff calculations.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use parking_tariff::calculation::{
    calculate_long_stay, calculate_long_stay_units, calculate_short_stay,
    calculate_short_stay_units, count_weekend_days_in_range, days_between, is_weekend,
    weekdays_between,
};
use parking_tariff::config::{LongStayTariff, ShortStayTariff};

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Any minute within roughly four years.
fn timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..4 * 366 * 24 * 60).prop_map(|minutes| base() + Duration::minutes(minutes))
}

/// An ordered stay of up to sixty days.
fn stay() -> impl Strategy<Value = (NaiveDateTime, NaiveDateTime)> {
    (timestamp(), 0i64..60 * 24 * 60).prop_map(|(start, length)| (start, start + Duration::minutes(length)))
}

proptest! {
    #[test]
    fn long_stay_same_instant_is_one_unit(d in timestamp()) {
        prop_assert_eq!(calculate_long_stay_units(d, d), Decimal::ONE);
        prop_assert_eq!(calculate_long_stay(d, d, &LongStayTariff::default()), Decimal::from(750));
    }

    #[test]
    fn long_stay_units_are_days_plus_one((start, end) in stay()) {
        prop_assert_eq!(
            calculate_long_stay_units(start, end),
            Decimal::from(days_between(start, end) + 1)
        );
    }

    #[test]
    fn long_stay_units_grow_with_whole_days((start, end) in stay(), extra in 1i64..30) {
        let later = end + Duration::days(extra);
        prop_assert!(calculate_long_stay_units(start, later) > calculate_long_stay_units(start, end));
    }

    #[test]
    fn any_seven_days_hold_two_weekend_days(d in timestamp()) {
        prop_assert_eq!(count_weekend_days_in_range(d.date(), 7), 2);
    }

    #[test]
    fn weekdays_between_matches_scan((start, end) in stay()) {
        let scanned = start
            .date()
            .iter_days()
            .take(days_between(start, end) as usize)
            .filter(|date| !is_weekend(*date))
            .count() as i64;
        prop_assert_eq!(weekdays_between(start, end), scanned);
    }

    #[test]
    fn short_stay_is_never_negative((start, end) in stay()) {
        let tariff = ShortStayTariff::default();
        prop_assert!(calculate_short_stay_units(start, end, &tariff) >= Decimal::ZERO);
        prop_assert!(calculate_short_stay(start, end, &tariff) >= Decimal::ZERO);
    }

    #[test]
    fn short_stay_never_exceeds_window_per_day((start, end) in stay()) {
        let tariff = ShortStayTariff::default();
        let days = Decimal::from(days_between(start, end) + 1);
        prop_assert!(calculate_short_stay_units(start, end, &tariff) <= days * Decimal::from(10));
    }

    #[test]
    fn costs_are_whole_numbers((start, end) in stay()) {
        let long = calculate_long_stay(start, end, &LongStayTariff::default());
        let short = calculate_short_stay(start, end, &ShortStayTariff::default());
        prop_assert_eq!(long, long.trunc());
        prop_assert_eq!(short, short.trunc());
    }
}

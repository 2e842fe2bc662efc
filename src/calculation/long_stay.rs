//! Long stay tariff.
//!
//! A long stay is billed one unit per calendar day touched, counting both
//! the entry day and the exit day, regardless of time of day or weekday.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::config::LongStayTariff;
use crate::models::{AuditStep, Stay};

use super::{days_between, floor_cost};

/// The billable units of a long stay, including the audit step.
#[derive(Debug, Clone)]
pub struct LongStayAssessment {
    /// Calendar days between entry and exit.
    pub days_between: i64,
    /// Billable day units.
    pub units: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Billable day units for a long stay: `days_between(start, end) + 1`.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::calculate_long_stay_units;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-14 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-16 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(calculate_long_stay_units(start, end), Decimal::from(3));
/// ```
pub fn calculate_long_stay_units(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    Decimal::from(days_between(start, end) + 1)
}

/// The long stay cost: `floor(units × rate_per_day)`.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::calculate_long_stay;
/// use parking_tariff::config::LongStayTariff;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let instant = NaiveDateTime::parse_from_str("2026-01-14 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let cost = calculate_long_stay(instant, instant, &LongStayTariff::default());
/// assert_eq!(cost, Decimal::from(750));
/// ```
pub fn calculate_long_stay(
    start: NaiveDateTime,
    end: NaiveDateTime,
    tariff: &LongStayTariff,
) -> Decimal {
    floor_cost(calculate_long_stay_units(start, end), tariff.rate_per_day)
}

/// Works out the billable units of a stay under the long stay tariff.
pub fn assess_long_stay(stay: &Stay, step_number: u32) -> LongStayAssessment {
    let days = days_between(stay.start(), stay.end());
    let units = calculate_long_stay_units(stay.start(), stay.end());

    let audit_step = AuditStep {
        step_number,
        rule_id: "long_stay_units".to_string(),
        rule_name: "Long Stay Day Units".to_string(),
        input: serde_json::json!({
            "start_date": stay.start().date().to_string(),
            "end_date": stay.end().date().to_string()
        }),
        output: serde_json::json!({
            "days_between": days,
            "units": units.normalize().to_string()
        }),
        reasoning: format!(
            "{} to {}: {} days between + 1 = {} day units (entry and exit days inclusive)",
            stay.start().date(),
            stay.end().date(),
            days,
            units.normalize()
        ),
    };

    LongStayAssessment {
        days_between: days,
        units,
        audit_step,
    }
}

//! Short stay tariff.
//!
//! A short stay is billed per hour, but only for hours that fall inside the
//! daily billing window on a weekday. A stay within a single date bills its
//! overlap with that day's window. A stay across several dates bills:
//!
//! - the window hours remaining on the entry day,
//! - a full window for every weekday strictly between entry and exit,
//! - the window hours elapsed on the exit day.
//!
//! Weekend entry or exit days contribute nothing.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::ShortStayTariff;
use crate::models::{AuditStep, AuditWarning, Stay};

use super::{
    floor_cost, hours_from_end_exclusive, hours_from_start_exclusive, hours_same_day, is_same_day,
    is_weekend, weekdays_between,
};

/// How the billable hours of a short stay were made up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShortStayBreakdown {
    /// Entry and exit on the same date.
    SameDay {
        /// Hours of the stay inside that day's window.
        hours: Decimal,
    },
    /// Entry and exit on different dates.
    MultiDay {
        /// Window hours billed on the entry day.
        first_day_hours: Decimal,
        /// Weekdays strictly between the entry and exit days.
        interior_weekdays: i64,
        /// Window hours billed for each interior weekday.
        hours_per_weekday: Decimal,
        /// Window hours billed on the exit day.
        last_day_hours: Decimal,
    },
}

impl ShortStayBreakdown {
    /// Total billable hours.
    pub fn units(&self) -> Decimal {
        match *self {
            ShortStayBreakdown::SameDay { hours } => hours,
            ShortStayBreakdown::MultiDay {
                first_day_hours,
                interior_weekdays,
                hours_per_weekday,
                last_day_hours,
            } => {
                Decimal::from(interior_weekdays) * hours_per_weekday
                    + first_day_hours
                    + last_day_hours
            }
        }
    }
}

/// The billable units of a short stay, including the audit step.
#[derive(Debug, Clone)]
pub struct ShortStayAssessment {
    /// How the hours were made up.
    pub breakdown: ShortStayBreakdown,
    /// Billable hour units.
    pub units: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Set when the stay accrued no billable hours at all.
    pub warning: Option<AuditWarning>,
}

/// Breaks a stay down into the hours billed on each kind of day.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::{short_stay_breakdown, ShortStayBreakdown};
/// use parking_tariff::config::ShortStayTariff;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// // Friday 09:00 to Monday 17:00
/// let start = NaiveDateTime::parse_from_str("2026-01-16 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-19 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let breakdown = short_stay_breakdown(start, end, &ShortStayTariff::default());
/// assert_eq!(
///     breakdown,
///     ShortStayBreakdown::MultiDay {
///         first_day_hours: Decimal::from(9),
///         interior_weekdays: 0,
///         hours_per_weekday: Decimal::from(10),
///         last_day_hours: Decimal::from(9),
///     }
/// );
/// assert_eq!(breakdown.units(), Decimal::from(18));
/// ```
pub fn short_stay_breakdown(
    start: NaiveDateTime,
    end: NaiveDateTime,
    tariff: &ShortStayTariff,
) -> ShortStayBreakdown {
    let window = &tariff.billing_window;

    if is_same_day(start, end) {
        return ShortStayBreakdown::SameDay {
            hours: hours_same_day(start, end, window),
        };
    }

    // weekdays_between counts the entry day but not the exit day
    let start_on_weekend = is_weekend(start);
    let interior_weekdays = weekdays_between(start, end) - if start_on_weekend { 0 } else { 1 };

    let first_day_hours = if start_on_weekend {
        Decimal::ZERO
    } else {
        hours_from_start_exclusive(start, window)
    };
    let last_day_hours = if is_weekend(end) {
        Decimal::ZERO
    } else {
        hours_from_end_exclusive(end, window)
    };

    ShortStayBreakdown::MultiDay {
        first_day_hours,
        interior_weekdays,
        hours_per_weekday: window.max_hours(),
        last_day_hours,
    }
}

/// Billable hour units for a short stay.
pub fn calculate_short_stay_units(
    start: NaiveDateTime,
    end: NaiveDateTime,
    tariff: &ShortStayTariff,
) -> Decimal {
    short_stay_breakdown(start, end, tariff).units()
}

/// The short stay cost: `floor(units × rate_per_hour)`.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::calculate_short_stay;
/// use parking_tariff::config::ShortStayTariff;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// // Wednesday 09:00 to 17:00
/// let start = NaiveDateTime::parse_from_str("2026-01-14 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-14 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(calculate_short_stay(start, end, &ShortStayTariff::default()), Decimal::from(880));
/// ```
pub fn calculate_short_stay(
    start: NaiveDateTime,
    end: NaiveDateTime,
    tariff: &ShortStayTariff,
) -> Decimal {
    floor_cost(
        calculate_short_stay_units(start, end, tariff),
        tariff.rate_per_hour,
    )
}

/// Works out the billable units of a stay under the short stay tariff.
pub fn assess_short_stay(
    stay: &Stay,
    tariff: &ShortStayTariff,
    step_number: u32,
) -> ShortStayAssessment {
    let breakdown = short_stay_breakdown(stay.start(), stay.end(), tariff);
    let units = breakdown.units();
    let window = &tariff.billing_window;

    let reasoning = match breakdown {
        ShortStayBreakdown::SameDay { hours } => format!(
            "Same-day stay on {}: {} hours inside the {:02}:00-{:02}:00 window",
            stay.start().date(),
            hours.normalize().round_dp(4),
            window.start_hour(),
            window.end_hour()
        ),
        ShortStayBreakdown::MultiDay {
            first_day_hours,
            interior_weekdays,
            hours_per_weekday,
            last_day_hours,
        } => format!(
            "Multi-day stay: {} × {} interior weekday hours + {} first-day hours + {} last-day hours = {} hours",
            interior_weekdays,
            hours_per_weekday.normalize(),
            first_day_hours.normalize().round_dp(4),
            last_day_hours.normalize().round_dp(4),
            units.normalize().round_dp(4)
        ),
    };

    let warning = (units.is_zero() && stay.start() != stay.end()).then(|| AuditWarning {
        code: "NO_BILLABLE_HOURS".to_string(),
        message: format!(
            "Stay from {} to {} has no weekday hours inside the billing window",
            stay.start(),
            stay.end()
        ),
    });

    let audit_step = AuditStep {
        step_number,
        rule_id: "short_stay_units".to_string(),
        rule_name: "Short Stay Hour Units".to_string(),
        input: serde_json::json!({
            "start": stay.start().to_string(),
            "end": stay.end().to_string(),
            "billing_window_start_hour": window.start_hour(),
            "billing_window_end_hour": window.end_hour()
        }),
        output: serde_json::json!({
            "breakdown": breakdown,
            "units": units.normalize().to_string()
        }),
        reasoning,
    };

    ShortStayAssessment {
        breakdown,
        units,
        audit_step,
        warning,
    }
}

//! Calculation logic for the parking tariff engine.
//!
//! This module contains calendar primitives (day counting and weekend
//! detection), short stay billing window primitives, the long stay and
//! short stay unit and cost functions, rate application, and the
//! [`ParkingCalculator`] that assembles audited quotes.

mod billing_window;
mod calculator;
mod calendar;
mod long_stay;
mod rate;
mod short_stay;

pub use billing_window::{hours_from_end_exclusive, hours_from_start_exclusive, hours_same_day};
pub use calculator::{ENGINE_VERSION, ParkingCalculator};
pub use calendar::{
    count_weekend_days_in_range, days_between, is_same_day, is_weekend, weekdays_between,
};
pub use long_stay::{
    LongStayAssessment, assess_long_stay, calculate_long_stay, calculate_long_stay_units,
};
pub use rate::{RateResult, apply_rate, floor_cost};
pub use short_stay::{
    ShortStayAssessment, ShortStayBreakdown, assess_short_stay, calculate_short_stay,
    calculate_short_stay_units, short_stay_breakdown,
};

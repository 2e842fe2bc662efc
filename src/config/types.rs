//! Configuration types for parking tariffs.
//!
//! This module contains the strongly-typed tariff structures that are
//! deserialized from YAML configuration files. Every type has a default
//! matching the standard car park tariffs.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TariffError, TariffResult};

const DEFAULT_LONG_STAY_RATE_PER_DAY: i64 = 750;
const DEFAULT_SHORT_STAY_RATE_PER_HOUR: i64 = 110;

/// Default hour at which short stay billing starts (08:00).
pub const SHORT_STAY_BILLING_START_HOUR: u32 = 8;
/// Default hour at which short stay billing ends (18:00).
pub const SHORT_STAY_BILLING_END_HOUR: u32 = 18;

const MS_PER_HOUR: i64 = 3_600_000;

/// The raw hour bounds of a billing window as they appear in YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingWindowHours {
    /// The hour at which billing opens.
    pub start_hour: u32,
    /// The hour at which billing closes.
    pub end_hour: u32,
}

/// The daily interval `[opens, closes)` during which short stay hours accrue.
///
/// # Example
///
/// ```
/// use parking_tariff::config::BillingWindow;
/// use rust_decimal::Decimal;
///
/// let window = BillingWindow::new(8, 18).unwrap();
/// assert_eq!(window.max_hours(), Decimal::from(10));
///
/// assert!(BillingWindow::new(18, 8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BillingWindowHours", into = "BillingWindowHours")]
pub struct BillingWindow {
    opens: NaiveTime,
    closes: NaiveTime,
}

impl BillingWindow {
    /// Creates a window from whole hours.
    ///
    /// Fails with [`TariffError::InvalidTariff`] unless
    /// `start_hour < end_hour <= 23`.
    pub fn new(start_hour: u32, end_hour: u32) -> TariffResult<Self> {
        if start_hour >= end_hour {
            return Err(TariffError::InvalidTariff {
                message: format!(
                    "billing window start_hour {} must be before end_hour {}",
                    start_hour, end_hour
                ),
            });
        }

        let opens = NaiveTime::from_hms_opt(start_hour, 0, 0);
        let closes = NaiveTime::from_hms_opt(end_hour, 0, 0);
        match (opens, closes) {
            (Some(opens), Some(closes)) => Ok(Self { opens, closes }),
            _ => Err(TariffError::InvalidTariff {
                message: format!("billing window end_hour {} must be at most 23", end_hour),
            }),
        }
    }

    /// The hour at which billing opens.
    pub fn start_hour(&self) -> u32 {
        self.opens.hour()
    }

    /// The hour at which billing closes.
    pub fn end_hour(&self) -> u32 {
        self.closes.hour()
    }

    /// The opening instant of the window on the given date.
    pub fn opens_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.opens)
    }

    /// The closing instant of the window on the given date.
    pub fn closes_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.closes)
    }

    /// The number of billable hours in a full window.
    pub fn max_hours(&self) -> Decimal {
        Decimal::from((self.closes - self.opens).num_milliseconds()) / Decimal::from(MS_PER_HOUR)
    }
}

impl Default for BillingWindow {
    fn default() -> Self {
        Self {
            opens: NaiveTime::MIN + chrono::Duration::hours(SHORT_STAY_BILLING_START_HOUR.into()),
            closes: NaiveTime::MIN + chrono::Duration::hours(SHORT_STAY_BILLING_END_HOUR.into()),
        }
    }
}

impl TryFrom<BillingWindowHours> for BillingWindow {
    type Error = TariffError;

    fn try_from(hours: BillingWindowHours) -> TariffResult<Self> {
        Self::new(hours.start_hour, hours.end_hour)
    }
}

impl From<BillingWindow> for BillingWindowHours {
    fn from(window: BillingWindow) -> Self {
        Self {
            start_hour: window.start_hour(),
            end_hour: window.end_hour(),
        }
    }
}

/// The long stay tariff, billed per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongStayTariff {
    /// The charge for each calendar day of the stay, in the smallest currency unit.
    pub rate_per_day: Decimal,
}

impl Default for LongStayTariff {
    fn default() -> Self {
        Self {
            rate_per_day: Decimal::from(DEFAULT_LONG_STAY_RATE_PER_DAY),
        }
    }
}

/// The short stay tariff, billed per hour inside the weekday billing window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortStayTariff {
    /// The charge for each billable hour, in the smallest currency unit.
    pub rate_per_hour: Decimal,
    /// The daily window during which hours accrue.
    #[serde(default)]
    pub billing_window: BillingWindow,
}

impl Default for ShortStayTariff {
    fn default() -> Self {
        Self {
            rate_per_hour: Decimal::from(DEFAULT_SHORT_STAY_RATE_PER_HOUR),
            billing_window: BillingWindow::default(),
        }
    }
}

/// The complete tariff configuration.
///
/// # Example
///
/// ```
/// use parking_tariff::config::TariffConfig;
/// use rust_decimal::Decimal;
///
/// let config = TariffConfig::default();
/// assert_eq!(config.long_stay.rate_per_day, Decimal::from(750));
/// assert_eq!(config.short_stay.rate_per_hour, Decimal::from(110));
/// assert_eq!(config.short_stay.billing_window.start_hour(), 8);
/// assert_eq!(config.short_stay.billing_window.end_hour(), 18);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffConfig {
    /// The long stay tariff.
    #[serde(default)]
    pub long_stay: LongStayTariff,
    /// The short stay tariff.
    #[serde(default)]
    pub short_stay: ShortStayTariff,
}

impl TariffConfig {
    /// Checks that both rates are non-negative.
    pub fn validate(&self) -> TariffResult<()> {
        if self.long_stay.rate_per_day.is_sign_negative() {
            return Err(TariffError::InvalidTariff {
                message: format!(
                    "long_stay.rate_per_day must not be negative, got {}",
                    self.long_stay.rate_per_day
                ),
            });
        }
        if self.short_stay.rate_per_hour.is_sign_negative() {
            return Err(TariffError::InvalidTariff {
                message: format!(
                    "short_stay.rate_per_hour must not be negative, got {}",
                    self.short_stay.rate_per_hour
                ),
            });
        }
        Ok(())
    }
}

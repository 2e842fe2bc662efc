//! Tariff kinds and quote results.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TariffError;

use super::AuditTrace;

/// The billing regime applied to a stay.
///
/// # Example
///
/// ```
/// use parking_tariff::models::TariffKind;
///
/// let kind: TariffKind = "short_stay".parse().unwrap();
/// assert_eq!(kind, TariffKind::ShortStay);
/// assert_eq!(kind.to_string(), "short_stay");
/// assert!("valet".parse::<TariffKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TariffKind {
    /// Billed per calendar day, both boundary days inclusive.
    LongStay,
    /// Billed per hour inside the weekday billing window.
    ShortStay,
}

impl fmt::Display for TariffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TariffKind::LongStay => write!(f, "long_stay"),
            TariffKind::ShortStay => write!(f, "short_stay"),
        }
    }
}

impl FromStr for TariffKind {
    type Err = TariffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long_stay" => Ok(TariffKind::LongStay),
            "short_stay" => Ok(TariffKind::ShortStay),
            other => Err(TariffError::UnknownTariff {
                name: other.to_string(),
            }),
        }
    }
}

/// The priced result of applying a tariff to a stay.
///
/// `cost` is always a whole number in the smallest currency unit:
/// the floor of `units × rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingQuote {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the quote.
    pub engine_version: String,
    /// The tariff that was applied.
    pub tariff: TariffKind,
    /// The start of the stay.
    pub start: NaiveDateTime,
    /// The end of the stay.
    pub end: NaiveDateTime,
    /// Billable units: days for long stay, hours for short stay.
    pub units: Decimal,
    /// The rate charged per unit.
    pub rate: Decimal,
    /// The final amount.
    pub cost: Decimal,
    /// How the amount was reached.
    pub audit: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tariff_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(TariffKind::LongStay).unwrap(),
            serde_json::json!("long_stay")
        );
        let kind: TariffKind = serde_json::from_str("\"short_stay\"").unwrap();
        assert_eq!(kind, TariffKind::ShortStay);
    }

    #[test]
    fn test_tariff_kind_round_trips_through_display() {
        for kind in [TariffKind::LongStay, TariffKind::ShortStay] {
            assert_eq!(kind.to_string().parse::<TariffKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_tariff_name_is_rejected() {
        match "hourly".parse::<TariffKind>() {
            Err(TariffError::UnknownTariff { name }) => assert_eq!(name, "hourly"),
            other => panic!("expected UnknownTariff, got {:?}", other),
        }
    }
}

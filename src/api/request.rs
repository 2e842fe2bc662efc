//! Request types for the parking tariff API.
//!
//! This module defines the JSON request structure for the `/quote` endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::TariffResult;
use crate::models::{Stay, TariffKind};

/// Request body for the `/quote` endpoint.
///
/// Timestamps are naive local wall-clock values such as
/// `"2026-01-14T09:00:00"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The tariff to price the stay under.
    pub tariff: TariffKind,
    /// When the vehicle entered.
    pub start: NaiveDateTime,
    /// When the vehicle left.
    pub end: NaiveDateTime,
}

impl QuoteRequest {
    /// Validates the requested interval into a [`Stay`].
    pub fn stay(&self) -> TariffResult<Stay> {
        Stay::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TariffError;

    #[test]
    fn test_deserialize_quote_request() {
        let json = r#"{
            "tariff": "short_stay",
            "start": "2026-01-14T09:00:00",
            "end": "2026-01-14T17:00:00"
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.tariff, TariffKind::ShortStay);
        assert_eq!(request.stay().unwrap().duration().num_hours(), 8);
    }

    #[test]
    fn test_reversed_interval_is_rejected() {
        let json = r#"{
            "tariff": "long_stay",
            "start": "2026-01-15T09:00:00",
            "end": "2026-01-14T09:00:00"
        }"#;

        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(
            request.stay(),
            Err(TariffError::InvalidStay { .. })
        ));
    }

    #[test]
    fn test_unknown_tariff_fails_to_deserialize() {
        let json = r#"{
            "tariff": "valet",
            "start": "2026-01-14T09:00:00",
            "end": "2026-01-14T17:00:00"
        }"#;

        assert!(serde_json::from_str::<QuoteRequest>(json).is_err());
    }
}

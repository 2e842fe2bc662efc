//! Quote assembly.
//!
//! [`ParkingCalculator`] holds a tariff configuration and turns a [`Stay`]
//! into a fully audited [`ParkingQuote`].

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::TariffConfig;
use crate::models::{AuditStep, AuditTrace, AuditWarning, ParkingQuote, Stay, TariffKind};

use super::{apply_rate, assess_long_stay, assess_short_stay};

/// The engine version stamped onto every quote.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prices stays against a fixed tariff configuration.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::ParkingCalculator;
/// use parking_tariff::config::TariffConfig;
/// use parking_tariff::models::{Stay, TariffKind};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let calculator = ParkingCalculator::new(TariffConfig::default());
/// let start = NaiveDateTime::parse_from_str("2026-01-14 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-16 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let stay = Stay::new(start, end).unwrap();
///
/// let quote = calculator.quote(TariffKind::LongStay, &stay);
/// assert_eq!(quote.units, Decimal::from(3));
/// assert_eq!(quote.cost, Decimal::from(2250));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParkingCalculator {
    config: TariffConfig,
}

impl ParkingCalculator {
    /// Creates a calculator for the given tariffs.
    pub fn new(config: TariffConfig) -> Self {
        Self { config }
    }

    /// Returns the tariffs this calculator bills with.
    pub fn config(&self) -> &TariffConfig {
        &self.config
    }

    /// Prices a stay under the long stay tariff.
    pub fn long_stay(&self, stay: &Stay) -> ParkingQuote {
        self.quote(TariffKind::LongStay, stay)
    }

    /// Prices a stay under the short stay tariff.
    pub fn short_stay(&self, stay: &Stay) -> ParkingQuote {
        self.quote(TariffKind::ShortStay, stay)
    }

    /// Prices a stay under the given tariff.
    pub fn quote(&self, tariff: TariffKind, stay: &Stay) -> ParkingQuote {
        let start_time = Instant::now();
        let mut steps: Vec<AuditStep> = Vec::new();
        let mut warnings: Vec<AuditWarning> = Vec::new();
        let mut step_number: u32 = 1;

        steps.push(classify_stay(tariff, stay, step_number));
        step_number += 1;

        let (units, rate) = match tariff {
            TariffKind::LongStay => {
                let assessment = assess_long_stay(stay, step_number);
                steps.push(assessment.audit_step);
                (assessment.units, self.config.long_stay.rate_per_day)
            }
            TariffKind::ShortStay => {
                let assessment = assess_short_stay(stay, &self.config.short_stay, step_number);
                steps.push(assessment.audit_step);
                warnings.extend(assessment.warning);
                (assessment.units, self.config.short_stay.rate_per_hour)
            }
        };
        step_number += 1;

        let rate_result = apply_rate(tariff, units, rate, step_number);
        steps.push(rate_result.audit_step);
        let cost = rate_result.cost;

        let duration_us = start_time.elapsed().as_micros() as u64;
        debug!(
            tariff = %tariff,
            start = %stay.start(),
            end = %stay.end(),
            units = %units.normalize(),
            cost = %cost,
            warnings = warnings.len(),
            duration_us,
            "Quote calculated"
        );

        ParkingQuote {
            quote_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            tariff,
            start: stay.start(),
            end: stay.end(),
            units,
            rate,
            cost,
            audit: AuditTrace {
                steps,
                warnings,
                duration_us,
            },
        }
    }
}

/// Records which tariff applies and the shape of the stay.
fn classify_stay(tariff: TariffKind, stay: &Stay, step_number: u32) -> AuditStep {
    let duration = stay.duration();
    let minutes = Decimal::from(duration.num_minutes());

    AuditStep {
        step_number,
        rule_id: "stay_classification".to_string(),
        rule_name: "Stay Classification".to_string(),
        input: serde_json::json!({
            "start": stay.start().to_string(),
            "end": stay.end().to_string()
        }),
        output: serde_json::json!({
            "tariff": tariff.to_string(),
            "start_weekday": stay.start().format("%A").to_string(),
            "end_weekday": stay.end().format("%A").to_string(),
            "duration_minutes": duration.num_minutes()
        }),
        reasoning: format!(
            "{} stay of {} hours from {} to {}",
            tariff,
            (minutes / Decimal::from(60)).round_dp(2).normalize(),
            stay.start().format("%A %Y-%m-%d %H:%M"),
            stay.end().format("%A %Y-%m-%d %H:%M")
        ),
    }
}

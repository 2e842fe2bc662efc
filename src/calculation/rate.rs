//! Rate application.
//!
//! Turns billable units into a whole-unit cost by multiplying by the
//! tariff rate and flooring.

use rust_decimal::Decimal;

use crate::models::{AuditStep, TariffKind};

/// The result of applying a rate, including the cost and audit step.
#[derive(Debug, Clone)]
pub struct RateResult {
    /// The floored cost.
    pub cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns `floor(units × rate)`.
///
/// # Example
///
/// ```
/// use parking_tariff::calculation::floor_cost;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let units = Decimal::from_str("1.5").unwrap();
/// assert_eq!(floor_cost(units, Decimal::from(110)), Decimal::from(165));
///
/// let units = Decimal::from_str("0.25").unwrap();
/// assert_eq!(floor_cost(units, Decimal::from(110)), Decimal::from(27));
/// ```
pub fn floor_cost(units: Decimal, rate: Decimal) -> Decimal {
    (units * rate).floor()
}

/// Applies a per-unit rate and records the step.
pub fn apply_rate(tariff: TariffKind, units: Decimal, rate: Decimal, step_number: u32) -> RateResult {
    let cost = floor_cost(units, rate);
    let unit_name = match tariff {
        TariffKind::LongStay => "day",
        TariffKind::ShortStay => "hour",
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_application".to_string(),
        rule_name: "Rate Application".to_string(),
        input: serde_json::json!({
            "tariff": tariff.to_string(),
            "units": units.normalize().to_string(),
            "rate_per_unit": rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "cost": cost.normalize().to_string()
        }),
        reasoning: format!(
            "floor({} {} units × {}) = {}",
            units.normalize().round_dp(4),
            unit_name,
            rate.normalize(),
            cost.normalize()
        ),
    };

    RateResult { cost, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_floor_cost_whole_units() {
        assert_eq!(floor_cost(dec("3"), dec("750")), dec("2250"));
    }

    #[test]
    fn test_floor_cost_truncates_fraction() {
        // 20 minutes at 110 per hour is 36.67
        let units = Decimal::from(20) / Decimal::from(60);
        assert_eq!(floor_cost(units, dec("110")), dec("36"));
    }

    #[test]
    fn test_floor_cost_zero_units() {
        assert_eq!(floor_cost(Decimal::ZERO, dec("110")), Decimal::ZERO);
    }

    #[test]
    fn test_apply_rate_audit_step() {
        let result = apply_rate(TariffKind::ShortStay, dec("8"), dec("110"), 3);
        assert_eq!(result.cost, dec("880"));
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "rate_application");
        assert_eq!(result.audit_step.input["tariff"], "short_stay");
        assert_eq!(result.audit_step.output["cost"], "880");
        assert_eq!(result.audit_step.reasoning, "floor(8 hour units × 110) = 880");
    }
}

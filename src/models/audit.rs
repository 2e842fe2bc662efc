//! Audit trail models.
//!
//! Every quote carries an [`AuditTrace`] recording how the stay was
//! classified, how many units were billed and how the rate was applied.

use serde::{Deserialize, Serialize};

/// A single step in the calculation audit trail.
///
/// # Example
///
/// ```
/// use parking_tariff::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "long_stay_units".to_string(),
///     rule_name: "Long Stay Units".to_string(),
///     input: serde_json::json!({ "days_between": 2 }),
///     output: serde_json::json!({ "units": "3" }),
///     reasoning: "2 days between + 1 = 3 day units".to_string(),
/// };
/// assert_eq!(step.step_number, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings never change the cost; they flag quotes a caller may want to
/// look at twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

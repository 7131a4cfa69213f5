//! Calculation result models for the Amortization Engine.
//!
//! This module contains the [`CalculationResult`] envelope returned by the
//! API and the audit structures that record how each figure was derived.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{LoanCalculation, LoanInput, LoanSummary, ScheduleRow};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage of the
/// amortization (rate conversion, month count, installment, schedule).
///
/// # Example
///
/// ```
/// use amortization_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "monthly_rate".to_string(),
///     rule_name: "Monthly Rate Conversion".to_string(),
///     input: serde_json::json!({ "annual_rate_percent": "12" }),
///     output: serde_json::json!({ "monthly_rate": "0.01" }),
///     reasoning: "12% p.a. / 100 / 12 = 0.01 per month".to_string(),
/// };
/// assert_eq!(step.rule_id, "monthly_rate");
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
/// Warnings indicate input quirks that don't prevent calculation
/// but change how it is carried out, such as a truncated tenure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a loan calculation as served by the API.
///
/// Wraps the engine output with an identifier, a timestamp and the engine
/// version so a stored response can be traced back to the code that made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The input the calculation was performed on.
    pub input: LoanInput,
    /// Total number of monthly installments.
    pub months: u32,
    /// Rounded headline figures.
    pub summary: LoanSummary,
    /// Yearly amortization schedule.
    pub schedule: Vec<ScheduleRow>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Wraps an engine calculation, stamping it with a fresh id and the current time.
    pub fn from_calculation(calculation: LoanCalculation, duration_us: u64) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            input: calculation.input,
            months: calculation.months,
            summary: calculation.summary,
            schedule: calculation.schedule,
            audit_trace: AuditTrace {
                steps: calculation.audit_steps,
                warnings: calculation.warnings,
                duration_us,
            },
        }
    }
}

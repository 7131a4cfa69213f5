//! Tenure to installment-count conversion.
//!
//! Tenure is supplied in years and may be fractional. Installments are whole
//! months, so `months = floor(tenure_years * 12)`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning};

use super::monthly_rate::MONTHS_PER_YEAR;

/// The result of converting a tenure in years to a count of monthly installments.
#[derive(Debug, Clone)]
pub struct TenureResult {
    /// Total number of monthly installments.
    pub months: u32,
    /// Number of rows the yearly schedule will have (`ceil(months / 12)`).
    pub schedule_years: u32,
    /// Installments in the final schedule year (1..=12).
    pub final_year_months: u32,
    /// The audit step recording this conversion.
    pub audit_step: AuditStep,
    /// Warnings about truncation or a partial final year.
    pub warnings: Vec<AuditWarning>,
}

/// Converts a tenure in years to whole monthly installments.
///
/// A fractional month is dropped. When the month count is not a multiple of
/// twelve the final schedule year is shorter than the others.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] on `tenure_years` if the tenure is
/// shorter than one month or too long to count.
///
/// # Examples
///
/// ```
/// use amortization_engine::calculation::convert_tenure;
/// use rust_decimal_macros::dec;
///
/// let result = convert_tenure(dec!(2.5), 2).unwrap();
/// assert_eq!(result.months, 30);
/// assert_eq!(result.schedule_years, 3);
/// assert_eq!(result.final_year_months, 6);
/// ```
pub fn convert_tenure(tenure_years: Decimal, step_number: u32) -> EngineResult<TenureResult> {
    let exact_months = tenure_years * Decimal::from(MONTHS_PER_YEAR);
    let months = exact_months
        .floor()
        .to_u32()
        .ok_or_else(|| EngineError::InvalidInput {
            field: "tenure_years".to_string(),
            message: format!("tenure of {} years is too long", tenure_years.normalize()),
        })?;

    if months == 0 {
        return Err(EngineError::InvalidInput {
            field: "tenure_years".to_string(),
            message: format!(
                "tenure of {} years is shorter than one month",
                tenure_years.normalize()
            ),
        });
    }

    let schedule_years = months.div_ceil(MONTHS_PER_YEAR);
    let final_year_months = months - (schedule_years - 1) * MONTHS_PER_YEAR;

    let mut warnings = Vec::new();
    if !exact_months.fract().is_zero() {
        warnings.push(AuditWarning {
            code: "TENURE_TRUNCATED".to_string(),
            message: format!(
                "{} years is {} months; the fractional month is not scheduled",
                tenure_years.normalize(),
                exact_months.normalize()
            ),
            severity: "low".to_string(),
        });
    }
    if final_year_months < MONTHS_PER_YEAR {
        warnings.push(AuditWarning {
            code: "PARTIAL_FINAL_YEAR".to_string(),
            message: format!(
                "year {} of the schedule covers {} installments",
                schedule_years, final_year_months
            ),
            severity: "low".to_string(),
        });
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "tenure_months".to_string(),
        rule_name: "Tenure Conversion".to_string(),
        input: serde_json::json!({
            "tenure_years": tenure_years.normalize().to_string()
        }),
        output: serde_json::json!({
            "months": months,
            "schedule_years": schedule_years,
            "final_year_months": final_year_months
        }),
        reasoning: format!(
            "floor({} years x {}) = {} monthly installments over {} schedule years",
            tenure_years.normalize(),
            MONTHS_PER_YEAR,
            months,
            schedule_years
        ),
    };

    Ok(TenureResult {
        months,
        schedule_years,
        final_year_months,
        audit_step,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_whole_years_convert_exactly() {
        let result = convert_tenure(dec!(25), 1).unwrap();
        assert_eq!(result.months, 300);
        assert_eq!(result.schedule_years, 25);
        assert_eq!(result.final_year_months, 12);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_half_year_adds_partial_final_year() {
        let result = convert_tenure(dec!(2.5), 1).unwrap();
        assert_eq!(result.months, 30);
        assert_eq!(result.schedule_years, 3);
        assert_eq!(result.final_year_months, 6);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, "PARTIAL_FINAL_YEAR");
    }

    #[test]
    fn test_fractional_month_is_truncated() {
        // 1.55 years = 18.6 months -> 18
        let result = convert_tenure(dec!(1.55), 1).unwrap();
        assert_eq!(result.months, 18);
        assert_eq!(result.schedule_years, 2);
        assert_eq!(result.final_year_months, 6);

        let codes: Vec<&str> = result.warnings.iter().map(|w| w.code.as_str()).collect();
        assert_eq!(codes, vec!["TENURE_TRUNCATED", "PARTIAL_FINAL_YEAR"]);
    }

    #[test]
    fn test_truncation_to_whole_years_has_no_partial_year() {
        // 1.01 years = 12.12 months -> 12
        let result = convert_tenure(dec!(1.01), 1).unwrap();
        assert_eq!(result.months, 12);
        assert_eq!(result.schedule_years, 1);
        assert_eq!(result.final_year_months, 12);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, "TENURE_TRUNCATED");
    }

    #[test]
    fn test_tenure_shorter_than_a_month_is_rejected() {
        let result = convert_tenure(dec!(0.05), 1);
        match result {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "tenure_years");
                assert!(message.contains("shorter than one month"));
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_absurd_tenure_is_rejected() {
        let result = convert_tenure(dec!(1000000000), 1);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_audit_step_records_month_count() {
        let result = convert_tenure(dec!(25), 2).unwrap();
        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "tenure_months");
        assert_eq!(result.audit_step.output["months"], 300);
        assert_eq!(result.audit_step.output["schedule_years"], 25);
    }
}

//! Annual-to-monthly interest rate conversion.
//!
//! Interest is charged monthly on the diminishing balance, so the nominal
//! annual percentage is converted to a per-month decimal rate before any
//! other step runs.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Number of installments in a loan year.
pub const MONTHS_PER_YEAR: u32 = 12;

const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// The result of converting an annual percentage to a monthly rate.
#[derive(Debug, Clone)]
pub struct MonthlyRateResult {
    /// The monthly rate as a decimal fraction (0.01 = 1% per month).
    pub monthly_rate: Decimal,
    /// The audit step recording this conversion.
    pub audit_step: AuditStep,
}

/// Converts a nominal annual rate in percent to a monthly decimal rate.
///
/// `monthly_rate = (annual_rate_percent / 100) / 12`
///
/// # Examples
///
/// ```
/// use amortization_engine::calculation::convert_monthly_rate;
/// use rust_decimal_macros::dec;
///
/// let result = convert_monthly_rate(dec!(12), 1);
/// assert_eq!(result.monthly_rate, dec!(0.01));
/// ```
pub fn convert_monthly_rate(annual_rate_percent: Decimal, step_number: u32) -> MonthlyRateResult {
    let monthly_rate = annual_rate_percent / PERCENT / Decimal::from(MONTHS_PER_YEAR);

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_rate".to_string(),
        rule_name: "Monthly Rate Conversion".to_string(),
        input: serde_json::json!({
            "annual_rate_percent": annual_rate_percent.normalize().to_string()
        }),
        output: serde_json::json!({
            "monthly_rate": monthly_rate.normalize().to_string()
        }),
        reasoning: format!(
            "{}% p.a. / 100 / {} = {} per month",
            annual_rate_percent.normalize(),
            MONTHS_PER_YEAR,
            monthly_rate.normalize()
        ),
    };

    MonthlyRateResult {
        monthly_rate,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_twelve_percent_is_one_percent_monthly() {
        let result = convert_monthly_rate(dec!(12), 1);
        assert_eq!(result.monthly_rate, dec!(0.01));
    }

    #[test]
    fn test_six_percent_is_half_percent_monthly() {
        let result = convert_monthly_rate(dec!(6), 1);
        assert_eq!(result.monthly_rate, dec!(0.005));
    }

    #[test]
    fn test_non_terminating_rate_keeps_precision() {
        // 8.5 / 1200 = 0.0070833...
        let result = convert_monthly_rate(dec!(8.5), 1);
        assert!(result.monthly_rate > dec!(0.00708333333));
        assert!(result.monthly_rate < dec!(0.00708333334));
        assert!(result.monthly_rate.scale() > 20);
    }

    #[test]
    fn test_audit_step_records_conversion() {
        let result = convert_monthly_rate(dec!(12), 3);
        let step = &result.audit_step;

        assert_eq!(step.step_number, 3);
        assert_eq!(step.rule_id, "monthly_rate");
        assert_eq!(step.input["annual_rate_percent"], "12");
        assert_eq!(step.output["monthly_rate"], "0.01");
        assert_eq!(step.reasoning, "12% p.a. / 100 / 12 = 0.01 per month");
    }
}

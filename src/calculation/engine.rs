//! The amortization engine entry point.
//!
//! [`compute_loan`] validates a [`LoanInput`], runs the rate, tenure,
//! installment and schedule steps in order, and rounds the headline figures.
//! It is a pure function: the same input always yields the same output.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{LoanCalculation, LoanInput, LoanSummary};

use super::installment::calculate_installment;
use super::monthly_rate::convert_monthly_rate;
use super::rounding::round_currency;
use super::schedule::build_yearly_schedule;
use super::tenure::convert_tenure;

/// Computes the EMI summary and yearly amortization schedule for a loan.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the principal, tenure or rate is
/// zero or negative, when the tenure is shorter than one month, or when the
/// figures exceed decimal precision. No partial result is produced.
///
/// # Examples
///
/// ```
/// use amortization_engine::calculation::compute_loan;
/// use amortization_engine::models::LoanInput;
/// use rust_decimal_macros::dec;
///
/// let input = LoanInput::new(dec!(2500000), dec!(25), dec!(8.5));
/// let calculation = compute_loan(&input).unwrap();
///
/// assert_eq!(calculation.months, 300);
/// assert_eq!(calculation.summary.monthly_payment, dec!(20131));
/// assert_eq!(calculation.schedule.len(), 25);
/// ```
pub fn compute_loan(input: &LoanInput) -> EngineResult<LoanCalculation> {
    ensure_positive("principal", input.principal)?;
    ensure_positive("tenure_years", input.tenure_years)?;
    ensure_positive("annual_rate_percent", input.annual_rate_percent)?;

    let rate = convert_monthly_rate(input.annual_rate_percent, 1);
    let tenure = convert_tenure(input.tenure_years, 2)?;
    let installment =
        calculate_installment(input.principal, rate.monthly_rate, tenure.months, 3)?;
    let schedule = build_yearly_schedule(
        input.principal,
        rate.monthly_rate,
        installment.monthly_payment,
        tenure.months,
        4,
    )?;

    let total_payment = round_currency(installment.total_payment);
    let summary = LoanSummary {
        monthly_payment: round_currency(installment.monthly_payment),
        total_interest: total_payment - round_currency(input.principal),
        total_payment,
    };

    Ok(LoanCalculation {
        input: *input,
        months: tenure.months,
        summary,
        schedule: schedule.rows,
        audit_steps: vec![
            rate.audit_step,
            tenure.audit_step,
            installment.audit_step,
            schedule.audit_step,
        ],
        warnings: tenure.warnings,
    })
}

fn ensure_positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must be greater than zero, got {}", value.normalize()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn compute(principal: Decimal, tenure_years: Decimal, rate: Decimal) -> LoanCalculation {
        compute_loan(&LoanInput::new(principal, tenure_years, rate)).unwrap()
    }

    fn assert_invalid(input: LoanInput, expected_field: &str) {
        match compute_loan(&input) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidInput on {}, got {:?}", expected_field, other),
        }
    }

    #[test]
    fn test_home_loan_reference_scenario() {
        let calculation = compute(dec!(2500000), dec!(25), dec!(8.5));

        assert_eq!(calculation.months, 300);
        assert_eq!(calculation.summary.monthly_payment, dec!(20131));
        assert_eq!(calculation.summary.total_payment, dec!(6039203));
        assert_eq!(calculation.summary.total_interest, dec!(3539203));
        assert_eq!(calculation.schedule.len(), 25);
        assert_eq!(calculation.schedule[0].opening_balance, dec!(2500000));
        assert!(calculation.warnings.is_empty());
    }

    #[test]
    fn test_one_year_scenario() {
        let calculation = compute(dec!(100000), dec!(1), dec!(10));

        assert_eq!(calculation.months, 12);
        assert_eq!(calculation.summary.monthly_payment, dec!(8792));
        assert_eq!(calculation.summary.total_payment, dec!(105499));
        assert_eq!(calculation.summary.total_interest, dec!(5499));
        assert_eq!(calculation.schedule.len(), 1);
        assert_eq!(calculation.final_balance(), Decimal::ZERO);
    }

    #[test]
    fn test_total_interest_is_total_payment_less_principal() {
        let calculation = compute(dec!(750000), dec!(15), dec!(9.35));
        assert_eq!(
            calculation.summary.total_interest,
            calculation.summary.total_payment - dec!(750000)
        );
    }

    #[test]
    fn test_principal_repaid_matches_principal_within_rounding() {
        let calculation = compute(dec!(2500000), dec!(25), dec!(8.5));
        let drift = (calculation.total_principal_repaid() - dec!(2500000)).abs();
        assert!(drift <= Decimal::from(calculation.schedule.len() as u32));
    }

    #[test]
    fn test_fractional_tenure_gets_short_final_row_and_warnings() {
        let calculation = compute(dec!(1000000), dec!(2.5), dec!(9));

        assert_eq!(calculation.months, 30);
        assert_eq!(calculation.schedule.len(), 3);
        assert_eq!(calculation.schedule[2].months, 6);
        assert_eq!(calculation.final_balance(), Decimal::ZERO);
        assert_eq!(calculation.warnings.len(), 1);
        assert_eq!(calculation.warnings[0].code, "PARTIAL_FINAL_YEAR");
    }

    #[test]
    fn test_audit_steps_are_numbered_in_order() {
        let calculation = compute(dec!(100000), dec!(1), dec!(10));
        let ids: Vec<(u32, &str)> = calculation
            .audit_steps
            .iter()
            .map(|s| (s.step_number, s.rule_id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec![
                (1, "monthly_rate"),
                (2, "tenure_months"),
                (3, "monthly_payment"),
                (4, "yearly_schedule"),
            ]
        );
    }

    #[test]
    fn test_zero_principal_is_rejected() {
        assert_invalid(LoanInput::new(dec!(0), dec!(25), dec!(8.5)), "principal");
    }

    #[test]
    fn test_negative_principal_is_rejected() {
        assert_invalid(LoanInput::new(dec!(-100000), dec!(25), dec!(8.5)), "principal");
    }

    #[test]
    fn test_zero_tenure_is_rejected() {
        assert_invalid(LoanInput::new(dec!(100000), dec!(0), dec!(8.5)), "tenure_years");
    }

    #[test]
    fn test_negative_tenure_is_rejected() {
        assert_invalid(LoanInput::new(dec!(100000), dec!(-5), dec!(8.5)), "tenure_years");
    }

    #[test]
    fn test_zero_rate_is_rejected() {
        assert_invalid(
            LoanInput::new(dec!(100000), dec!(25), dec!(0)),
            "annual_rate_percent",
        );
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        assert_invalid(
            LoanInput::new(dec!(100000), dec!(25), dec!(-1)),
            "annual_rate_percent",
        );
    }

    #[test]
    fn test_summary_reconciles_for_fractional_principal() {
        let calculation = compute(dec!(100000.6), dec!(1), dec!(10));
        let summary = calculation.summary;

        assert_eq!(summary.total_payment - summary.total_interest, dec!(100001));
    }

    #[test]
    fn test_oversized_short_loan_is_an_error_not_a_panic() {
        // A single installment fits in a Decimal; its annualized value does not.
        assert_invalid(
            LoanInput::new(dec!(10000000000000000000000000000), dec!(0.1), dec!(10)),
            "principal",
        );
    }

    #[test]
    fn test_sub_month_tenure_is_rejected() {
        assert_invalid(LoanInput::new(dec!(100000), dec!(0.01), dec!(8.5)), "tenure_years");
    }

    #[test]
    fn test_error_message_names_offending_value() {
        let err = compute_loan(&LoanInput::new(dec!(-250), dec!(1), dec!(5))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input 'principal': must be greater than zero, got -250"
        );
    }

    #[test]
    fn test_same_input_gives_same_output() {
        let input = LoanInput::new(dec!(1234567), dec!(17), dec!(11.25));
        assert_eq!(compute_loan(&input).unwrap(), compute_loan(&input).unwrap());
    }
}

//! Yearly amortization schedule.
//!
//! The schedule is built by simulating every monthly installment on the
//! diminishing balance and folding the months into loan years. Balances and
//! yearly sums stay at full precision; each row is rounded only when it is
//! emitted.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AuditStep, ScheduleRow};

use super::installment::overflow;
use super::monthly_rate::MONTHS_PER_YEAR;
use super::rounding::round_currency;

/// The result of building the yearly schedule.
#[derive(Debug, Clone)]
pub struct ScheduleResult {
    /// One row per loan year, in chronological order.
    pub rows: Vec<ScheduleRow>,
    /// Balance left after the final installment, unrounded.
    pub residual_balance: Decimal,
    /// The audit step recording this simulation.
    pub audit_step: AuditStep,
}

/// Running totals for the loan year being simulated.
#[derive(Debug, Clone, Copy)]
struct YearAccumulator {
    opening_balance: Decimal,
    interest: Decimal,
    principal: Decimal,
    months: u32,
}

impl YearAccumulator {
    fn open(balance: Decimal) -> Self {
        Self {
            opening_balance: balance,
            interest: Decimal::ZERO,
            principal: Decimal::ZERO,
            months: 0,
        }
    }

    fn close(self, year: u32, closing_balance: Decimal, annual_payment: Decimal) -> ScheduleRow {
        ScheduleRow {
            year,
            opening_balance: round_currency(self.opening_balance),
            annual_payment: round_currency(annual_payment),
            interest_paid: round_currency(self.interest),
            principal_paid: round_currency(self.principal),
            closing_balance: round_currency(closing_balance.max(Decimal::ZERO)),
            months: self.months,
        }
    }
}

/// Builds the yearly amortization schedule by monthly simulation.
///
/// For each month: `interest = balance x r`, `principal = payment - interest`,
/// `balance -= principal`. The schedule has `ceil(months / 12)` rows; when
/// `months` is not a multiple of twelve the final row covers only the
/// remaining installments. The annualized payment is always `payment x 12`.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidInput`] if the annualized
/// payment exceeds decimal precision, which only a loan shorter than a year
/// can reach.
///
/// # Examples
///
/// ```
/// use amortization_engine::calculation::{build_yearly_schedule, calculate_installment};
/// use rust_decimal_macros::dec;
///
/// let installment = calculate_installment(dec!(100000), dec!(0.01), 24, 1).unwrap();
/// let schedule =
///     build_yearly_schedule(dec!(100000), dec!(0.01), installment.monthly_payment, 24, 2)
///         .unwrap();
///
/// assert_eq!(schedule.rows.len(), 2);
/// assert_eq!(schedule.rows[0].opening_balance, dec!(100000));
/// assert_eq!(schedule.rows[1].closing_balance, dec!(0));
/// ```
pub fn build_yearly_schedule(
    principal: Decimal,
    monthly_rate: Decimal,
    monthly_payment: Decimal,
    months: u32,
    step_number: u32,
) -> EngineResult<ScheduleResult> {
    let annual_payment = monthly_payment
        .checked_mul(Decimal::from(MONTHS_PER_YEAR))
        .ok_or_else(|| overflow("principal", "annualized payment overflows"))?;
    let years = months.div_ceil(MONTHS_PER_YEAR);

    let mut rows = Vec::with_capacity(years as usize);
    let mut balance = principal;

    for year in 1..=years {
        let months_elapsed = (year - 1) * MONTHS_PER_YEAR;
        let months_this_year = (months - months_elapsed).min(MONTHS_PER_YEAR);

        let mut acc = YearAccumulator::open(balance);
        for _ in 0..months_this_year {
            let interest = balance * monthly_rate;
            let principal_part = monthly_payment - interest;
            balance -= principal_part;

            acc.interest += interest;
            acc.principal += principal_part;
            acc.months += 1;
        }

        rows.push(acc.close(year, balance, annual_payment));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "yearly_schedule".to_string(),
        rule_name: "Yearly Amortization Schedule".to_string(),
        input: serde_json::json!({
            "principal": principal.normalize().to_string(),
            "months": months,
            "monthly_payment": monthly_payment.round_dp(6).normalize().to_string()
        }),
        output: serde_json::json!({
            "rows": rows.len(),
            "residual_balance": balance.round_dp(6).normalize().to_string()
        }),
        reasoning: format!(
            "Simulated {} monthly installments on the diminishing balance into {} yearly rows",
            months,
            rows.len()
        ),
    };

    Ok(ScheduleResult {
        rows,
        residual_balance: balance,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_installment;
    use rust_decimal_macros::dec;

    fn schedule_for(principal: Decimal, annual_rate_percent: Decimal, months: u32) -> ScheduleResult {
        let monthly_rate = annual_rate_percent / dec!(1200);
        let installment = calculate_installment(principal, monthly_rate, months, 1).unwrap();
        build_yearly_schedule(principal, monthly_rate, installment.monthly_payment, months, 2)
            .unwrap()
    }

    #[test]
    fn test_one_year_loan_has_single_row() {
        let result = schedule_for(dec!(100000), dec!(10), 12);

        assert_eq!(result.rows.len(), 1);
        let row = &result.rows[0];
        assert_eq!(row.year, 1);
        assert_eq!(row.opening_balance, dec!(100000));
        assert_eq!(row.annual_payment, dec!(105499));
        assert_eq!(row.interest_paid, dec!(5499));
        assert_eq!(row.principal_paid, dec!(100000));
        assert_eq!(row.closing_balance, dec!(0));
        assert_eq!(row.months, 12);
    }

    #[test]
    fn test_home_loan_first_and_last_rows() {
        let result = schedule_for(dec!(2500000), dec!(8.5), 300);

        assert_eq!(result.rows.len(), 25);

        let first = &result.rows[0];
        assert_eq!(first.opening_balance, dec!(2500000));
        assert_eq!(first.annual_payment, dec!(241568));
        assert_eq!(first.interest_paid, dec!(211340));
        assert_eq!(first.principal_paid, dec!(30228));
        assert_eq!(first.closing_balance, dec!(2469772));

        let last = &result.rows[24];
        assert_eq!(last.year, 25);
        assert_eq!(last.opening_balance, dec!(230804));
        assert_eq!(last.interest_paid, dec!(10764));
        assert_eq!(last.principal_paid, dec!(230804));
        assert_eq!(last.closing_balance, dec!(0));
    }

    #[test]
    fn test_rows_chain_closing_to_opening() {
        let result = schedule_for(dec!(2500000), dec!(8.5), 300);
        for pair in result.rows.windows(2) {
            assert_eq!(pair[0].closing_balance, pair[1].opening_balance);
        }
    }

    #[test]
    fn test_residual_balance_is_dust() {
        let result = schedule_for(dec!(2500000), dec!(8.5), 300);
        assert!(result.residual_balance.abs() < dec!(0.000001));
    }

    #[test]
    fn test_partial_final_year_iterates_remaining_months() {
        // 30 months -> 12 + 12 + 6
        let result = schedule_for(dec!(1000000), dec!(9), 30);

        let months: Vec<u32> = result.rows.iter().map(|r| r.months).collect();
        assert_eq!(months, vec![12, 12, 6]);

        let last = result.rows.last().unwrap();
        assert_eq!(last.opening_balance, dec!(218322));
        assert_eq!(last.principal_paid, dec!(218322));
        assert_eq!(last.closing_balance, dec!(0));
        // The annualized payment is reported even for the short year.
        assert_eq!(last.annual_payment, dec!(448178));
    }

    #[test]
    fn test_interest_falls_and_principal_rises_each_year() {
        let result = schedule_for(dec!(2500000), dec!(8.5), 300);
        for pair in result.rows.windows(2) {
            assert!(pair[1].interest_paid <= pair[0].interest_paid);
            assert!(pair[1].principal_paid >= pair[0].principal_paid);
        }
    }

    #[test]
    fn test_annualized_payment_overflow_is_an_error() {
        // One installment fits, twelve do not.
        let payment = Decimal::MAX / dec!(6);
        let result = build_yearly_schedule(Decimal::MAX / dec!(7), dec!(0.01), payment, 1, 4);

        assert!(matches!(
            result,
            Err(crate::error::EngineError::InvalidInput { ref field, .. }) if field == "principal"
        ));
    }

    #[test]
    fn test_audit_step_records_row_count() {
        let result = schedule_for(dec!(100000), dec!(10), 24);
        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "yearly_schedule");
        assert_eq!(result.audit_step.output["rows"], 2);
    }
}

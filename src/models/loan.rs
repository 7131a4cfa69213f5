//! Loan model types.
//!
//! This module defines the immutable [`LoanInput`] supplied by a caller and
//! the derived [`LoanSummary`] and [`ScheduleRow`] values the engine produces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditStep, AuditWarning};

/// The three scalar inputs of a fixed-rate loan calculation.
///
/// A `LoanInput` is built fresh by the caller for every recomputation; the
/// engine never holds on to it between calls.
///
/// # Example
///
/// ```
/// use amortization_engine::models::LoanInput;
/// use rust_decimal_macros::dec;
///
/// let input = LoanInput::new(dec!(2500000), dec!(25), dec!(8.5));
/// assert_eq!(input.tenure_years, dec!(25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    /// The amount borrowed, in whole or fractional currency units.
    pub principal: Decimal,
    /// The loan duration in years. Fractional values are truncated to whole months.
    pub tenure_years: Decimal,
    /// The nominal annual interest rate as a percentage (8.5 means 8.5%).
    pub annual_rate_percent: Decimal,
}

impl LoanInput {
    /// Creates a new loan input. Positivity is checked by the engine, not here.
    pub fn new(principal: Decimal, tenure_years: Decimal, annual_rate_percent: Decimal) -> Self {
        Self {
            principal,
            tenure_years,
            annual_rate_percent,
        }
    }
}

/// Headline figures of a calculation, rounded to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    /// The equal monthly installment (EMI).
    pub monthly_payment: Decimal,
    /// Total interest over the life of the loan.
    ///
    /// Always `total_payment - round(principal)`, so the summary reconciles to
    /// the unit even when the principal has a fractional part.
    pub total_interest: Decimal,
    /// Total of all installments (principal plus interest).
    pub total_payment: Decimal,
}

/// One year of the amortization schedule.
///
/// All monetary fields are rounded to whole currency units. Rows are
/// produced in chronological order and the closing balance of one row is
/// the opening balance of the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// The 1-based loan year.
    pub year: u32,
    /// Outstanding balance at the start of the year.
    pub opening_balance: Decimal,
    /// The annualized installment (`monthly payment * 12`).
    pub annual_payment: Decimal,
    /// Interest charged during the year.
    pub interest_paid: Decimal,
    /// Principal repaid during the year.
    pub principal_paid: Decimal,
    /// Outstanding balance at the end of the year, never negative.
    pub closing_balance: Decimal,
    /// Number of installments simulated in this year (12 except for a partial final year).
    pub months: u32,
}

/// The complete output of the amortization engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanCalculation {
    /// The input the calculation was performed on.
    pub input: LoanInput,
    /// Total number of monthly installments.
    pub months: u32,
    /// Rounded headline figures.
    pub summary: LoanSummary,
    /// Yearly breakdown, one row per loan year.
    pub schedule: Vec<ScheduleRow>,
    /// The steps the engine took, in order.
    pub audit_steps: Vec<AuditStep>,
    /// Non-fatal observations about the input.
    pub warnings: Vec<AuditWarning>,
}

impl LoanCalculation {
    /// Sum of principal repaid across all schedule rows.
    pub fn total_principal_repaid(&self) -> Decimal {
        self.schedule.iter().map(|row| row.principal_paid).sum()
    }

    /// Closing balance of the final schedule row.
    pub fn final_balance(&self) -> Decimal {
        self.schedule
            .last()
            .map(|row| row.closing_balance)
            .unwrap_or(self.input.principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_row(year: u32, opening: Decimal, principal: Decimal) -> ScheduleRow {
        ScheduleRow {
            year,
            opening_balance: opening,
            annual_payment: dec!(105499),
            interest_paid: dec!(5499),
            principal_paid: principal,
            closing_balance: opening - principal,
            months: 12,
        }
    }

    fn create_calculation(schedule: Vec<ScheduleRow>) -> LoanCalculation {
        LoanCalculation {
            input: LoanInput::new(dec!(100000), dec!(2), dec!(10)),
            months: 24,
            summary: LoanSummary {
                monthly_payment: dec!(4614),
                total_interest: dec!(10746),
                total_payment: dec!(110746),
            },
            schedule,
            audit_steps: vec![],
            warnings: vec![],
        }
    }

    #[test]
    fn test_loan_input_new_keeps_fields() {
        let input = LoanInput::new(dec!(100000), dec!(1.5), dec!(9.25));
        assert_eq!(input.principal, dec!(100000));
        assert_eq!(input.tenure_years, dec!(1.5));
        assert_eq!(input.annual_rate_percent, dec!(9.25));
    }

    #[test]
    fn test_loan_input_deserializes_from_numbers_and_strings() {
        let json = r#"{"principal": 2500000, "tenure_years": "25", "annual_rate_percent": 8.5}"#;
        let input: LoanInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, LoanInput::new(dec!(2500000), dec!(25), dec!(8.5)));
    }

    #[test]
    fn test_schedule_row_serializes_money_as_strings() {
        let row = create_row(1, dec!(100000), dec!(47754));
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["year"], 1);
        assert_eq!(json["opening_balance"], "100000");
        assert_eq!(json["closing_balance"], "52246");
        assert_eq!(json["months"], 12);
    }

    #[test]
    fn test_total_principal_repaid_sums_rows() {
        let calculation = create_calculation(vec![
            create_row(1, dec!(100000), dec!(47754)),
            create_row(2, dec!(52246), dec!(52246)),
        ]);
        assert_eq!(calculation.total_principal_repaid(), dec!(100000));
    }

    #[test]
    fn test_final_balance_uses_last_row() {
        let calculation = create_calculation(vec![
            create_row(1, dec!(100000), dec!(47754)),
            create_row(2, dec!(52246), dec!(52246)),
        ]);
        assert_eq!(calculation.final_balance(), Decimal::ZERO);
    }

    #[test]
    fn test_final_balance_without_rows_is_principal() {
        let calculation = create_calculation(vec![]);
        assert_eq!(calculation.final_balance(), dec!(100000));
    }
}

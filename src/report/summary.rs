//! Report content shared by every renderer.
//!
//! The summary block and schedule captions are defined once here so the
//! terminal table and the spreadsheet export label figures identically.

use rust_decimal::Decimal;

use crate::config::{CurrencyConfig, DigitGrouping};
use crate::models::{LoanInput, LoanSummary, ScheduleRow};

use super::currency::{format_currency, group_digits};

/// Caption of the summary block's label column.
pub const SUMMARY_LABEL_HEADER: &str = "LOAN SUMMARY PARAMETERS";

/// Caption of the summary block's value column.
pub const SUMMARY_VALUE_HEADER: &str = "VALUE";

/// Column captions of the yearly schedule.
pub const SCHEDULE_COLUMNS: [&str; 6] = [
    "Year",
    "Opening Balance",
    "EMI*12",
    "Interest paid yearly",
    "Principal paid yearly",
    "Closing Balance",
];

/// What a summary value measures, which decides how it is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A currency amount.
    Money,
    /// A count of years.
    Years,
    /// A percentage.
    Percent,
}

/// One labelled figure in the report summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// Caption shown next to the value.
    pub label: &'static str,
    /// The figure itself.
    pub value: Decimal,
    /// How the figure should be formatted.
    pub kind: ValueKind,
}

impl SummaryLine {
    /// Formats the value for on-screen display.
    pub fn display(&self, currency: &CurrencyConfig) -> String {
        match self.kind {
            ValueKind::Money => format_currency(self.value, currency),
            ValueKind::Years | ValueKind::Percent => self.value.normalize().to_string(),
        }
    }
}

/// Returns the six summary parameters of the loan report, in report order.
///
/// # Examples
///
/// ```
/// use amortization_engine::calculation::compute_loan;
/// use amortization_engine::models::LoanInput;
/// use amortization_engine::report::summary_lines;
/// use rust_decimal_macros::dec;
///
/// let input = LoanInput::new(dec!(100000), dec!(1), dec!(10));
/// let calculation = compute_loan(&input).unwrap();
/// let lines = summary_lines(&input, &calculation.summary);
///
/// assert_eq!(lines[3].label, "Monthly EMI");
/// assert_eq!(lines[3].value, dec!(8792));
/// ```
pub fn summary_lines(input: &LoanInput, summary: &LoanSummary) -> Vec<SummaryLine> {
    vec![
        SummaryLine {
            label: "Loan Amount",
            value: input.principal,
            kind: ValueKind::Money,
        },
        SummaryLine {
            label: "Tenure (Years)",
            value: input.tenure_years,
            kind: ValueKind::Years,
        },
        SummaryLine {
            label: "Interest Rate (%)",
            value: input.annual_rate_percent,
            kind: ValueKind::Percent,
        },
        SummaryLine {
            label: "Monthly EMI",
            value: summary.monthly_payment,
            kind: ValueKind::Money,
        },
        SummaryLine {
            label: "Total Interest Paid",
            value: summary.total_interest,
            kind: ValueKind::Money,
        },
        SummaryLine {
            label: "Total Payable Amount",
            value: summary.total_payment,
            kind: ValueKind::Money,
        },
    ]
}

/// Returns a schedule row as six cells, monetary cells passed through `money`.
pub(crate) fn schedule_cells(row: &ScheduleRow, money: impl Fn(Decimal) -> String) -> [String; 6] {
    [
        row.year.to_string(),
        money(row.opening_balance),
        money(row.annual_payment),
        money(row.interest_paid),
        money(row.principal_paid),
        money(row.closing_balance),
    ]
}

/// Formats a monetary cell with grouping but without a symbol.
pub(crate) fn grouped_money(grouping: DigitGrouping) -> impl Fn(Decimal) -> String {
    move |amount| group_digits(amount, grouping)
}

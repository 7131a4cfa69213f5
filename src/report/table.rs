//! Terminal rendering of a loan report.

use tabled::{Table, builder::Builder};

use crate::config::ReportConfig;
use crate::models::LoanCalculation;

use super::currency::format_currency;
use super::summary::{
    SCHEDULE_COLUMNS, SUMMARY_LABEL_HEADER, SUMMARY_VALUE_HEADER, schedule_cells, summary_lines,
};

/// Renders the full report: headline EMI, summary, totals, schedule and disclaimer.
///
/// # Examples
///
/// ```
/// use amortization_engine::calculation::compute_loan;
/// use amortization_engine::config::ConfigLoader;
/// use amortization_engine::models::LoanInput;
/// use amortization_engine::report::render_table;
/// use rust_decimal_macros::dec;
///
/// let config = ConfigLoader::builtin()?;
/// let calculation = compute_loan(&LoanInput::new(dec!(100000), dec!(1), dec!(10)))?;
/// let text = render_table(&calculation, config.report());
///
/// assert!(text.contains("Your Monthly Home Loan EMI: ₹ 8,792"));
/// # Ok::<(), amortization_engine::error::EngineError>(())
/// ```
pub fn render_table(calculation: &LoanCalculation, report: &ReportConfig) -> String {
    let currency = &report.currency;
    let summary = &calculation.summary;

    let mut builder = Builder::default();
    builder.push_record([SUMMARY_LABEL_HEADER, SUMMARY_VALUE_HEADER]);
    for line in summary_lines(&calculation.input, summary) {
        builder.push_record([line.label.to_string(), line.display(currency)]);
    }

    let mut cards = Builder::default();
    cards.push_record(["Principal Amount", "Total Interest", "Total Payable"]);
    cards.push_record([
        format_currency(calculation.input.principal, currency),
        format_currency(summary.total_interest, currency),
        format_currency(summary.total_payment, currency),
    ]);

    let mut schedule = Builder::default();
    schedule.push_record(SCHEDULE_COLUMNS);
    let money = |amount| format_currency(amount, currency);
    for row in &calculation.schedule {
        schedule.push_record(schedule_cells(row, &money));
    }

    let mut out = format!(
        "{}\n{}\n\nYour Monthly Home Loan EMI: {}\n\n{}\n\n{}\n\nYearly Amortization Schedule\n{}\n",
        report.title,
        report.subtitle,
        format_currency(summary.monthly_payment, currency),
        Table::from(builder),
        Table::from(cards),
        Table::from(schedule),
    );

    if !calculation.warnings.is_empty() {
        out.push_str("\nWarnings:\n");
        for warning in &calculation.warnings {
            out.push_str(&format!("  - {}\n", warning.message));
        }
    }

    out.push('\n');
    out.push_str(&report.disclaimer);
    out
}

//! Spreadsheet export of a loan report as CSV.
//!
//! The export is a fixed six-column grid laid out like the on-screen report:
//!
//! ```text
//! row 0        sheet name
//! row 1        LOAN SUMMARY PARAMETERS | VALUE
//! rows 2..=7   summary parameters
//! rows 8..=9   blank
//! row 10       schedule header
//! rows 11..    one row per loan year
//! (blank row, then the disclaimer)
//! ```

use rust_decimal::Decimal;

use crate::config::{ExportConfig, NumberStyle, ReportConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::LoanCalculation;

use super::summary::{
    SCHEDULE_COLUMNS, SUMMARY_LABEL_HEADER, SUMMARY_VALUE_HEADER, ValueKind, grouped_money,
    schedule_cells, summary_lines,
};

const GRID_WIDTH: usize = SCHEDULE_COLUMNS.len();

/// Grid row holding the schedule header.
pub const SCHEDULE_HEADER_ROW: usize = 10;

/// Writes the summary, schedule and disclaimer of a calculation as CSV bytes.
///
/// # Errors
///
/// Returns [`EngineError::ExportError`] if the CSV writer fails.
///
/// # Examples
///
/// ```
/// use amortization_engine::calculation::compute_loan;
/// use amortization_engine::config::ConfigLoader;
/// use amortization_engine::models::LoanInput;
/// use amortization_engine::report::export_csv;
/// use rust_decimal_macros::dec;
///
/// let config = ConfigLoader::builtin()?;
/// let calculation = compute_loan(&LoanInput::new(dec!(100000), dec!(1), dec!(10)))?;
/// let bytes = export_csv(&calculation, config.report())?;
///
/// let text = String::from_utf8(bytes).unwrap();
/// assert!(text.contains("Monthly EMI,8792"));
/// # Ok::<(), amortization_engine::error::EngineError>(())
/// ```
pub fn export_csv(calculation: &LoanCalculation, report: &ReportConfig) -> EngineResult<Vec<u8>> {
    let grouping = report.currency.grouping;
    let money = |amount: Decimal| match report.export.number_style {
        NumberStyle::Plain => amount.normalize().to_string(),
        NumberStyle::Grouped => grouped_money(grouping)(amount),
    };

    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(padded([report.export.sheet_name.as_str()]))?;
    wtr.write_record(padded([SUMMARY_LABEL_HEADER, SUMMARY_VALUE_HEADER]))?;
    let lines = summary_lines(&calculation.input, &calculation.summary);
    let written = 2 + lines.len();
    for line in lines {
        let value = match line.kind {
            ValueKind::Money => money(line.value),
            ValueKind::Years | ValueKind::Percent => line.value.normalize().to_string(),
        };
        wtr.write_record(padded([line.label, value.as_str()]))?;
    }

    for _ in written..SCHEDULE_HEADER_ROW {
        wtr.write_record(padded::<0>([]))?;
    }

    wtr.write_record(SCHEDULE_COLUMNS)?;
    for row in &calculation.schedule {
        wtr.write_record(schedule_cells(row, &money))?;
    }

    wtr.write_record(padded::<0>([]))?;
    wtr.write_record(padded([report.disclaimer.as_str()]))?;

    wtr.into_inner().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}

/// Returns the download file name for an export, e.g. `Home_Loan_Report_2500000.csv`.
pub fn export_file_name(principal: Decimal, export: &ExportConfig) -> String {
    format!("{}_{}.csv", export.file_prefix, principal.normalize())
}

/// Pads a record with empty cells up to the grid width.
fn padded<const N: usize>(cells: [&str; N]) -> Vec<&str> {
    let mut record = Vec::with_capacity(GRID_WIDTH);
    record.extend_from_slice(&cells);
    record.resize(GRID_WIDTH.max(N), "");
    record
}

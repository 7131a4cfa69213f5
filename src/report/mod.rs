//! Presentation of a computed loan: currency formatting, the terminal
//! report and the spreadsheet export.

mod csv_export;
mod currency;
mod summary;
mod table;

pub use csv_export::{SCHEDULE_HEADER_ROW, export_csv, export_file_name};
pub use currency::{format_currency, group_digits};
pub use summary::{
    SCHEDULE_COLUMNS, SUMMARY_LABEL_HEADER, SUMMARY_VALUE_HEADER, SummaryLine, ValueKind,
    summary_lines,
};
pub use table::render_table;

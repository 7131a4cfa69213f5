//! Configuration types for the loan calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Accepted range, default and input step for one numeric field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLimits {
    /// The smallest accepted value (inclusive).
    pub min: Decimal,
    /// The largest accepted value (inclusive), if bounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Decimal>,
    /// The value a form starts with.
    pub default: Decimal,
    /// The increment a form widget uses, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<Decimal>,
}

impl FieldLimits {
    /// Returns true if `value` lies within `[min, max]`.
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && self.max.is_none_or(|max| value <= max)
    }
}

/// Limits for the three loan inputs, from limits.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Loan amount limits.
    pub principal: FieldLimits,
    /// Tenure limits, in years.
    pub tenure_years: FieldLimits,
    /// Annual interest rate limits, in percent.
    pub annual_rate_percent: FieldLimits,
}

/// How digits are grouped when formatting currency amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitGrouping {
    /// Groups of three: 2,500,000.
    Western,
    /// Last three digits, then groups of two: 25,00,000.
    Indian,
}

/// Currency presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// ISO 4217 code (e.g., "INR").
    pub code: String,
    /// Symbol printed before amounts (e.g., "₹").
    pub symbol: String,
    /// Digit grouping style.
    pub grouping: DigitGrouping,
}

/// How numbers are written into the exported spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberStyle {
    /// Bare digits, so spreadsheet tools read cells as numbers.
    Plain,
    /// Digits with the configured grouping separators.
    Grouped,
}

/// Spreadsheet export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Name of the report sheet, used as the first cell of the export.
    pub sheet_name: String,
    /// Prefix of the generated file name.
    pub file_prefix: String,
    /// Number formatting for monetary cells.
    pub number_style: NumberStyle,
}

/// Report presentation settings, from report.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report heading.
    pub title: String,
    /// Line printed under the heading.
    pub subtitle: String,
    /// Currency presentation.
    pub currency: CurrencyConfig,
    /// Spreadsheet export settings.
    pub export: ExportConfig,
    /// Footer printed under every report.
    pub disclaimer: String,
}

/// The complete calculator configuration loaded from YAML files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Input limits and defaults.
    limits: InputLimits,
    /// Report presentation settings.
    report: ReportConfig,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(limits: InputLimits, report: ReportConfig) -> Self {
        Self { limits, report }
    }

    /// Returns the input limits.
    pub fn limits(&self) -> &InputLimits {
        &self.limits
    }

    /// Returns the report settings.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calculator
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::LoanInput;

use super::types::{CalculatorConfig, FieldLimits, InputLimits, ReportConfig};

const BUILTIN_LIMITS: &str = include_str!("../../config/default/limits.yaml");
const BUILTIN_REPORT: &str = include_str!("../../config/default/report.yaml");

/// Loads and provides access to calculator configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides input validation against the configured limits.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── limits.yaml   # Input ranges, defaults and steps
/// └── report.yaml   # Titles, currency, export layout, disclaimer
/// ```
///
/// # Example
///
/// ```no_run
/// use amortization_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Report: {}", loader.report().title);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any limit is inconsistent (non-positive minimum, default out of range)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let limits = Self::load_yaml::<InputLimits>(&path.join("limits.yaml"))?;
        let report = Self::load_yaml::<ReportConfig>(&path.join("report.yaml"))?;

        Self::from_parts(limits, report)
    }

    /// Returns the configuration shipped in `config/default`, without file access.
    pub fn builtin() -> EngineResult<Self> {
        let limits = Self::parse_yaml::<InputLimits>(BUILTIN_LIMITS, "<builtin>/limits.yaml")?;
        let report = Self::parse_yaml::<ReportConfig>(BUILTIN_REPORT, "<builtin>/report.yaml")?;

        Self::from_parts(limits, report)
    }

    fn from_parts(limits: InputLimits, report: ReportConfig) -> EngineResult<Self> {
        Self::validate_limits("principal", &limits.principal)?;
        Self::validate_limits("tenure_years", &limits.tenure_years)?;
        Self::validate_limits("annual_rate_percent", &limits.annual_rate_percent)?;

        Ok(Self {
            config: CalculatorConfig::new(limits, report),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, path: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Checks that a field's limits can accept at least its own default.
    fn validate_limits(field: &str, limits: &FieldLimits) -> EngineResult<()> {
        if limits.min <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!("{} minimum must be greater than zero", field),
            });
        }
        if let Some(max) = limits.max {
            if max < limits.min {
                return Err(EngineError::InvalidConfig {
                    message: format!("{} maximum {} is below minimum {}", field, max, limits.min),
                });
            }
        }
        if !limits.contains(limits.default) {
            return Err(EngineError::InvalidConfig {
                message: format!("{} default {} is outside its limits", field, limits.default),
            });
        }
        if limits.step.is_some_and(|step| step <= Decimal::ZERO) {
            return Err(EngineError::InvalidConfig {
                message: format!("{} step must be greater than zero", field),
            });
        }
        Ok(())
    }

    /// Returns the underlying calculator configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the input limits.
    pub fn limits(&self) -> &InputLimits {
        self.config.limits()
    }

    /// Returns the report settings.
    pub fn report(&self) -> &ReportConfig {
        self.config.report()
    }

    /// Builds a loan input from the configured defaults.
    pub fn default_input(&self) -> LoanInput {
        let limits = self.limits();
        LoanInput::new(
            limits.principal.default,
            limits.tenure_years.default,
            limits.annual_rate_percent.default,
        )
    }

    /// Checks every field of `input` against the configured limits.
    ///
    /// # Returns
    ///
    /// Returns `OutOfRange` for the first field outside its limits.
    ///
    /// # Example
    ///
    /// ```
    /// use amortization_engine::config::ConfigLoader;
    /// use amortization_engine::models::LoanInput;
    /// use rust_decimal_macros::dec;
    ///
    /// let loader = ConfigLoader::builtin()?;
    /// assert!(loader.validate_input(&LoanInput::new(dec!(2500000), dec!(25), dec!(8.5))).is_ok());
    /// assert!(loader.validate_input(&LoanInput::new(dec!(2500000), dec!(40), dec!(8.5))).is_err());
    /// # Ok::<(), amortization_engine::error::EngineError>(())
    /// ```
    pub fn validate_input(&self, input: &LoanInput) -> EngineResult<()> {
        let limits = self.limits();
        Self::check_field("principal", input.principal, &limits.principal)?;
        Self::check_field("tenure_years", input.tenure_years, &limits.tenure_years)?;
        Self::check_field(
            "annual_rate_percent",
            input.annual_rate_percent,
            &limits.annual_rate_percent,
        )
    }

    fn check_field(field: &str, value: Decimal, limits: &FieldLimits) -> EngineResult<()> {
        if limits.contains(value) {
            return Ok(());
        }
        Err(EngineError::OutOfRange {
            field: field.to_string(),
            value,
            min: limits.min,
            max: limits.max,
        })
    }
}

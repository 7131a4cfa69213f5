//! Error types for the Amortization Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing or reporting a
//! loan repayment plan.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Amortization Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use amortization_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "principal".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'principal': must be greater than zero");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A loan input was zero, negative, or otherwise unusable by the engine.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A loan input fell outside the configured limits.
    #[error("{field} {value} is outside the allowed range {min}..={}", upper_bound(.max))]
    OutOfRange {
        /// The input field that was rejected.
        field: String,
        /// The value that was supplied.
        value: Decimal,
        /// The smallest accepted value.
        min: Decimal,
        /// The largest accepted value, if the field is bounded above.
        max: Option<Decimal>,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but its values are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// The spreadsheet export could not be written.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the write failure.
        message: String,
    },
}

fn upper_bound(max: &Option<Decimal>) -> String {
    max.map(|m| m.to_string()).unwrap_or_else(|| "∞".to_string())
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl From<csv::Error> for EngineError {
    fn from(e: csv::Error) -> Self {
        EngineError::ExportError {
            message: e.to_string(),
        }
    }
}

//! Configuration loading and management for the Amortization Engine.
//!
//! This module loads input limits, form defaults and report presentation
//! settings from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use amortization_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded report: {}", config.report().title);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalculatorConfig, CurrencyConfig, DigitGrouping, ExportConfig, FieldLimits, InputLimits,
    NumberStyle, ReportConfig,
};

//! Core data models for the Amortization Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod loan;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use loan::{LoanCalculation, LoanInput, LoanSummary, ScheduleRow};

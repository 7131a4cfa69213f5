//! Amortization Engine for home loans
//!
//! This crate computes the Equal Monthly Installment (EMI) of a loan under
//! diminishing-balance amortization, builds its yearly repayment schedule,
//! and renders the result as a terminal report, a CSV spreadsheet or an
//! HTTP JSON response.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;

//! HTTP API module for the Amortization Engine.
//!
//! This module provides the REST endpoints for computing a loan repayment
//! plan and downloading it as a spreadsheet.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, FormResponse};
pub use state::AppState;

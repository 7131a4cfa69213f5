//! Request types for the Amortization Engine API.
//!
//! This module defines the JSON request body shared by the `/calculate` and
//! `/export` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::LoanInput;

/// Request body for the `/calculate` and `/export` endpoints.
///
/// Numbers may be sent either as JSON numbers or as decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The amount borrowed.
    pub principal: Decimal,
    /// Loan duration in years.
    pub tenure_years: Decimal,
    /// Annual interest rate as a percentage (e.g. `8.5`).
    pub annual_rate_percent: Decimal,
}

impl From<CalculationRequest> for LoanInput {
    fn from(req: CalculationRequest) -> Self {
        LoanInput::new(req.principal, req.tenure_years, req.annual_rate_percent)
    }
}

impl From<LoanInput> for CalculationRequest {
    fn from(input: LoanInput) -> Self {
        Self {
            principal: input.principal,
            tenure_years: input.tenure_years,
            annual_rate_percent: input.annual_rate_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_numbers() {
        let json = r#"{
            "principal": 2500000,
            "tenure_years": 25,
            "annual_rate_percent": 8.5
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.principal, dec!(2500000));
        assert_eq!(request.tenure_years, dec!(25));
        assert_eq!(request.annual_rate_percent, dec!(8.5));
    }

    #[test]
    fn test_deserialize_decimal_strings() {
        let json = r#"{
            "principal": "100000",
            "tenure_years": "1",
            "annual_rate_percent": "10.25"
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.annual_rate_percent, dec!(10.25));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{ "principal": 100000, "tenure_years": 1 }"#;

        let err = serde_json::from_str::<CalculationRequest>(json).unwrap_err();
        assert!(err.to_string().contains("annual_rate_percent"));
    }

    #[test]
    fn test_conversion_to_loan_input() {
        let req = CalculationRequest {
            principal: dec!(500000),
            tenure_years: dec!(10),
            annual_rate_percent: dec!(7.25),
        };

        let input: LoanInput = req.into();
        assert_eq!(input, LoanInput::new(dec!(500000), dec!(10), dec!(7.25)));
    }
}

//! Response types for the Amortization Engine API.
//!
//! This module defines the error body returned by every endpoint, the
//! mapping from [`EngineError`] to HTTP status codes, and the `/form`
//! payload.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::config::{CurrencyConfig, InputLimits};
use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error with a code and message and no details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Attaches a details string to the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// A request body that parsed but lacks a required field.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// A request body that is not valid JSON for a loan.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::InvalidInput { field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_INPUT", message)
                    .with_details(format!("Field '{}' cannot be used to compute a loan", field)),
            ),
            EngineError::OutOfRange { field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("OUT_OF_RANGE", message)
                    .with_details(format!("See GET /form for the accepted range of '{}'", field)),
            ),
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("CONFIG_ERROR", "Configuration error").with_details(message),
            ),
            EngineError::InvalidConfig { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INVALID_CONFIG", "Invalid configuration").with_details(message),
            ),
            EngineError::ExportError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("EXPORT_ERROR", "Export failed").with_details(message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}

/// Body of `GET /form`: everything a client needs to draw the input form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormResponse {
    /// Report title.
    pub title: String,
    /// Report subtitle.
    pub subtitle: String,
    /// Currency used for amounts.
    pub currency: CurrencyConfig,
    /// Accepted ranges, defaults and slider steps.
    pub limits: InputLimits,
}

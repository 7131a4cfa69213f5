//! HTTP request handlers for the Amortization Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::compute_loan;
use crate::error::EngineError;
use crate::models::{CalculationResult, LoanCalculation, LoanInput};
use crate::report::{export_csv, export_file_name};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, FormResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/form", get(form_handler))
        .route("/calculate", post(calculate_handler))
        .route("/export", post(export_handler))
        .with_state(state)
}

/// Handler for GET /form endpoint.
///
/// Returns the input limits and report titles a client needs to draw its form.
async fn form_handler(State(state): State<AppState>) -> Json<FormResponse> {
    let config = state.config();
    let report = config.report();
    Json(FormResponse {
        title: report.title.clone(),
        subtitle: report.subtitle.clone(),
        currency: report.currency.clone(),
        limits: config.limits().clone(),
    })
}

/// Handler for POST /calculate endpoint.
///
/// Accepts loan parameters and returns the repayment plan with its audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let input: LoanInput = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match run_calculation(&state, &input, correlation_id) {
        Ok(calculation) => {
            let duration_us = start_time.elapsed().as_micros() as u64;
            info!(
                correlation_id = %correlation_id,
                principal = %input.principal,
                months = calculation.months,
                monthly_payment = %calculation.summary.monthly_payment,
                duration_us,
                "Calculation completed successfully"
            );
            let result = CalculationResult::from_calculation(calculation, duration_us);
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /export endpoint.
///
/// Accepts loan parameters and returns the report as a CSV download.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let input: LoanInput = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let report = state.config().report();
    let bytes = run_calculation(&state, &input, correlation_id)
        .and_then(|calculation| export_csv(&calculation, report));

    match bytes {
        Ok(bytes) => {
            let file_name = export_file_name(input.principal, &report.export);
            info!(
                correlation_id = %correlation_id,
                file_name = %file_name,
                size = bytes.len(),
                "Export completed successfully"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Validates the input against the configured limits, then runs the engine.
fn run_calculation(
    state: &AppState,
    input: &LoanInput,
    correlation_id: Uuid,
) -> Result<LoanCalculation, EngineError> {
    state.config().validate_input(input)?;
    let calculation = compute_loan(input)?;
    for warning in &calculation.warnings {
        debug!(
            correlation_id = %correlation_id,
            code = %warning.code,
            "{}", warning.message
        );
    }
    Ok(calculation)
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}

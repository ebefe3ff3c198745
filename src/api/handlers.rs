//! HTTP request handlers for the vigência cost engine API.
//!
//! This module contains the handler functions for the two exposed contracts:
//! configuration lookup and cost computation.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate, compute, resolve_working_days};
use crate::models::VigenciaRecord;

use super::request::ComputeRequest;
use super::response::{ApiError, ComputeResponse, LookupResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/config-lookup", get(lookup_handler))
        .route("/compute", post(compute_handler))
        .with_state(state)
}

/// Handler for the `GET /config-lookup` endpoint.
///
/// Resolves the cost configuration effective for the requested date and
/// contract type. Missing or unparseable parameters answer `data: null`
/// rather than an error: the consumer treats a 4xx and a miss identically,
/// and a non-numeric contract type must never reach the store.
async fn lookup_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let date = params
        .get("effective_date")
        .and_then(|raw| crate::config::parse_effective_date(raw));
    let contract_type =
        crate::config::parse_contract_type(params.get("contract_type").map(String::as_str));

    let data = match (date, contract_type) {
        (Some(date), Some(contract_type)) => {
            let resolved = state.config().config().resolve(date, contract_type).cloned();
            info!(
                effective_date = %date,
                contract_type = %contract_type,
                found = resolved.is_some(),
                "Configuration lookup"
            );
            resolved
        }
        _ => {
            warn!(
                effective_date = ?params.get("effective_date"),
                contract_type = ?params.get("contract_type"),
                "Configuration lookup refused: unparseable parameters"
            );
            None
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(LookupResponse::of(data)),
    )
}

/// Handler for the `POST /compute` endpoint.
///
/// Resolves the effective configuration, derives the benefit set, and
/// aggregates the daily and monthly totals into a fully derived record.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking.
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compute request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let result = perform_computation(&request, &state);
    info!(
        correlation_id = %correlation_id,
        configuration_found = result.configuration_found,
        working_days = result.working_days,
        daily_total_cost = %result.record.daily_total_cost,
        monthly_total_cost = %result.record.monthly_total_cost,
        "Computation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Performs the resolution, derivation, and aggregation for one request.
fn perform_computation(request: &ComputeRequest, state: &AppState) -> ComputeResponse {
    let effective_date = request.parsed_effective_date();
    let contract_type = request.parsed_contract_type();
    let monthly_salary = request.monthly_salary.amount();

    let config = match (effective_date, contract_type) {
        (Some(date), Some(contract_type)) => {
            state.config().config().resolve(date, contract_type).cloned()
        }
        _ => None,
    };

    let working_days = resolve_working_days(
        request.working_days,
        config.as_ref().and_then(|c| c.working_days_per_month),
    );

    let benefits = match &config {
        Some(config) => compute(
            monthly_salary,
            config,
            working_days,
            request.daily_contracted_hours,
        ),
        None => crate::models::BenefitSet::zero(),
    };

    let cost_allowance_daily = request.cost_allowance_daily.unwrap_or_default();
    let totals = aggregate(monthly_salary, &benefits, cost_allowance_daily, working_days);

    let record = VigenciaRecord {
        effective_date,
        contract_type,
        monthly_salary,
        daily_contracted_hours: request.daily_contracted_hours,
        working_days: request.working_days,
        vacation_daily: benefits.vacation_daily,
        one_third_vacation_daily: benefits.one_third_vacation_daily,
        thirteenth_salary_daily: benefits.thirteenth_salary_daily,
        fgts_daily: benefits.fgts_daily,
        transport_daily: benefits.transport_daily,
        meal_daily: benefits.meal_daily,
        cost_allowance_daily,
        cost_per_hour: benefits.cost_per_hour,
        daily_total_cost: totals.daily_total_cost,
        monthly_total_cost: totals.monthly_total_cost,
    };

    ComputeResponse {
        computation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        configuration_found: config.is_some(),
        working_days,
        record,
    }
}

//! Integration tests for the vigência cost engine HTTP API.
//!
//! This suite exercises the two exposed contracts end to end:
//! - Configuration lookup by effective date and contract type
//! - Cost computation: annual-provision chain, FGTS chain, fixed vouchers,
//!   hourly cost, and the daily/monthly aggregation invariant
//! - Degenerate inputs: resolution misses, masked currency strings,
//!   non-numeric contract types, malformed JSON

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use vigencia_engine::api::{AppState, ComputeResponse, LookupResponse, create_router};
use vigencia_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/cost").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_compute(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/compute")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn get_lookup(router: Router, query: &str) -> LookupResponse {
    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/config-lookup?{}", query))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

fn compute_response(body: &Value) -> ComputeResponse {
    serde_json::from_value(body.clone()).unwrap()
}

// =============================================================================
// Configuration lookup
// =============================================================================

/// Resolver selection: a date between two configurations picks the earlier.
#[tokio::test]
async fn test_lookup_selects_most_recent_as_of_date() {
    let result = get_lookup(
        create_router_for_test(),
        "effective_date=2024-03-15&contract_type=1",
    )
    .await;

    let config = result.data.expect("expected a configuration");
    assert_eq!(
        config.effective_date,
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    );
}

/// Resolver selection: a date past the newest configuration picks the newest.
#[tokio::test]
async fn test_lookup_selects_latest_configuration() {
    let result = get_lookup(
        create_router_for_test(),
        "effective_date=2024-07-01&contract_type=1",
    )
    .await;

    let config = result.data.expect("expected a configuration");
    assert_eq!(
        config.effective_date,
        chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    );
    assert_eq!(config.daily_transport_allowance, dec("14.00"));
}

/// Resolver selection: a date before every configuration is a miss.
#[tokio::test]
async fn test_lookup_before_earliest_is_miss() {
    let result = get_lookup(
        create_router_for_test(),
        "effective_date=2023-12-31&contract_type=1",
    )
    .await;

    assert!(result.success);
    assert!(result.data.is_none());
}

/// Contract types are independent scopes.
#[tokio::test]
async fn test_lookup_unknown_contract_type_is_miss() {
    let result = get_lookup(
        create_router_for_test(),
        "effective_date=2024-03-15&contract_type=2",
    )
    .await;

    assert!(result.data.is_none());
}

/// A non-numeric contract type never reaches the store.
#[tokio::test]
async fn test_lookup_non_numeric_contract_type_is_refused() {
    let result = get_lookup(
        create_router_for_test(),
        "effective_date=2024-03-15&contract_type=pj",
    )
    .await;

    assert!(result.success);
    assert!(result.data.is_none());
}

/// ISO datetime effective dates are normalized before resolution.
#[tokio::test]
async fn test_lookup_normalizes_datetime_input() {
    let result = get_lookup(
        create_router_for_test(),
        "effective_date=2024-03-15T00:00:00&contract_type=1",
    )
    .await;

    assert!(result.data.is_some());
}

// =============================================================================
// Computation
// =============================================================================

/// Full derivation for a CLT salary: annual chain, FGTS chain, vouchers,
/// and the aggregation invariant.
#[tokio::test]
async fn test_compute_clt_full_derivation() {
    let (status, body) = post_compute(
        create_router_for_test(),
        json!({
            "effective_date": "2024-03-15",
            "contract_type": 1,
            "monthly_salary": "3000.00",
            "working_days": 22
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let result = compute_response(&body);
    assert!(result.configuration_found);

    let record = &result.record;
    // Annual provisions: 3000 / 12 / 22.
    assert_eq!(record.vacation_daily, dec("11.36"));
    assert_eq!(record.thirteenth_salary_daily, dec("11.36"));
    // 3000 * 0.3333 / 12 / 22.
    assert_eq!(record.one_third_vacation_daily, dec("3.79"));
    // FGTS: 3000 * 0.08 / 22, no division by 12.
    assert_eq!(record.fgts_daily, dec("10.91"));
    // Vouchers pass through from the effective configuration.
    assert_eq!(record.transport_daily, dec("12.00"));
    assert_eq!(record.meal_daily, dec("25.00"));

    // 3000/22 + 74.42 in benefits.
    assert_eq!(record.daily_total_cost, dec("210.78"));
    assert_eq!(record.monthly_total_cost, dec("4637.16"));
    assert_eq!(
        record.monthly_total_cost,
        (record.daily_total_cost * dec("22")).round_dp(2)
    );
}

/// The hourly cost uses contracted hours times working days.
#[tokio::test]
async fn test_compute_cost_per_hour() {
    let (_, body) = post_compute(
        create_router_for_test(),
        json!({
            "effective_date": "2024-03-15",
            "contract_type": 1,
            "monthly_salary": "3000.00",
            "working_days": 22,
            "daily_contracted_hours": "8"
        }),
    )
    .await;

    let result = compute_response(&body);
    // Internal monthly total 4637.16 over 176 contracted hours.
    assert_eq!(result.record.cost_per_hour, dec("26.35"));
}

/// A masked pt-BR salary string computes identically to the plain number.
#[tokio::test]
async fn test_compute_accepts_masked_salary() {
    let (_, masked) = post_compute(
        create_router_for_test(),
        json!({
            "effective_date": "2024-03-15",
            "contract_type": 1,
            "monthly_salary": "3.000,00"
        }),
    )
    .await;
    let (_, plain) = post_compute(
        create_router_for_test(),
        json!({
            "effective_date": "2024-03-15",
            "contract_type": 1,
            "monthly_salary": "3000.00"
        }),
    )
    .await;

    let masked = compute_response(&masked);
    let plain = compute_response(&plain);
    assert_eq!(masked.record.monthly_salary, dec("3000.00"));
    assert_eq!(masked.record.vacation_daily, plain.record.vacation_daily);
    assert_eq!(
        masked.record.daily_total_cost,
        plain.record.daily_total_cost
    );
}

/// Resolution miss: derived fields are zero, only the salary portion and the
/// manual allowance remain in the daily total.
#[tokio::test]
async fn test_compute_without_configuration() {
    let (status, body) = post_compute(
        create_router_for_test(),
        json!({
            "effective_date": "2024-03-15",
            "contract_type": 2,
            "monthly_salary": "3000.00",
            "cost_allowance_daily": "5.00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let result = compute_response(&body);
    assert!(!result.configuration_found);

    let record = &result.record;
    assert_eq!(record.vacation_daily, Decimal::ZERO);
    assert_eq!(record.fgts_daily, Decimal::ZERO);
    assert_eq!(record.transport_daily, Decimal::ZERO);
    // 3000/22 + 5.00.
    assert_eq!(record.daily_total_cost, dec("141.36"));
    assert_eq!(record.monthly_total_cost, dec("3109.92"));
}

/// Internship configurations carry vouchers but no percentage charges.
#[tokio::test]
async fn test_compute_internship_vouchers_only() {
    let (_, body) = post_compute(
        create_router_for_test(),
        json!({
            "effective_date": "2024-03-15",
            "contract_type": 3,
            "monthly_salary": "1500.00"
        }),
    )
    .await;

    let result = compute_response(&body);
    assert!(result.configuration_found);
    let record = &result.record;
    assert_eq!(record.vacation_daily, Decimal::ZERO);
    assert_eq!(record.fgts_daily, Decimal::ZERO);
    assert_eq!(record.transport_daily, dec("10.00"));
    assert_eq!(record.meal_daily, dec("20.00"));
}

/// Zero salary is safe and yields a zero benefit set.
#[tokio::test]
async fn test_compute_zero_salary_is_safe() {
    let (status, body) = post_compute(
        create_router_for_test(),
        json!({
            "effective_date": "2024-03-15",
            "contract_type": 1,
            "monthly_salary": 0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let result = compute_response(&body);
    let record = &result.record;
    assert_eq!(record.vacation_daily, Decimal::ZERO);
    assert_eq!(record.fgts_daily, Decimal::ZERO);
    assert_eq!(record.daily_total_cost, Decimal::ZERO);
    assert_eq!(record.monthly_total_cost, Decimal::ZERO);
}

/// A non-numeric contract type computes as "no configuration".
#[tokio::test]
async fn test_compute_non_numeric_contract_type() {
    let (status, body) = post_compute(
        create_router_for_test(),
        json!({
            "effective_date": "2024-03-15",
            "contract_type": "estagio",
            "monthly_salary": "3000.00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let result = compute_response(&body);
    assert!(!result.configuration_found);
    assert_eq!(result.record.daily_total_cost, dec("136.36"));
}

/// The working-days override takes precedence over the configuration.
#[tokio::test]
async fn test_compute_working_days_override() {
    let (_, body) = post_compute(
        create_router_for_test(),
        json!({
            "effective_date": "2024-03-15",
            "contract_type": 1,
            "monthly_salary": "3000.00",
            "working_days": 20
        }),
    )
    .await;

    let result = compute_response(&body);
    assert_eq!(result.working_days, 20);
    // 3000 / 12 / 20.
    assert_eq!(result.record.vacation_daily, dec("12.50"));
    assert_eq!(
        result.record.monthly_total_cost,
        (result.record.daily_total_cost * dec("20")).round_dp(2)
    );
}

/// Malformed JSON is a 400 with a structured error body.
#[tokio::test]
async fn test_compute_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/compute")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

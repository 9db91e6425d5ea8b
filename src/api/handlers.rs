//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, HealthResponse, SalaryReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// Handler for POST /calculate endpoint.
///
/// Accepts attendance records and returns the salary report.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: rejection_to_error(rejection, correlation_id),
            }
            .into_response();
        }
    };

    let records = request.into_records();
    let start_time = Instant::now();

    match state.calculator().calculate_report(&records) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                records = records.len(),
                days = report.days_breakdown.len(),
                total_salary = %report.total_salary.normalize(),
                duration_us = start_time.elapsed().as_micros() as u64,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(SalaryReportResponse::from(&report)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a JSON extraction failure to an API error.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
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
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::SalaryCalculator;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::from_calculator(SalaryCalculator::default())
    }

    async fn post_calculate(body: String) -> (StatusCode, Value) {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = json!({
            "records": [{ "date": "2025-01-14", "periods": [["09:00", "18:00"]], "site": "A" }]
        });

        let (status, json) = post_calculate(body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_salary"], "693.75");
        assert_eq!(json["days_breakdown"][0]["overtime_125_hours"], "1.00");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, json) = post_calculate("{invalid json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_date_returns_validation_error() {
        let body = json!({ "records": [{ "periods": [["09:00", "17:00"]] }] });

        let (status, json) = post_calculate(body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_wrong_type_returns_malformed_json() {
        let body = json!({ "records": "not a list" });

        let (status, json) = post_calculate(body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_unparsable_time_returns_calculation_error() {
        let body = json!({
            "records": [{ "date": "2025-01-14", "periods": [["25:99", "17:00"]] }]
        });

        let (status, json) = post_calculate(body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "CALCULATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("2025-01-14"));
    }

    #[tokio::test]
    async fn test_calculation_error_is_json_with_details() {
        let body = json!({
            "records": [{ "date": "2025-01-14", "periods": [["09:00", "12:60"]] }]
        });

        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "CALCULATION_ERROR");
        assert!(json["details"].as_str().unwrap().contains("12:60"));
    }

    #[tokio::test]
    async fn test_overnight_period_on_last_date_returns_calculation_error() {
        let body = json!({
            "records": [{ "date": NaiveDate::MAX, "periods": [["22:00", "02:00"]] }]
        });

        let (status, json) = post_calculate(body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "CALCULATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_content_type_returns_400() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .body(Body::from(r#"{"records": []}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = create_router(create_test_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
    }
}

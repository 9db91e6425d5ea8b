//! Response types for the payroll engine API.
//!
//! This module defines the wire representation of a salary report and the
//! error response structures. All hour and money amounts leave the engine as
//! strings with exactly two decimals.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::CalculationError;
use crate::models::{DaySalaryBreakdown, SalaryReport};

/// Formats an amount with exactly two decimals, rounding half away from zero.
///
/// # Example
///
/// ```
/// use payroll_engine::api::format_2dp;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_2dp(Decimal::new(1125, 0)), "1125.00");
/// assert_eq!(format_2dp(Decimal::new(8333, 3)), "8.33");
/// assert_eq!(format_2dp(Decimal::new(6875, 3)), "6.88");
/// ```
pub fn format_2dp(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

/// Wire form of a [`SalaryReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryReportResponse {
    /// Sum of every day total.
    pub total_salary: String,
    /// Hours across all days and tiers.
    pub total_hours: String,
    /// Regular-tier hours.
    pub total_regular_hours: String,
    /// Hours in both overtime tiers.
    pub total_overtime_hours: String,
    /// Days with any hours worked.
    pub days_worked: usize,
    /// One entry per date, ascending.
    pub days_breakdown: Vec<DayBreakdownResponse>,
}

/// Wire form of a [`DaySalaryBreakdown`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayBreakdownResponse {
    /// The calendar date.
    pub date: NaiveDate,
    /// Regular-tier hours.
    pub regular_hours: String,
    /// Overtime-125 hours.
    pub overtime_125_hours: String,
    /// Overtime-150 hours.
    pub overtime_150_hours: String,
    /// Whether the weekend override applied.
    pub weekend_premium_applied: bool,
    /// Monetary total for the day.
    pub day_total: String,
    /// Distinct site labels.
    pub sites: Vec<String>,
    /// Entry/exit pairs as received.
    pub raw_periods: Vec<(String, String)>,
}

impl From<&DaySalaryBreakdown> for DayBreakdownResponse {
    fn from(day: &DaySalaryBreakdown) -> Self {
        Self {
            date: day.date,
            regular_hours: format_2dp(day.regular_hours),
            overtime_125_hours: format_2dp(day.overtime_125_hours),
            overtime_150_hours: format_2dp(day.overtime_150_hours),
            weekend_premium_applied: day.weekend_premium_applied,
            day_total: format_2dp(day.day_total),
            sites: day.sites.clone(),
            raw_periods: day.raw_periods.clone(),
        }
    }
}

impl From<&SalaryReport> for SalaryReportResponse {
    fn from(report: &SalaryReport) -> Self {
        Self {
            total_salary: format_2dp(report.total_salary),
            total_hours: format_2dp(report.total_hours()),
            total_regular_hours: format_2dp(report.total_regular_hours()),
            total_overtime_hours: format_2dp(report.total_overtime_hours()),
            days_worked: report.days_worked(),
            days_breakdown: report.days_breakdown.iter().map(Into::into).collect(),
        }
    }
}

/// Body of the `/health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the service answers.
    pub status: String,
    /// RFC 3339 timestamp of the response.
    pub timestamp: String,
}

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
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
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

impl From<CalculationError> for ApiErrorResponse {
    fn from(error: CalculationError) -> Self {
        let date = error.date();
        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::with_details(
                "CALCULATION_ERROR",
                format!("Calculation failed for {}", date),
                error.to_string(),
            ),
        }
    }
}

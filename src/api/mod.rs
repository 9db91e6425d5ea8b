//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints that run the salary calculator
//! over attendance records posted by a client, and owns the wire format of
//! the resulting report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRecordRequest, CalculationRequest};
pub use response::{
    ApiError, ApiErrorResponse, DayBreakdownResponse, HealthResponse, SalaryReportResponse,
    format_2dp,
};
pub use state::AppState;

//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::AttendanceRecord;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Attendance records, in any order; duplicate dates are merged.
    pub records: Vec<AttendanceRecordRequest>,
}

/// One attendance record in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// The calendar date the periods belong to.
    pub date: NaiveDate,
    /// Entry/exit pairs as `["HH:MM", "HH:MM"]`.
    #[serde(default)]
    pub periods: Vec<(String, String)>,
    /// Free-text work site label.
    #[serde(default)]
    pub site: String,
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            date: req.date,
            periods: req.periods,
            site: req.site,
        }
    }
}

impl CalculationRequest {
    /// Converts the request into domain records.
    pub fn into_records(self) -> Vec<AttendanceRecord> {
        self.records.into_iter().map(Into::into).collect()
    }
}

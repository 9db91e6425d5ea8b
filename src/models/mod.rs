//! Core data models for the payroll engine.
//!
//! This module contains the attendance input, the resolved work period and
//! the salary result types.

mod attendance;
mod salary_report;
mod work_period;

pub use attendance::{AttendanceRecord, DayAttendance, RawPeriod};
pub use salary_report::{DaySalaryBreakdown, SalaryReport};
pub use work_period::WorkPeriod;
pub(crate) use work_period::minutes_to_hours;

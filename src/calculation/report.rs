//! Multi-day report aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::PayrollConfig;
use crate::error::CalculationError;
use crate::models::{AttendanceRecord, DayAttendance, SalaryReport};

use super::calculate_day_breakdown;

/// Merges records sharing a date into one [`DayAttendance`] per date.
///
/// The result is sorted by date ascending regardless of input order.
/// Periods of duplicate dates are concatenated in input order, and site
/// labels are collected without duplicates.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::merge_by_date;
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
///
/// let wed = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let tue = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
/// let records = vec![
///     AttendanceRecord::new(wed).with_period("09:00", "17:00"),
///     AttendanceRecord::new(tue).with_period("08:00", "12:00"),
///     AttendanceRecord::new(tue).with_period("13:00", "17:00"),
/// ];
///
/// let days = merge_by_date(&records);
/// assert_eq!(days.len(), 2);
/// assert_eq!(days[0].date, tue);
/// assert_eq!(days[0].periods.len(), 2);
/// ```
pub fn merge_by_date(records: &[AttendanceRecord]) -> Vec<DayAttendance> {
    let mut days: BTreeMap<NaiveDate, DayAttendance> = BTreeMap::new();
    for record in records {
        days.entry(record.date)
            .or_insert_with(|| DayAttendance::new(record.date))
            .absorb(record);
    }
    days.into_values().collect()
}

/// Calculates a full report from raw attendance records.
///
/// Fails on the first day whose periods cannot be calculated; no partial
/// report is produced.
pub fn calculate_report(
    records: &[AttendanceRecord],
    config: &PayrollConfig,
) -> Result<SalaryReport, CalculationError> {
    let days = merge_by_date(records)
        .iter()
        .map(|day| calculate_day_breakdown(day, config))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SalaryReport::new(days))
}

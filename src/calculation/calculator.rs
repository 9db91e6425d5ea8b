//! The salary calculator entry point.

use std::time::Instant;

use tracing::{info, warn};

use crate::config::PayrollConfig;
use crate::error::CalculationError;
use crate::models::{AttendanceRecord, DayAttendance, DaySalaryBreakdown, SalaryReport};

use super::{calculate_day_breakdown, calculate_report};

/// Turns attendance records into salary reports under one configuration.
///
/// The calculator holds no mutable state, so a single instance can be
/// shared across threads (the HTTP layer keeps it behind an `Arc`).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::SalaryCalculator;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let calculator = SalaryCalculator::new(PayrollConfig::default());
/// let friday = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
/// let records = vec![AttendanceRecord::new(friday).with_period("16:00", "02:00")];
///
/// let report = calculator.calculate_report(&records).unwrap();
/// assert!(report.days_breakdown[0].weekend_premium_applied);
/// assert_eq!(report.total_salary, Decimal::new(1125, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SalaryCalculator {
    config: PayrollConfig,
}

impl SalaryCalculator {
    /// Creates a calculator for the given configuration.
    pub fn new(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Calculates the breakdown for one merged day.
    pub fn calculate_day(&self, day: &DayAttendance) -> Result<DaySalaryBreakdown, CalculationError> {
        calculate_day_breakdown(day, &self.config)
    }

    /// Calculates a report for `records`, merging duplicate dates first.
    ///
    /// # Errors
    ///
    /// Returns the first [`CalculationError`] encountered, in date order.
    pub fn calculate_report(
        &self,
        records: &[AttendanceRecord],
    ) -> Result<SalaryReport, CalculationError> {
        let start_time = Instant::now();
        info!(records = records.len(), "Calculating salary report");

        match calculate_report(records, &self.config) {
            Ok(report) => {
                info!(
                    days = report.days_breakdown.len(),
                    days_worked = report.days_worked(),
                    total_salary = %report.total_salary.normalize(),
                    duration_us = start_time.elapsed().as_micros() as u64,
                    "Salary report completed"
                );
                Ok(report)
            }
            Err(err) => {
                warn!(date = %err.date(), error = %err, "Salary report failed");
                Err(err)
            }
        }
    }
}

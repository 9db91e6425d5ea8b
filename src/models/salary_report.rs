//! Salary result models.
//!
//! This module contains [`DaySalaryBreakdown`] and [`SalaryReport`]. They hold
//! full-precision values and know nothing about any transport format; the
//! HTTP layer owns the mapping to its 2-decimal wire representation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::RawPeriod;

/// The calculated result for one calendar date.
///
/// `regular_hours + overtime_125_hours + overtime_150_hours` always equals
/// the summed duration of the day's periods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySalaryBreakdown {
    /// The calendar date.
    pub date: NaiveDate,
    /// Hours billed at the regular rate.
    pub regular_hours: Decimal,
    /// Hours billed at the overtime-125 rate.
    pub overtime_125_hours: Decimal,
    /// Hours billed at the overtime-150 rate.
    pub overtime_150_hours: Decimal,
    /// True if the weekend override billed the whole day at the 150 rate.
    pub weekend_premium_applied: bool,
    /// Hours that actually fell inside the weekend window.
    pub weekend_overlap_hours: Decimal,
    /// Monetary total for the day.
    pub day_total: Decimal,
    /// The entry/exit pairs the day was calculated from.
    pub raw_periods: Vec<RawPeriod>,
    /// Site labels of the records merged into this day.
    pub sites: Vec<String>,
}

impl DaySalaryBreakdown {
    /// An all-zero breakdown for a date with nothing worked.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            regular_hours: Decimal::ZERO,
            overtime_125_hours: Decimal::ZERO,
            overtime_150_hours: Decimal::ZERO,
            weekend_premium_applied: false,
            weekend_overlap_hours: Decimal::ZERO,
            day_total: Decimal::ZERO,
            raw_periods: Vec::new(),
            sites: Vec::new(),
        }
    }

    /// Total hours worked on the day across all tiers.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_125_hours + self.overtime_150_hours
    }

    /// Hours billed above the regular rate.
    pub fn overtime_hours(&self) -> Decimal {
        self.overtime_125_hours + self.overtime_150_hours
    }
}

/// The full salary report for a run of attendance records.
///
/// Aggregate hour totals are derived from `days_breakdown` on demand and
/// never stored, so they cannot drift from the per-day values.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{DaySalaryBreakdown, SalaryReport};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut day = DaySalaryBreakdown::empty(NaiveDate::from_ymd_opt(2025, 1, 14).unwrap());
/// day.regular_hours = Decimal::new(8, 0);
/// day.overtime_125_hours = Decimal::new(1, 0);
/// day.day_total = Decimal::new(69375, 2);
///
/// let report = SalaryReport::new(vec![day]);
/// assert_eq!(report.total_salary, Decimal::new(69375, 2));
/// assert_eq!(report.total_hours(), Decimal::new(9, 0));
/// assert_eq!(report.total_overtime_hours(), Decimal::new(1, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryReport {
    /// One breakdown per distinct date, ascending.
    pub days_breakdown: Vec<DaySalaryBreakdown>,
    /// Exact sum of every `day_total`.
    pub total_salary: Decimal,
}

impl SalaryReport {
    /// Builds a report, summing `total_salary` from the day totals.
    pub fn new(days_breakdown: Vec<DaySalaryBreakdown>) -> Self {
        let total_salary = days_breakdown.iter().map(|d| d.day_total).sum();
        Self {
            days_breakdown,
            total_salary,
        }
    }

    /// Total hours across all days and tiers.
    pub fn total_hours(&self) -> Decimal {
        self.days_breakdown.iter().map(|d| d.total_hours()).sum()
    }

    /// Total regular hours.
    pub fn total_regular_hours(&self) -> Decimal {
        self.days_breakdown.iter().map(|d| d.regular_hours).sum()
    }

    /// Total overtime hours (both overtime tiers).
    pub fn total_overtime_hours(&self) -> Decimal {
        self.days_breakdown.iter().map(|d| d.overtime_hours()).sum()
    }

    /// Total hours in the overtime-125 tier.
    pub fn total_overtime_125_hours(&self) -> Decimal {
        self.days_breakdown.iter().map(|d| d.overtime_125_hours).sum()
    }

    /// Total hours in the overtime-150 tier.
    pub fn total_overtime_150_hours(&self) -> Decimal {
        self.days_breakdown.iter().map(|d| d.overtime_150_hours).sum()
    }

    /// Number of days with any hours worked.
    pub fn days_worked(&self) -> usize {
        self.days_breakdown
            .iter()
            .filter(|d| d.total_hours() > Decimal::ZERO)
            .count()
    }

    /// The first date in the report.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.days_breakdown.first().map(|d| d.date)
    }

    /// The last date in the report.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.days_breakdown.last().map(|d| d.date)
    }
}

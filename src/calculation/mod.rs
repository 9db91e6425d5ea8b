//! Calculation logic for the payroll engine.
//!
//! This module contains clock time parsing, weekend window detection,
//! overtime tier allocation, the per-day breakdown and report aggregation,
//! tied together by [`SalaryCalculator`].

mod calculator;
mod day_breakdown;
mod report;
mod tier_allocation;
mod time_parsing;
mod weekend_window;

pub use calculator::SalaryCalculator;
pub use day_breakdown::calculate_day_breakdown;
pub use report::{calculate_report, merge_by_date};
pub use tier_allocation::{TierSplit, allocate_tier_minutes, allocate_tiers};
pub use time_parsing::{parse_time, period_duration, resolve_period};
pub use weekend_window::{
    WeekendWindow, weekend_overlap_hours, weekend_overlap_minutes, weekend_window_for,
};

//! Weekend premium window detection.
//!
//! The weekend window is a weekly span of absolute time (by default Friday
//! 17:00 to Saturday 05:00). A period earns the premium if any part of it
//! falls inside the window, so overlap is computed as a half-open interval
//! intersection on instants rather than as a per-day flag.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::config::WeekendWindowConfig;
use crate::models::minutes_to_hours;

/// A concrete occurrence of the weekend window, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekendWindow {
    /// First instant inside the window.
    pub start: NaiveDateTime,
    /// First instant after the window.
    pub end: NaiveDateTime,
}

impl WeekendWindow {
    /// Returns how long `[from, to)` overlaps the window.
    pub fn overlap(&self, from: NaiveDateTime, to: NaiveDateTime) -> Duration {
        let lo = from.max(self.start);
        let hi = to.min(self.end);
        if hi > lo { hi - lo } else { Duration::zero() }
    }
}

/// Returns the window occurrence opening in the ISO week (Monday-Sunday)
/// that contains `date`, or `None` if that occurrence falls outside the
/// representable date range.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::weekend_window_for;
/// use payroll_engine::config::WeekendWindowConfig;
/// use chrono::NaiveDate;
///
/// // Tuesday 2025-01-14 belongs to the week whose Friday is 2025-01-17.
/// let date = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
/// let window = weekend_window_for(date, &WeekendWindowConfig::default()).unwrap();
///
/// assert_eq!(window.start.to_string(), "2025-01-17 17:00:00");
/// assert_eq!(window.end.to_string(), "2025-01-18 05:00:00");
/// ```
pub fn weekend_window_for(date: NaiveDate, config: &WeekendWindowConfig) -> Option<WeekendWindow> {
    let monday =
        date.checked_sub_signed(Duration::days(i64::from(date.weekday().num_days_from_monday())))?;
    let start_date = monday.checked_add_signed(Duration::days(i64::from(
        config.start_weekday.num_days_from_monday(),
    )))?;
    let start = start_date.and_time(config.start_time);

    let days_to_end = (7 + i64::from(config.end_weekday.num_days_from_monday())
        - i64::from(config.start_weekday.num_days_from_monday()))
        % 7;
    let mut end = start_date
        .checked_add_signed(Duration::days(days_to_end))?
        .and_time(config.end_time);
    if end <= start {
        end = end.checked_add_signed(Duration::days(7))?;
    }

    Some(WeekendWindow { start, end })
}

/// Returns the whole minutes of `[entry, exit)` falling inside the weekend
/// window.
///
/// The window is located from `date`'s ISO week. The neighbouring weeks'
/// occurrences are checked too, so a window configured to wrap past Sunday
/// still catches Monday-morning work; with the default Friday-to-Saturday
/// window they never intersect a period starting on `date`. Occurrences
/// outside the representable date range are skipped.
pub fn weekend_overlap_minutes(
    date: NaiveDate,
    entry: NaiveDateTime,
    exit: NaiveDateTime,
    config: &WeekendWindowConfig,
) -> i64 {
    if exit <= entry {
        return 0;
    }

    [-7, 0, 7]
        .iter()
        .filter_map(|offset| date.checked_add_signed(Duration::days(*offset)))
        .filter_map(|week| weekend_window_for(week, config))
        .map(|window| window.overlap(entry, exit).num_minutes())
        .sum()
}

/// Returns the hours of `[entry, exit)` falling inside the weekend window.
///
/// See [`weekend_overlap_minutes`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::weekend_overlap_hours;
/// use payroll_engine::config::WeekendWindowConfig;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let friday = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
/// let entry = NaiveDateTime::parse_from_str("2025-01-17 16:00", "%Y-%m-%d %H:%M").unwrap();
/// let exit = NaiveDateTime::parse_from_str("2025-01-18 02:00", "%Y-%m-%d %H:%M").unwrap();
///
/// let hours = weekend_overlap_hours(friday, entry, exit, &WeekendWindowConfig::default());
/// assert_eq!(hours, Decimal::new(9, 0));
/// ```
pub fn weekend_overlap_hours(
    date: NaiveDate,
    entry: NaiveDateTime,
    exit: NaiveDateTime,
    config: &WeekendWindowConfig,
) -> Decimal {
    minutes_to_hours(weekend_overlap_minutes(date, entry, exit, config))
}

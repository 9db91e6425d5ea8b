//! Per-day salary breakdown.
//!
//! This module turns every period recorded for one date into a
//! [`DaySalaryBreakdown`]: total worked hours, weekend window overlap, tier
//! allocation (or the weekend override) and the monetary total.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::PayrollConfig;
use crate::error::CalculationError;
use crate::models::{DayAttendance, DaySalaryBreakdown, minutes_to_hours};

use super::{
    TierSplit, allocate_tier_minutes, allocate_tiers, resolve_period, weekend_overlap_minutes,
};

/// Calculates the salary breakdown for one date.
///
/// Periods are summed in whole minutes, in the order given. If any of them overlaps the
/// weekend window, every hour of the day is billed at the overtime-150 rate;
/// otherwise the day's total is split across the tiers cumulatively. A day
/// without periods yields an all-zero breakdown.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidPeriod`] for the first period whose
/// entry or exit time fails to parse, and
/// [`CalculationError::InvariantViolation`] for a period that cannot be
/// placed on the calendar.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_day_breakdown;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{AttendanceRecord, DayAttendance};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Tuesday, 09:00-18:00
/// let date = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
/// let mut day = DayAttendance::new(date);
/// day.absorb(&AttendanceRecord::new(date).with_period("09:00", "18:00"));
///
/// let breakdown = calculate_day_breakdown(&day, &PayrollConfig::default()).unwrap();
/// assert_eq!(breakdown.regular_hours, Decimal::new(8, 0));
/// assert_eq!(breakdown.overtime_125_hours, Decimal::new(1, 0));
/// assert_eq!(breakdown.day_total, Decimal::new(69375, 2));
/// ```
pub fn calculate_day_breakdown(
    day: &DayAttendance,
    config: &PayrollConfig,
) -> Result<DaySalaryBreakdown, CalculationError> {
    let date = day.date;
    let mut worked_minutes: i64 = 0;
    let mut overlap_minutes: i64 = 0;

    for (entry, exit) in &day.periods {
        let period = resolve_period(date, entry, exit).inspect_err(|err| {
            warn!(%date, entry = %entry, exit = %exit, error = %err, "Rejected period");
        })?;

        let minutes = period.minutes();
        if minutes < 0 {
            return Err(CalculationError::InvariantViolation {
                date,
                message: format!("period {}-{} has negative duration of {} minutes", entry, exit, minutes),
            });
        }

        worked_minutes += minutes;
        overlap_minutes +=
            weekend_overlap_minutes(date, period.start, period.end, &config.weekend_window);
    }

    let worked_hours = minutes_to_hours(worked_minutes);
    let weekend_premium_applied = overlap_minutes > 0;
    let (hours, minutes) = if weekend_premium_applied {
        (
            TierSplit::all_overtime_150(worked_hours),
            TierSplit::all_overtime_150(Decimal::from(worked_minutes)),
        )
    } else {
        (
            allocate_tiers(worked_hours, &config.thresholds),
            allocate_tier_minutes(worked_minutes, &config.thresholds),
        )
    };

    if hours.total() != worked_hours || minutes.total() != Decimal::from(worked_minutes) {
        return Err(CalculationError::InvariantViolation {
            date,
            message: format!(
                "allocated {} hours ({} minutes) but {} minutes were worked",
                hours.total().normalize(),
                minutes.total().normalize(),
                worked_minutes
            ),
        });
    }

    // Priced in minutes, converted to hours once.
    let rates = &config.rates;
    let day_total = (minutes.regular * rates.regular
        + minutes.overtime_125 * rates.overtime_125_rate()
        + minutes.overtime_150 * rates.overtime_150_rate())
        / Decimal::new(60, 0);

    debug!(
        %date,
        periods = day.periods.len(),
        worked_minutes,
        weekend_premium_applied,
        day_total = %day_total.normalize(),
        "Calculated day"
    );

    Ok(DaySalaryBreakdown {
        date,
        regular_hours: hours.regular,
        overtime_125_hours: hours.overtime_125,
        overtime_150_hours: hours.overtime_150,
        weekend_premium_applied,
        weekend_overlap_hours: minutes_to_hours(overlap_minutes),
        day_total,
        raw_periods: day.periods.clone(),
        sites: day.sites.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::models::AttendanceRecord;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_day(date_str: &str, periods: &[(&str, &str)]) -> DayAttendance {
        let date = make_date(date_str);
        let record = periods
            .iter()
            .fold(AttendanceRecord::new(date), |r, (entry, exit)| r.with_period(*entry, *exit));
        let mut day = DayAttendance::new(date);
        day.absorb(&record);
        day
    }

    fn calculate(date_str: &str, periods: &[(&str, &str)]) -> DaySalaryBreakdown {
        calculate_day_breakdown(&make_day(date_str, periods), &PayrollConfig::default()).unwrap()
    }

    // 2025-01-14 is a Tuesday, 2025-01-17 a Friday, 2025-01-18 a Saturday.

    #[test]
    fn test_regular_day() {
        let day = calculate("2025-01-14", &[("09:00", "17:00")]);
        assert_eq!(day.regular_hours, dec("8"));
        assert_eq!(day.overtime_125_hours, Decimal::ZERO);
        assert_eq!(day.overtime_150_hours, Decimal::ZERO);
        assert_eq!(day.day_total, dec("600"));
        assert!(!day.weekend_premium_applied);
    }

    #[test]
    fn test_nine_hour_tuesday() {
        let day = calculate("2025-01-14", &[("09:00", "18:00")]);
        assert_eq!(day.regular_hours, dec("8"));
        assert_eq!(day.overtime_125_hours, dec("1"));
        assert_eq!(day.overtime_150_hours, Decimal::ZERO);
        assert_eq!(day.day_total, dec("693.75"));
    }

    #[test]
    fn test_eleven_hours_reaches_overtime_150() {
        let day = calculate("2025-01-14", &[("09:00", "20:00")]);
        assert_eq!(day.regular_hours, dec("8"));
        assert_eq!(day.overtime_125_hours, dec("2"));
        assert_eq!(day.overtime_150_hours, dec("1"));
        // 600 + 187.5 + 112.5
        assert_eq!(day.day_total, dec("900"));
    }

    #[test]
    fn test_tiers_are_cumulative_across_periods() {
        // 6h + 4h = 10h: 8 regular, 2 at 125%
        let day = calculate("2025-01-14", &[("06:00", "12:00"), ("13:00", "17:00")]);
        assert_eq!(day.regular_hours, dec("8"));
        assert_eq!(day.overtime_125_hours, dec("2"));
        assert_eq!(day.overtime_150_hours, Decimal::ZERO);
    }

    #[test]
    fn test_split_shift_under_threshold() {
        let day = calculate("2025-01-14", &[("09:00", "12:00"), ("13:00", "17:00")]);
        assert_eq!(day.regular_hours, dec("7"));
        assert_eq!(day.total_hours(), dec("7"));
    }

    #[test]
    fn test_friday_evening_triggers_full_day_premium() {
        let day = calculate("2025-01-17", &[("16:00", "02:00")]);
        assert!(day.weekend_premium_applied);
        assert_eq!(day.weekend_overlap_hours, dec("9"));
        assert_eq!(day.regular_hours, Decimal::ZERO);
        assert_eq!(day.overtime_125_hours, Decimal::ZERO);
        assert_eq!(day.overtime_150_hours, dec("10"));
        assert_eq!(day.day_total, dec("1125"));
    }

    #[test]
    fn test_premium_covers_periods_outside_window() {
        // Morning period is outside the window, evening one touches it
        let day = calculate("2025-01-17", &[("08:00", "12:00"), ("16:00", "18:00")]);
        assert!(day.weekend_premium_applied);
        assert_eq!(day.weekend_overlap_hours, dec("1"));
        assert_eq!(day.overtime_150_hours, dec("6"));
        assert_eq!(day.day_total, dec("675"));
    }

    #[test]
    fn test_friday_day_shift_ending_at_window_start_is_not_premium() {
        let day = calculate("2025-01-17", &[("09:00", "17:00")]);
        assert!(!day.weekend_premium_applied);
        assert_eq!(day.regular_hours, dec("8"));
        assert_eq!(day.day_total, dec("600"));
    }

    #[test]
    fn test_saturday_night_shift_is_premium() {
        let day = calculate("2025-01-18", &[("00:00", "06:00")]);
        assert!(day.weekend_premium_applied);
        assert_eq!(day.overtime_150_hours, dec("6"));
    }

    #[test]
    fn test_midnight_crossing_on_weekday() {
        let day = calculate("2025-01-14", &[("22:00", "02:00")]);
        assert_eq!(day.regular_hours, dec("4"));
        assert_eq!(day.day_total, dec("300"));
    }

    #[test]
    fn test_zero_period_day_is_all_zero() {
        let day = calculate("2025-01-14", &[]);
        assert_eq!(day, DaySalaryBreakdown::empty(make_date("2025-01-14")));
    }

    #[test]
    fn test_zero_duration_period_contributes_nothing() {
        let day = calculate("2025-01-14", &[("09:00", "09:00"), ("10:00", "12:00")]);
        assert_eq!(day.regular_hours, dec("2"));
        assert_eq!(day.day_total, dec("150"));
    }

    #[test]
    fn test_fractional_minutes() {
        let day = calculate("2025-01-14", &[("08:10", "18:40")]);
        // 10.5 hours: 8 regular, 2 at 125%, 0.5 at 150%
        assert_eq!(day.overtime_150_hours, dec("0.5"));
        assert_eq!(day.day_total, dec("843.75"));
    }

    #[test]
    fn test_raw_periods_and_sites_carried() {
        let date = make_date("2025-01-14");
        let mut attendance = DayAttendance::new(date);
        attendance.absorb(
            &AttendanceRecord::new(date)
                .with_period(" 9:00", "12:00 ")
                .with_site("Depot"),
        );

        let day = calculate_day_breakdown(&attendance, &PayrollConfig::default()).unwrap();
        assert_eq!(day.raw_periods, vec![(" 9:00".to_string(), "12:00 ".to_string())]);
        assert_eq!(day.sites, vec!["Depot".to_string()]);
    }

    #[test]
    fn test_malformed_time_fails_with_date() {
        let attendance = make_day("2025-01-14", &[("09:00", "12:00"), ("25:99", "17:00")]);
        let result = calculate_day_breakdown(&attendance, &PayrollConfig::default());

        match result {
            Err(CalculationError::InvalidPeriod { date, source }) => {
                assert_eq!(date, make_date("2025-01-14"));
                assert!(matches!(source, ParseError::HourOutOfRange { hour: 25, .. }));
            }
            other => panic!("Expected InvalidPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_override() {
        let config = PayrollConfig::default().with_regular_rate(dec("100"));
        let day = calculate_day_breakdown(&make_day("2025-01-14", &[("09:00", "18:00")]), &config)
            .unwrap();
        assert_eq!(day.day_total, dec("925"));
    }

    #[test]
    fn test_odd_minutes_priced_exactly() {
        // 181 + 180 + 121 = 482 minutes: 480 regular, 2 at 125%
        let day = calculate(
            "2025-01-14",
            &[("09:00", "12:01"), ("13:00", "16:00"), ("17:00", "19:01")],
        );
        assert_eq!(day.regular_hours, dec("8"));
        assert_eq!(day.total_hours(), minutes_to_hours(482));
        // 600 + 2 * 93.75 / 60
        assert_eq!(day.day_total, dec("603.125"));
    }

    #[test]
    fn test_many_short_periods_reach_exact_thresholds() {
        let periods: Vec<(String, String)> = (0..30)
            .map(|i| {
                let start = i * 40;
                let end = start + 20;
                (
                    format!("{:02}:{:02}", start / 60, start % 60),
                    format!("{:02}:{:02}", end / 60, end % 60),
                )
            })
            .collect();
        let borrowed: Vec<(&str, &str)> =
            periods.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();

        let day = calculate("2025-01-14", &borrowed);
        assert_eq!(day.regular_hours, dec("8"));
        assert_eq!(day.overtime_125_hours, dec("2"));
        assert_eq!(day.overtime_150_hours, Decimal::ZERO);
        assert_eq!(day.day_total, dec("787.5"));
    }

    #[test]
    fn test_last_representable_date() {
        let attendance = {
            let mut day = DayAttendance::new(NaiveDate::MAX);
            day.absorb(&AttendanceRecord::new(NaiveDate::MAX).with_period("09:00", "17:00"));
            day
        };

        let day = calculate_day_breakdown(&attendance, &PayrollConfig::default()).unwrap();
        assert_eq!(day.regular_hours, dec("8"));
        assert_eq!(day.day_total, dec("600"));
    }

    #[test]
    fn test_overnight_period_on_last_date_is_invariant_violation() {
        let mut attendance = DayAttendance::new(NaiveDate::MAX);
        attendance.absorb(&AttendanceRecord::new(NaiveDate::MAX).with_period("22:00", "02:00"));

        let result = calculate_day_breakdown(&attendance, &PayrollConfig::default());
        assert!(matches!(
            result,
            Err(CalculationError::InvariantViolation { date, .. }) if date == NaiveDate::MAX
        ));
    }
}

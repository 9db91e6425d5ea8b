//! Clock time parsing and period resolution.
//!
//! Attendance sources hand over times as loosely formatted "HH:MM" text.
//! This module turns that text into [`NaiveTime`] values and resolves
//! entry/exit pairs into [`WorkPeriod`]s.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::error::{CalculationError, ParseError};
use crate::models::WorkPeriod;

/// Parses an `H:MM` or `HH:MM` clock time.
///
/// Whitespace anywhere in the text is ignored, so `" 9 : 05 "` is accepted.
/// Each component must be one or two ASCII digits. Seconds, AM/PM markers
/// and out-of-range components are rejected.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::parse_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
/// assert_eq!(parse_time(" 7 :05 ").unwrap(), NaiveTime::from_hms_opt(7, 5, 0).unwrap());
/// assert!(parse_time("25:99").is_err());
/// assert!(parse_time("09:30:00").is_err());
/// ```
pub fn parse_time(text: &str) -> Result<NaiveTime, ParseError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let malformed = || ParseError::Malformed {
        input: text.to_string(),
    };

    let (hour_text, minute_text) = compact.split_once(':').ok_or_else(malformed)?;
    let hour = parse_component(hour_text).ok_or_else(malformed)?;
    let minute = parse_component(minute_text).ok_or_else(malformed)?;

    if hour > 23 {
        return Err(ParseError::HourOutOfRange {
            input: text.to_string(),
            hour,
        });
    }
    if minute > 59 {
        return Err(ParseError::MinuteOutOfRange {
            input: text.to_string(),
            minute,
        });
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

/// One or two ASCII digits; anything else (including a second ':') is rejected.
fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Parses an entry/exit pair and anchors it to `date`.
///
/// An exit earlier than the entry is taken to cross midnight.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidPeriod`] if either time fails to parse,
/// and [`CalculationError::InvariantViolation`] if the period would end past
/// the last representable date.
pub fn resolve_period(
    date: NaiveDate,
    entry: &str,
    exit: &str,
) -> Result<WorkPeriod, CalculationError> {
    let invalid = |source: ParseError| CalculationError::InvalidPeriod { date, source };
    let entry_time = parse_time(entry).map_err(invalid)?;
    let exit_time = parse_time(exit).map_err(invalid)?;

    WorkPeriod::resolve(date, entry_time, exit_time).ok_or_else(|| {
        CalculationError::InvariantViolation {
            date,
            message: format!("period {}-{} ends past the last representable date", entry, exit),
        }
    })
}

/// Returns the duration of an entry/exit pair in decimal hours.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::period_duration;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
/// assert_eq!(period_duration(date, "22:00", "02:00").unwrap(), Decimal::new(4, 0));
/// assert_eq!(period_duration(date, "09:00", "17:30").unwrap(), Decimal::new(85, 1));
/// ```
pub fn period_duration(
    date: NaiveDate,
    entry: &str,
    exit: &str,
) -> Result<Decimal, CalculationError> {
    Ok(resolve_period(date, entry, exit)?.hours())
}

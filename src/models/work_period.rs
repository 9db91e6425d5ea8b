//! Resolved work period model.
//!
//! This module defines [`WorkPeriod`], an entry/exit pair anchored to
//! absolute instants on a specific date.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// Converts a whole number of minutes to decimal hours.
pub(crate) fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// A single continuous span of work between two absolute instants.
///
/// Built with [`WorkPeriod::resolve`], which interprets an exit time earlier
/// than the entry time as crossing midnight. The end is never before the
/// start, and both ends fall on whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkPeriod {
    /// When work started.
    pub start: NaiveDateTime,
    /// When work ended.
    pub end: NaiveDateTime,
}

impl WorkPeriod {
    /// Anchors an entry/exit pair to `date`.
    ///
    /// An exit earlier than the entry lands on the following day. Identical
    /// times yield a zero-length period. Returns `None` when the following
    /// day is past the last representable date.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::WorkPeriod;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 1, 14).unwrap();
    /// let period = WorkPeriod::resolve(
    ///     date,
    ///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// assert!(period.crosses_midnight());
    /// assert_eq!(period.hours(), Decimal::new(4, 0));
    /// ```
    pub fn resolve(date: NaiveDate, entry: NaiveTime, exit: NaiveTime) -> Option<Self> {
        let start = date.and_time(entry);
        let mut end = date.and_time(exit);
        if end < start {
            end = end.checked_add_signed(Duration::days(1))?;
        }
        Some(Self { start, end })
    }

    /// Returns the length of the period.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Returns the length of the period in whole minutes.
    pub fn minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Returns the length of the period in decimal hours.
    pub fn hours(&self) -> Decimal {
        minutes_to_hours(self.minutes())
    }

    /// Returns true if the period ends on a later calendar day than it starts.
    pub fn crosses_midnight(&self) -> bool {
        self.end.date() > self.start.date()
    }
}

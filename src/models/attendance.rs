//! Attendance input models.
//!
//! This module defines [`AttendanceRecord`], one raw observation of work on
//! a calendar date as produced by the attendance source, and [`DayAttendance`],
//! the merged view of every record sharing a date.

use chrono::NaiveDate;

/// One entry/exit pair as "HH:MM" text, in the order it was recorded.
pub type RawPeriod = (String, String);

/// A raw observation of work on a given calendar date.
///
/// A day may carry zero, one or several periods (split shifts). The `site`
/// label is carried through to the report and plays no part in the
/// calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord::new(NaiveDate::from_ymd_opt(2025, 1, 14).unwrap())
///     .with_period("09:00", "12:30")
///     .with_period("13:00", "18:00")
///     .with_site("Warehouse");
///
/// assert_eq!(record.periods.len(), 2);
/// assert_eq!(record.site, "Warehouse");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    /// The calendar date the periods belong to.
    pub date: NaiveDate,
    /// Entry/exit pairs, chronological within the day.
    pub periods: Vec<RawPeriod>,
    /// Free-text work site label.
    pub site: String,
}

impl AttendanceRecord {
    /// Creates a record with no periods and an empty site.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            periods: Vec::new(),
            site: String::new(),
        }
    }

    /// Appends an entry/exit pair.
    pub fn with_period(mut self, entry: impl Into<String>, exit: impl Into<String>) -> Self {
        self.periods.push((entry.into(), exit.into()));
        self
    }

    /// Sets the site label.
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }
}

/// Every period recorded for one date, after merging duplicate records.
///
/// Periods keep the order of the records they came from, and within each
/// record their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAttendance {
    /// The calendar date.
    pub date: NaiveDate,
    /// Concatenated periods of every record for this date.
    pub periods: Vec<RawPeriod>,
    /// Distinct non-empty site labels, first-seen order.
    pub sites: Vec<String>,
}

impl DayAttendance {
    /// Creates an empty day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            periods: Vec::new(),
            sites: Vec::new(),
        }
    }

    /// Folds a record for the same date into this day.
    pub fn absorb(&mut self, record: &AttendanceRecord) {
        debug_assert_eq!(self.date, record.date);
        self.periods.extend(record.periods.iter().cloned());
        if !record.site.is_empty() && !self.sites.contains(&record.site) {
            self.sites.push(record.site.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = AttendanceRecord::new(make_date("2025-01-14"));
        assert!(record.periods.is_empty());
        assert!(record.site.is_empty());
    }

    #[test]
    fn test_builder_keeps_period_order() {
        let record = AttendanceRecord::new(make_date("2025-01-14"))
            .with_period("13:00", "17:00")
            .with_period("08:00", "12:00");

        assert_eq!(record.periods[0], ("13:00".to_string(), "17:00".to_string()));
        assert_eq!(record.periods[1], ("08:00".to_string(), "12:00".to_string()));
    }

    #[test]
    fn test_absorb_concatenates_periods_in_order() {
        let date = make_date("2025-01-14");
        let first = AttendanceRecord::new(date).with_period("08:00", "12:00");
        let second = AttendanceRecord::new(date)
            .with_period("13:00", "15:00")
            .with_period("16:00", "18:00");

        let mut day = DayAttendance::new(date);
        day.absorb(&first);
        day.absorb(&second);

        let entries: Vec<&str> = day.periods.iter().map(|(entry, _)| entry.as_str()).collect();
        assert_eq!(entries, vec!["08:00", "13:00", "16:00"]);
    }

    #[test]
    fn test_absorb_collects_distinct_sites() {
        let date = make_date("2025-01-14");
        let mut day = DayAttendance::new(date);
        day.absorb(&AttendanceRecord::new(date).with_site("North"));
        day.absorb(&AttendanceRecord::new(date).with_site("South"));
        day.absorb(&AttendanceRecord::new(date).with_site("North"));
        day.absorb(&AttendanceRecord::new(date));

        assert_eq!(day.sites, vec!["North".to_string(), "South".to_string()]);
    }
}

//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Time parsing failures are reported as [`ParseError`], failures while
//! building a specific day's breakdown as [`CalculationError`], and
//! everything else (configuration loading and validation) as
//! [`EngineError`].

use chrono::NaiveDate;
use thiserror::Error;

/// A clock time could not be parsed.
///
/// # Example
///
/// ```
/// use payroll_engine::error::ParseError;
///
/// let error = ParseError::HourOutOfRange {
///     input: "25:00".to_string(),
///     hour: 25,
/// };
/// assert_eq!(error.to_string(), "Hour out of range in '25:00': 25 (expected 0-23)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text does not have the `H:MM` / `HH:MM` shape.
    #[error("Malformed time '{input}': expected H:MM or HH:MM")]
    Malformed {
        /// The rejected text, as received.
        input: String,
    },

    /// The hour component is outside 0-23.
    #[error("Hour out of range in '{input}': {hour} (expected 0-23)")]
    HourOutOfRange {
        /// The rejected text, as received.
        input: String,
        /// The parsed hour.
        hour: u32,
    },

    /// The minute component is outside 0-59.
    #[error("Minute out of range in '{input}': {minute} (expected 0-59)")]
    MinuteOutOfRange {
        /// The rejected text, as received.
        input: String,
        /// The parsed minute.
        minute: u32,
    },
}

/// A day's breakdown could not be built.
///
/// Always carries the date being calculated so the caller can tell which
/// attendance record was at fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// A period on this date contained an unparsable time.
    #[error("Invalid period on {date}: {source}")]
    InvalidPeriod {
        /// The date whose period failed.
        date: NaiveDate,
        /// The underlying parse failure.
        #[source]
        source: ParseError,
    },

    /// A structural invariant did not hold (e.g. a negative duration).
    #[error("Invariant violated on {date}: {message}")]
    InvariantViolation {
        /// The date being calculated.
        date: NaiveDate,
        /// A description of the violated invariant.
        message: String,
    },
}

impl CalculationError {
    /// Returns the date the error was raised for.
    pub fn date(&self) -> NaiveDate {
        match self {
            CalculationError::InvalidPeriod { date, .. } => *date,
            CalculationError::InvariantViolation { date, .. } => *date,
        }
    }
}

/// The main error type for the payroll engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was rejected by validation.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why it was rejected.
        message: String,
    },

    /// A salary report could not be calculated.
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

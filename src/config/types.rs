//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every section has a
//! [`Default`] carrying the standard policy, so a YAML file only needs to
//! list the values it changes.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::calculation::parse_time;
use crate::error::{EngineError, EngineResult};

/// Hourly rates.
///
/// The overtime rates are multipliers of the regular rate, so changing
/// `regular` rescales every tier. An absolute `overtime_125` or
/// `overtime_150` rate replaces the multiplied rate for its tier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// Currency units per regular hour.
    pub regular: Decimal,
    /// Multiplier for hours in the overtime-125 tier.
    pub overtime_125_multiplier: Decimal,
    /// Multiplier for hours in the overtime-150 tier and weekend premium days.
    pub overtime_150_multiplier: Decimal,
    /// Absolute overtime-125 rate, used instead of the multiplier when set.
    pub overtime_125: Option<Decimal>,
    /// Absolute overtime-150 rate, used instead of the multiplier when set.
    pub overtime_150: Option<Decimal>,
}

impl RateConfig {
    /// The hourly rate of the overtime-125 tier.
    pub fn overtime_125_rate(&self) -> Decimal {
        self.overtime_125
            .unwrap_or(self.regular * self.overtime_125_multiplier)
    }

    /// The hourly rate of the overtime-150 tier.
    pub fn overtime_150_rate(&self) -> Decimal {
        self.overtime_150
            .unwrap_or(self.regular * self.overtime_150_multiplier)
    }
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            regular: Decimal::new(75, 0),
            overtime_125_multiplier: Decimal::new(125, 2),
            overtime_150_multiplier: Decimal::new(15, 1),
            overtime_125: None,
            overtime_150: None,
        }
    }
}

/// Cumulative daily hour thresholds separating the tiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Hours of a day billed at the regular rate.
    pub regular_hours: Decimal,
    /// Cumulative hour mark where the overtime-125 tier ends.
    pub overtime_125_hours: Decimal,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            regular_hours: Decimal::new(8, 0),
            overtime_125_hours: Decimal::new(10, 0),
        }
    }
}

/// The weekly window that triggers the weekend premium.
///
/// The window opens on `start_weekday` at `start_time` and closes on the
/// next `end_weekday` at `end_time`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WeekendWindowConfig {
    /// Weekday the window opens on.
    #[serde(deserialize_with = "de_weekday")]
    pub start_weekday: Weekday,
    /// Time of day the window opens.
    #[serde(deserialize_with = "de_clock_time")]
    pub start_time: NaiveTime,
    /// Weekday the window closes on.
    #[serde(deserialize_with = "de_weekday")]
    pub end_weekday: Weekday,
    /// Time of day the window closes (exclusive).
    #[serde(deserialize_with = "de_clock_time")]
    pub end_time: NaiveTime,
}

const DEFAULT_WINDOW_START: NaiveTime = clock(17, 0);
const DEFAULT_WINDOW_END: NaiveTime = clock(5, 0);

/// Builds a time of day in a const context; an invalid value fails the build.
const fn clock(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid clock time"),
    }
}

impl Default for WeekendWindowConfig {
    fn default() -> Self {
        Self {
            start_weekday: Weekday::Fri,
            start_time: DEFAULT_WINDOW_START,
            end_weekday: Weekday::Sat,
            end_time: DEFAULT_WINDOW_END,
        }
    }
}

/// The complete payroll configuration.
///
/// Injected into [`SalaryCalculator`](crate::calculation::SalaryCalculator)
/// at construction; the calculation never reads ambient state.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.rates.regular, Decimal::new(75, 0));
/// assert_eq!(config.thresholds.overtime_125_hours, Decimal::new(10, 0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Hourly rates.
    pub rates: RateConfig,
    /// Tier thresholds.
    pub thresholds: ThresholdConfig,
    /// Weekend premium window.
    pub weekend_window: WeekendWindowConfig,
}

impl PayrollConfig {
    /// Returns a copy of this configuration with a different regular rate.
    ///
    /// Absolute overtime rates, if set, are left as they are.
    pub fn with_regular_rate(mut self, rate: Decimal) -> Self {
        self.rates.regular = rate;
        self
    }

    /// Checks that the configuration describes a usable policy.
    ///
    /// Rejects non-positive rates (absolute overtime rates included),
    /// multipliers below 1, negative thresholds,
    /// a regular threshold above the overtime-125 threshold and a weekend
    /// window that opens and closes at the same instant.
    pub fn validate(&self) -> EngineResult<()> {
        if self.rates.regular <= Decimal::ZERO {
            return Err(invalid("rates.regular", "must be positive"));
        }
        if self.rates.overtime_125_multiplier < Decimal::ONE {
            return Err(invalid("rates.overtime_125_multiplier", "must be at least 1"));
        }
        if self.rates.overtime_150_multiplier < Decimal::ONE {
            return Err(invalid("rates.overtime_150_multiplier", "must be at least 1"));
        }
        for (field, rate) in [
            ("rates.overtime_125", self.rates.overtime_125),
            ("rates.overtime_150", self.rates.overtime_150),
        ] {
            if rate.is_some_and(|rate| rate <= Decimal::ZERO) {
                return Err(invalid(field, "must be positive"));
            }
        }
        if self.thresholds.regular_hours < Decimal::ZERO {
            return Err(invalid("thresholds.regular_hours", "must not be negative"));
        }
        if self.thresholds.overtime_125_hours < self.thresholds.regular_hours {
            return Err(invalid(
                "thresholds.overtime_125_hours",
                format!(
                    "must not be below regular_hours ({})",
                    self.thresholds.regular_hours.normalize()
                ),
            ));
        }
        let window = &self.weekend_window;
        if window.start_weekday == window.end_weekday && window.start_time == window.end_time {
            return Err(invalid("weekend_window", "window must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.into(),
    }
}

fn de_clock_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_time(&text).map_err(serde::de::Error::custom)
}

fn de_weekday<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    text.trim()
        .parse::<Weekday>()
        .map_err(|_| serde::de::Error::custom(format!("unknown weekday '{}'", text)))
}

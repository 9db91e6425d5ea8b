//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file and overlaying environment overrides.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::PayrollConfig;

/// Environment variable overriding the regular hourly rate.
pub const ENV_RATE_REGULAR: &str = "RATE_REGULAR";
/// Environment variable overriding the overtime-125 hourly rate (absolute value).
pub const ENV_RATE_125: &str = "RATE_125";
/// Environment variable overriding the overtime-150 hourly rate (absolute value).
pub const ENV_RATE_150: &str = "RATE_150";
/// Environment variable overriding the regular-hours threshold.
pub const ENV_REGULAR_LIMIT: &str = "REGULAR_LIMIT";
/// Environment variable overriding the overtime-125 threshold.
pub const ENV_LIMIT_125: &str = "LIMIT_125";

/// Loads and provides access to the payroll configuration.
///
/// # File Format
///
/// ```text
/// rates:
///   regular: "75"
///   overtime_125_multiplier: "1.25"
///   overtime_150_multiplier: "1.5"
///   overtime_125: "100"        # optional absolute rate
/// thresholds:
///   regular_hours: "8"
///   overtime_125_hours: "10"
/// weekend_window:
///   start_weekday: fri
///   start_time: "17:00"
///   end_weekday: sat
///   end_time: "05:00"
/// ```
///
/// Every section is optional; missing values take their defaults.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Regular rate: {}", loader.config().rates.regular);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: PayrollConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or invalid values
    /// - The resulting configuration fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: PayrollConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        config.validate()?;
        info!(path = %path_str, "Loaded payroll configuration");

        Ok(Self { config })
    }

    /// Loads the file at `path` if it exists, otherwise starts from defaults,
    /// then applies overrides from the process environment.
    pub fn from_env<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let loader = if path.exists() {
            Self::load(path)?
        } else {
            info!(path = %path.display(), "Configuration file absent, using defaults");
            Self::default()
        };
        loader.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Overlays overrides returned by `lookup` for the known keys.
    ///
    /// `RATE_125` and `RATE_150` are absolute hourly rates and are stored as
    /// given, independent of the regular rate.
    pub fn apply_overrides<F>(mut self, lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| -> EngineResult<Option<Decimal>> {
            match lookup(key) {
                Some(raw) => Decimal::from_str(raw.trim())
                    .map(Some)
                    .map_err(|e| EngineError::InvalidConfig {
                        field: key.to_string(),
                        message: format!("'{}' is not a number: {}", raw, e),
                    }),
                None => Ok(None),
            }
        };

        if let Some(rate) = read(ENV_RATE_REGULAR)? {
            debug!(key = ENV_RATE_REGULAR, value = %rate, "Applying override");
            self.config.rates.regular = rate;
        }
        if let Some(limit) = read(ENV_REGULAR_LIMIT)? {
            debug!(key = ENV_REGULAR_LIMIT, value = %limit, "Applying override");
            self.config.thresholds.regular_hours = limit;
        }
        if let Some(limit) = read(ENV_LIMIT_125)? {
            debug!(key = ENV_LIMIT_125, value = %limit, "Applying override");
            self.config.thresholds.overtime_125_hours = limit;
        }
        if let Some(rate) = read(ENV_RATE_125)? {
            debug!(key = ENV_RATE_125, value = %rate, "Applying override");
            self.config.rates.overtime_125 = Some(rate);
        }
        if let Some(rate) = read(ENV_RATE_150)? {
            debug!(key = ENV_RATE_150, value = %rate, "Applying override");
            self.config.rates.overtime_150 = Some(rate);
        }

        self.config.validate()?;
        Ok(self)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}

//! Configuration loading and management for the payroll engine.
//!
//! This module provides the [`PayrollConfig`] value (rates, tier thresholds
//! and the weekend premium window) and the [`ConfigLoader`] that reads it
//! from YAML and overlays environment overrides.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Regular rate: {}", loader.config().rates.regular);
//! ```

mod loader;
mod types;

pub use loader::{
    ConfigLoader, ENV_LIMIT_125, ENV_RATE_125, ENV_RATE_150, ENV_RATE_REGULAR, ENV_REGULAR_LIMIT,
};
pub use types::{PayrollConfig, RateConfig, ThresholdConfig, WeekendWindowConfig};

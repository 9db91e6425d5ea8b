//! Application state for the payroll engine API.

use std::sync::Arc;

use crate::calculation::SalaryCalculator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the salary calculator built from the loaded configuration; every
/// request handler shares the same instance.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<SalaryCalculator>,
}

impl AppState {
    /// Creates application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self::from_calculator(SalaryCalculator::new(config.into_config()))
    }

    /// Creates application state around an existing calculator.
    pub fn from_calculator(calculator: SalaryCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }

    /// Returns the shared calculator.
    pub fn calculator(&self) -> &SalaryCalculator {
        &self.calculator
    }
}

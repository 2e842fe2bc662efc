//! Application state for the parking tariff API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::ParkingCalculator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the calculator built from the loaded tariff configuration.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<ParkingCalculator>,
}

impl AppState {
    /// Creates a new application state from a configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            calculator: Arc::new(ParkingCalculator::new(config.config().clone())),
        }
    }

    /// Returns the shared calculator.
    pub fn calculator(&self) -> &ParkingCalculator {
        &self.calculator
    }
}

//! Configuration loading and management for the parking tariff engine.
//!
//! Tariffs are immutable values handed to the calculation functions. They
//! come either from the built-in defaults or from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use parking_tariff::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Short stay rate: {}", config.short_stay().rate_per_hour);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, TARIFFS_FILE};
pub use types::{
    BillingWindow, BillingWindowHours, LongStayTariff, SHORT_STAY_BILLING_END_HOUR,
    SHORT_STAY_BILLING_START_HOUR, ShortStayTariff, TariffConfig,
};

//! Error types for the parking tariff engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine can report. The tariff calculations
//! themselves never fail; errors come from configuration loading and from
//! the boundary where stays are constructed.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the parking tariff engine.
///
/// # Example
///
/// ```
/// use parking_tariff::error::TariffError;
///
/// let error = TariffError::ConfigNotFound {
///     path: "/missing/tariffs.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tariffs.yaml");
/// ```
#[derive(Debug, Error)]
pub enum TariffError {
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

    /// A tariff was parsed but holds values the engine cannot bill with.
    #[error("Invalid tariff: {message}")]
    InvalidTariff {
        /// A description of what made the tariff invalid.
        message: String,
    },

    /// A stay ends before it starts.
    #[error("Invalid stay: end {end} is before start {start}")]
    InvalidStay {
        /// The start of the rejected stay.
        start: NaiveDateTime,
        /// The end of the rejected stay.
        end: NaiveDateTime,
    },

    /// A tariff name did not match any known tariff.
    #[error("Unknown tariff: {name}")]
    UnknownTariff {
        /// The name that was not recognised.
        name: String,
    },
}

/// A type alias for Results that return TariffError.
pub type TariffResult<T> = Result<T, TariffError>;

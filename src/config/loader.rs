//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tariff
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{TariffError, TariffResult};

use super::types::{LongStayTariff, ShortStayTariff, TariffConfig};

/// The file name read from a configuration directory.
pub const TARIFFS_FILE: &str = "tariffs.yaml";

/// Loads and provides access to tariff configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── tariffs.yaml   # Long stay and short stay tariffs
/// ```
///
/// # Example
///
/// ```no_run
/// use parking_tariff::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Long stay rate: {}", loader.long_stay().rate_per_day);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: TariffConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `tariffs.yaml` is missing, is not valid YAML,
    /// or describes a tariff that fails validation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use parking_tariff::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), parking_tariff::error::TariffError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> TariffResult<Self> {
        let tariffs_path = path.as_ref().join(TARIFFS_FILE);
        let path_str = tariffs_path.display().to_string();

        let content = fs::read_to_string(&tariffs_path).map_err(|_| {
            TariffError::ConfigNotFound {
                path: path_str.clone(),
            }
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        debug!(path = %path_str, "Loaded tariff configuration");
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    ///
    /// `source` names the origin of the text in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use parking_tariff::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let yaml = "long_stay:\n  rate_per_day: 900\n";
    /// let loader = ConfigLoader::from_yaml_str(yaml, "inline").unwrap();
    /// assert_eq!(loader.long_stay().rate_per_day, Decimal::from(900));
    /// // Omitted sections fall back to the standard tariff
    /// assert_eq!(loader.short_stay().rate_per_hour, Decimal::from(110));
    /// ```
    pub fn from_yaml_str(content: &str, source: &str) -> TariffResult<Self> {
        let config: TariffConfig =
            serde_yaml::from_str(content).map_err(|e| TariffError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: TariffConfig) -> TariffResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the full tariff configuration.
    pub fn config(&self) -> &TariffConfig {
        &self.config
    }

    /// Returns the long stay tariff.
    pub fn long_stay(&self) -> &LongStayTariff {
        &self.config.long_stay
    }

    /// Returns the short stay tariff.
    pub fn short_stay(&self) -> &ShortStayTariff {
        &self.config.short_stay
    }
}

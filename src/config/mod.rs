//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ENADE_DASHBOARD` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use enade_dashboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading data from {:?}", config.data_source.kind);
//! ```

mod data_source;
mod error;
mod features;
mod logging;

pub use data_source::{DataSourceConfig, DataSourceKind};
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::LoggingConfig;

use serde::Deserialize;

use crate::application::CoordinatorOptions;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a config that
/// reads `./data` from disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where the JSON dataset lives (http or file)
    #[serde(default)]
    pub data_source: DataSourceConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ENADE_DASHBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ENADE_DASHBOARD__DATA_SOURCE__KIND=http` -> `data_source.kind = http`
    /// - `ENADE_DASHBOARD__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ENADE_DASHBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.data_source.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Coordinator switches derived from the feature flags
    pub fn coordinator_options(&self) -> CoordinatorOptions {
        CoordinatorOptions {
            partial_data_notice: self.features.partial_data_notice,
        }
    }
}

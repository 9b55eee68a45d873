//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `NUTRI_INTAKE_` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use nutri_intake::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Sessions stored under {}", config.storage.data_dir.display());
//! ```

mod engine;
mod error;

pub use engine::{StorageConfig, SubmissionConfig};
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Storage configuration (session files on disk)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Submission configuration (indicator timing)
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Log filter directive (e.g., "info" or "nutri_intake=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            submission: SubmissionConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `NUTRI_INTAKE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `NUTRI_INTAKE__STORAGE__DATA_DIR=/var/lib/intake` -> `storage.data_dir`
    /// - `NUTRI_INTAKE__SUBMISSION__MIN_INDICATOR_MILLIS=900` -> `submission.min_indicator_millis`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NUTRI_INTAKE")
                    .separator("__"),
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
        self.storage.validate()?;
        self.submission.validate()?;
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("log_level"));
        }
        Ok(())
    }
}

//! Storage and submission configuration sections

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Session storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON document per session
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".nutri-intake/sessions")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_dir"));
        }
        Ok(())
    }
}

/// Submission feedback configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    /// Minimum time the submission indicator stays visible, in milliseconds
    #[serde(default = "default_min_indicator_millis")]
    pub min_indicator_millis: u64,
}

fn default_min_indicator_millis() -> u64 {
    600
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            min_indicator_millis: default_min_indicator_millis(),
        }
    }
}

impl SubmissionConfig {
    /// The indicator window as a [`Duration`].
    pub fn min_indicator_window(&self) -> Duration {
        Duration::from_millis(self.min_indicator_millis)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        // An indicator pinned up for minutes is a misconfiguration
        if self.min_indicator_millis > 60_000 {
            return Err(ValidationError::IndicatorWindowTooLong);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(StorageConfig::default().validate().is_ok());
        assert!(SubmissionConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_data_dir_is_rejected() {
        let config = StorageConfig {
            data_dir: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn indicator_window_converts_to_duration() {
        let config = SubmissionConfig {
            min_indicator_millis: 250,
        };
        assert_eq!(config.min_indicator_window(), Duration::from_millis(250));
    }

    #[test]
    fn excessive_indicator_window_is_rejected() {
        let config = SubmissionConfig {
            min_indicator_millis: 120_000,
        };
        assert!(config.validate().is_err());
    }
}

//! Environment-driven configuration.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const POLL_INTERVAL_ENV: &str = "LEXDOC_POLL_INTERVAL_SECS";
pub const NOTIFICATION_CACHE_ENV: &str = "LEXDOC_NOTIFICATION_CACHE";

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Settings for an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// How often notifications are polled. Never zero.
    pub poll_interval: Duration,
    /// Offline copy of the notification list, if any.
    pub cache_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            cache_path: None,
        }
    }
}

impl SessionConfig {
    /// Reads `LEXDOC_POLL_INTERVAL_SECS` and `LEXDOC_NOTIFICATION_CACHE`.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(POLL_INTERVAL_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&s| s > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: POLL_INTERVAL_ENV,
                    value: raw.clone(),
                })?;
            config.poll_interval = Duration::from_secs(secs);
        }

        config.cache_path = std::env::var_os(NOTIFICATION_CACHE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

//! Application configuration and its process-wide manager.
//!
//! [`Config`] is an immutable record. [`ConfigurationManager`] holds the
//! current configuration and lets callers swap it atomically. Code that needs
//! configuration should take a `&ConfigurationManager`; the process-wide
//! instance from [`ConfigurationManager::global`] exists for call sites with
//! no injection point.

use std::env;
use std::sync::{Arc, OnceLock};

use design_patterns_derive::Withers;
use parking_lot::RwLock;
use thiserror::Error;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "PATTERNS_API_KEY";
/// Environment variable holding the database URL.
pub const DB_URL_VAR: &str = "PATTERNS_DB_URL";
/// Environment variable holding the timeout in seconds.
pub const TIMEOUT_VAR: &str = "PATTERNS_TIMEOUT";

/// Configuration loading error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Immutable configuration record.
///
/// # Examples
///
/// ```
/// use design_patterns::singleton::Config;
///
/// let config = Config::default();
/// assert_eq!(config.api_key(), "api-key-123");
///
/// let rotated = config.with_api_key("api-key-456".to_string());
/// assert_eq!(rotated.db_url(), config.db_url());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Withers)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    api_key: String,
    db_url: String,
    timeout: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new("api-key-123", "jdbc:postgresql://localhost", 30)
    }
}

impl Config {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub fn new(api_key: impl Into<String>, db_url: impl Into<String>, timeout: u32) -> Self {
        Self {
            api_key: api_key.into(),
            db_url: db_url.into(),
            timeout,
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Unset variables fall back to [`Config::default`].
    ///
    /// # Environment Variables
    ///
    /// - `PATTERNS_API_KEY` (default: `api-key-123`)
    /// - `PATTERNS_DB_URL` (default: `jdbc:postgresql://localhost`)
    /// - `PATTERNS_TIMEOUT` (default: `30`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `PATTERNS_TIMEOUT` is not a
    /// non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the timeout cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use design_patterns::singleton::Config;
    ///
    /// let config = Config::from_lookup(|key| (key == "PATTERNS_TIMEOUT").then(|| "5".to_string()))
    ///     .unwrap();
    /// assert_eq!(config.timeout(), 5);
    /// assert_eq!(config.api_key(), "api-key-123");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let api_key = lookup(API_KEY_VAR).unwrap_or(defaults.api_key);
        let db_url = lookup(DB_URL_VAR).unwrap_or(defaults.db_url);
        let timeout = lookup(TIMEOUT_VAR).map_or(Ok(defaults.timeout), |value| {
            value.trim().parse().map_err(|error: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: TIMEOUT_VAR.to_string(),
                    message: error.to_string(),
                }
            })
        })?;

        Ok(Self {
            api_key,
            db_url,
            timeout,
        })
    }

    /// API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Database connection URL.
    #[must_use]
    pub fn db_url(&self) -> &str {
        &self.db_url
    }

    /// Timeout in seconds.
    #[must_use]
    pub const fn timeout(&self) -> u32 {
        self.timeout
    }
}

/// Holder of the current [`Config`].
///
/// Readers get an `Arc` snapshot; an update replaces the stored `Arc`
/// without affecting snapshots already handed out.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use design_patterns::singleton::{Config, ConfigurationManager};
///
/// let manager = ConfigurationManager::new(Config::default());
/// let replacement = Arc::new(manager.config().with_api_key("api-key-xyz".to_string()));
///
/// manager.update_config(Arc::clone(&replacement));
/// assert!(Arc::ptr_eq(&manager.config(), &replacement));
/// ```
#[derive(Debug)]
pub struct ConfigurationManager {
    config: RwLock<Arc<Config>>,
}

static GLOBAL_MANAGER: OnceLock<ConfigurationManager> = OnceLock::new();

impl ConfigurationManager {
    /// Creates a manager holding `config`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(Arc::new(config)),
        }
    }

    /// Returns the process-wide manager, creating it on first access.
    ///
    /// The first call loads [`Config::from_env`]; if that fails the defaults
    /// are used and a warning is logged.
    pub fn global() -> &'static Self {
        GLOBAL_MANAGER.get_or_init(|| {
            let config = Config::from_env().unwrap_or_else(|error| {
                tracing::warn!(%error, "failed to load configuration from environment, using defaults");
                Config::default()
            });
            tracing::info!(db_url = config.db_url(), timeout = config.timeout(), "configuration manager initialized");
            Self::new(config)
        })
    }

    /// Snapshot of the current configuration.
    #[must_use]
    pub fn config(&self) -> Arc<Config> {
        Arc::clone(&self.config.read())
    }

    /// Replaces the current configuration with `config`.
    ///
    /// Subsequent [`config`](Self::config) calls return this very `Arc`.
    pub fn update_config(&self, config: impl Into<Arc<Config>>) {
        let config = config.into();
        tracing::info!(db_url = config.db_url(), timeout = config.timeout(), "configuration updated");
        *self.config.write() = config;
    }
}

impl Default for ConfigurationManager {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

static_assertions::assert_impl_all!(ConfigurationManager: Send, Sync);
static_assertions::assert_impl_all!(Config: Send, Sync);

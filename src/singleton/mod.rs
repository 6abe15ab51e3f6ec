//! Singleton pattern: one shared instance, initialised on first access.
//!
//! Both singletons live behind a `static` [`std::sync::OnceLock`], so the
//! instance is created exactly once even under concurrent first access and is
//! never torn down. Each type can also be constructed explicitly so that code
//! under test receives its instance by injection instead of reaching for the
//! global.

mod config;
mod pool;

pub use config::{
    API_KEY_VAR, Config, ConfigError, ConfigurationManager, DB_URL_VAR, TIMEOUT_VAR,
};
pub use pool::{DatabaseConnectionPool, INITIALIZED_MESSAGE, MAX_CONNECTIONS};

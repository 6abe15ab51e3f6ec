//! Process-wide database connection pool.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::output::MessageSink;

/// Connection limit of the pool.
pub const MAX_CONNECTIONS: usize = 10;

/// Console line written when a pool is created through [`DatabaseConnectionPool::initialize`].
pub const INITIALIZED_MESSAGE: &str = "Database pool initialized";

/// Simulated connection pool.
///
/// Use [`DatabaseConnectionPool::instance`] for the shared pool, or
/// [`DatabaseConnectionPool::new`] to inject a private one.
///
/// # Examples
///
/// ```
/// use design_patterns::singleton::DatabaseConnectionPool;
///
/// let pool = DatabaseConnectionPool::instance();
/// assert!(std::ptr::eq(pool, DatabaseConnectionPool::instance()));
/// assert_eq!(pool.max_connections(), 10);
/// ```
#[derive(Debug)]
pub struct DatabaseConnectionPool {
    max_connections: usize,
    next_connection: AtomicU64,
}

static POOL: OnceLock<DatabaseConnectionPool> = OnceLock::new();

impl DatabaseConnectionPool {
    /// Creates a standalone pool.
    #[must_use]
    pub fn new() -> Self {
        tracing::info!(max_connections = MAX_CONNECTIONS, "Database pool initialized");
        Self {
            max_connections: MAX_CONNECTIONS,
            next_connection: AtomicU64::new(1),
        }
    }

    /// Creates a standalone pool and announces it on `sink`.
    #[must_use]
    pub fn initialize(sink: &dyn MessageSink) -> Self {
        let pool = Self::new();
        sink.emit(INITIALIZED_MESSAGE);
        pool
    }

    /// Returns the shared pool; the first call initialises it.
    pub fn instance() -> &'static Self {
        POOL.get_or_init(Self::new)
    }

    /// Returns the shared pool, announcing it on `sink` only if this call
    /// created it.
    pub fn get_or_initialize(sink: &dyn MessageSink) -> &'static Self {
        POOL.get_or_init(|| Self::initialize(sink))
    }

    /// Connection limit.
    #[must_use]
    pub const fn max_connections(&self) -> usize {
        self.max_connections
    }

    /// Hands out a connection id, unique within this pool.
    pub fn acquire_connection(&self) -> String {
        let sequence = self.next_connection.fetch_add(1, Ordering::Relaxed);
        format!("conn-{sequence}")
    }
}

impl Default for DatabaseConnectionPool {
    fn default() -> Self {
        Self::new()
    }
}

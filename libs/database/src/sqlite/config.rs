use sea_orm::ConnectOptions;
use std::time::Duration;

#[cfg(feature = "config")]
use core_config::{env_or_default, env_parse_or, ConfigError, FromEnv};

/// Database file used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://tasks.db?mode=rwc";

/// SQLite connection configuration
///
/// ```ignore
/// use database::sqlite::SqliteConfig;
///
/// let config = SqliteConfig::new("sqlite://tasks.db?mode=rwc");
/// let options = config.into_connect_options();
/// ```
#[derive(Clone, Debug)]
pub struct SqliteConfig {
    /// Database connection URL, e.g. `sqlite://tasks.db?mode=rwc` or `sqlite::memory:`
    pub url: String,

    /// Maximum number of pooled connections
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Log every statement through sqlx
    pub sqlx_logging: bool,
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Whether the URL points at a private in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Convert this config into SeaORM ConnectOptions.
    ///
    /// An in-memory database lives and dies with its connection, so the pool
    /// is pinned to exactly one.
    pub fn into_connect_options(self) -> ConnectOptions {
        let in_memory = self.is_in_memory();
        let mut opt = ConnectOptions::new(&self.url);
        opt.acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .sqlx_logging(self.sqlx_logging);

        if in_memory {
            opt.max_connections(1).min_connections(1);
        } else {
            opt.max_connections(self.max_connections);
        }
        opt
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            acquire_timeout_secs: 8,
            sqlx_logging: false,
        }
    }
}

/// Load SqliteConfig from environment variables
///
/// - `DATABASE_URL` (optional, default: [`DEFAULT_DATABASE_URL`])
/// - `DB_MAX_CONNECTIONS` (optional, default: 5)
/// - `DB_ACQUIRE_TIMEOUT_SECS` (optional, default: 8)
/// - `DB_SQLX_LOGGING` (optional, default: false)
#[cfg(feature = "config")]
impl FromEnv for SqliteConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            url: env_or_default("DATABASE_URL", DEFAULT_DATABASE_URL),
            max_connections: env_parse_or("DB_MAX_CONNECTIONS", defaults.max_connections)?,
            acquire_timeout_secs: env_parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            )?,
            sqlx_logging: env_parse_or("DB_SQLX_LOGGING", defaults.sqlx_logging)?,
        })
    }
}

//! Configuration Module
//!
//! Loads connection settings for Postgres, Redis and the HTTP server from
//! environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres role name
    pub postgres_user: String,
    /// Postgres role password
    pub postgres_password: String,
    /// Postgres host
    pub postgres_server: String,
    /// Postgres port
    pub postgres_port: u16,
    /// Postgres database name
    pub postgres_db: String,
    /// Redis host
    pub redis_host: String,
    /// Redis port
    pub redis_port: u16,
    /// HTTP server port
    pub server_port: u16,
    /// Upper bound of the Postgres connection pool
    pub db_max_connections: u32,
    /// Upper bound of the Redis connection pool
    pub redis_pool_size: usize,
    /// Directory for the daily rotated log file; stdout only when unset
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POSTGRES_USER` (default: postgres)
    /// - `POSTGRES_PASSWORD` (default: postgres)
    /// - `POSTGRES_SERVER` (default: localhost)
    /// - `POSTGRES_PORT` (default: 5432)
    /// - `POSTGRES_DB` (default: postgres)
    /// - `REDIS_HOST` (default: localhost)
    /// - `REDIS_PORT` (default: 6379)
    /// - `SERVER_PORT` (default: 8000)
    /// - `DB_MAX_CONNECTIONS` (default: 10)
    /// - `REDIS_POOL_SIZE` (default: 16)
    /// - `LOG_DIR` (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            postgres_user: string_var("POSTGRES_USER", defaults.postgres_user),
            postgres_password: string_var("POSTGRES_PASSWORD", defaults.postgres_password),
            postgres_server: string_var("POSTGRES_SERVER", defaults.postgres_server),
            postgres_port: parsed_var("POSTGRES_PORT", defaults.postgres_port),
            postgres_db: string_var("POSTGRES_DB", defaults.postgres_db),
            redis_host: string_var("REDIS_HOST", defaults.redis_host),
            redis_port: parsed_var("REDIS_PORT", defaults.redis_port),
            server_port: parsed_var("SERVER_PORT", defaults.server_port),
            db_max_connections: parsed_var("DB_MAX_CONNECTIONS", defaults.db_max_connections),
            redis_pool_size: parsed_var("REDIS_POOL_SIZE", defaults.redis_pool_size),
            log_dir: env::var("LOG_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Postgres connection URL.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_server,
            self.postgres_port,
            self.postgres_db
        )
    }

    /// Postgres connection URL with the password masked, safe for logs.
    pub fn redacted_database_url(&self) -> String {
        format!(
            "postgres://{}:***@{}:{}/{}",
            self.postgres_user, self.postgres_server, self.postgres_port, self.postgres_db
        )
    }

    /// Redis connection URL.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}", self.redis_host, self.redis_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            postgres_user: "postgres".to_string(),
            postgres_password: "postgres".to_string(),
            postgres_server: "localhost".to_string(),
            postgres_port: 5432,
            postgres_db: "postgres".to_string(),
            redis_host: "localhost".to_string(),
            redis_port: 6379,
            server_port: 8000,
            db_max_connections: 10,
            redis_pool_size: 16,
            log_dir: None,
        }
    }
}

fn string_var(name: &str, default: String) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

fn parsed_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

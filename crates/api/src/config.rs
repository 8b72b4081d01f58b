use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (default: "sqlite://todo.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub database_url: String,
    /// Maximum number of pooled database connections (default: 5)
    #[allow(dead_code)]
    pub database_max_connections: u32,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - SQLite connection URL (default: "sqlite://todo.db")
    /// - `DATABASE_MAX_CONNECTIONS` - Pool size (default: 5)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://todo.db".to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(5),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            request_timeout_seconds: 30,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_and_invalid_values() {
        env::remove_var("DATABASE_URL");
        env::remove_var("REQUEST_TIMEOUT_SECONDS");
        env::set_var("DATABASE_MAX_CONNECTIONS", "not-a-number");

        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite://todo.db");
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.request_timeout_seconds, 10);

        env::set_var("DATABASE_MAX_CONNECTIONS", "0");
        assert_eq!(Config::from_env().database_max_connections, 5);

        env::remove_var("DATABASE_MAX_CONNECTIONS");
    }
}

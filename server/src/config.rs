//! Configuration management for the server.

use std::env;
use std::time::Duration;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// SQLite connection URL, e.g. `sqlite://guestbook.db`
    pub database_url: String,
    /// Upper bound on waiting for the database before an operation fails
    pub store_timeout: Duration,
    /// Largest accepted request body; guests carry ID images inline
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: "sqlite://guestbook.db".to_string(),
            store_timeout: Duration::from_secs(30),
            max_body_bytes: 16 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort)?,
            None => defaults.port,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let store_timeout = match lookup("STORE_TIMEOUT_SECS") {
            Some(value) => value
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::InvalidStoreTimeout)?,
            None => defaults.store_timeout,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidBodyLimit)?,
            None => defaults.max_body_bytes,
        };

        Ok(Self {
            host,
            port,
            database_url,
            store_timeout,
            max_body_bytes,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("STORE_TIMEOUT_SECS must be a positive number of seconds")]
    InvalidStoreTimeout,

    #[error("Invalid MAX_BODY_BYTES value")]
    InvalidBodyLimit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url, "sqlite://guestbook.db");
        assert_eq!(config.store_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite:///var/lib/guestbook/guests.db"),
            ("STORE_TIMEOUT_SECS", "5"),
            ("MAX_BODY_BYTES", "1024"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite:///var/lib/guestbook/guests.db");
        assert_eq!(config.store_timeout, Duration::from_secs(5));
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("PORT", "http")])),
            Err(ConfigError::InvalidPort)
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("STORE_TIMEOUT_SECS", "0")])),
            Err(ConfigError::InvalidStoreTimeout)
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("MAX_BODY_BYTES", "-1")])),
            Err(ConfigError::InvalidBodyLimit)
        ));
    }
}

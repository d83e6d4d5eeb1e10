//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Redis hostname
    pub redis_host: String,
    /// Redis port
    pub redis_port: u16,
    /// Write the demonstration key right after connecting
    pub seed_on_startup: bool,
    /// Upper bound on a single cache read made by the root handler
    pub request_timeout: Duration,
    /// Upper bound on the initial Redis connection attempt
    pub connect_timeout: Duration,
    /// Retry period for a failed startup connection; `None` disables retries
    pub reconnect_interval: Option<Duration>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `REDIS_HOST` - Redis hostname (default: localhost)
    /// - `REDIS_PORT` - Redis port (default: 6379)
    /// - `SEED_DEMO_KEY` - Seed the demo key at startup (default: true)
    /// - `REQUEST_TIMEOUT_MS` - Cache read timeout in milliseconds (default: 5000)
    /// - `REDIS_CONNECT_TIMEOUT_MS` - Connect timeout in milliseconds (default: 5000)
    /// - `REDIS_RECONNECT_INTERVAL` - Reconnect period in seconds, 0 disables (default: unset)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from an arbitrary key lookup.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());

        Self {
            server_port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.server_port),
            redis_host: lookup("REDIS_HOST")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.redis_host),
            redis_port: lookup("REDIS_PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.redis_port),
            seed_on_startup: lookup("SEED_DEMO_KEY")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_on_startup),
            request_timeout: parsed("REQUEST_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
            connect_timeout: parsed("REDIS_CONNECT_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.connect_timeout),
            reconnect_interval: parsed("REDIS_RECONNECT_INTERVAL")
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }

    /// Connection URL for the configured Redis server.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}", self.redis_host, self.redis_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            redis_host: "localhost".to_string(),
            redis_port: 6379,
            seed_on_startup: true,
            request_timeout: Duration::from_millis(5000),
            connect_timeout: Duration::from_millis(5000),
            reconnect_interval: None,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.redis_host, "localhost");
        assert_eq!(config.redis_port, 6379);
        assert!(config.seed_on_startup);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.reconnect_interval, None);
    }

    #[test]
    fn test_config_empty_lookup_matches_default() {
        assert_eq!(config_with(&[]), Config::default());
    }

    #[test]
    fn test_port_override() {
        let config = config_with(&[("PORT", "8080")]);
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_redis_target_override() {
        let config = config_with(&[("REDIS_HOST", "cache.internal"), ("REDIS_PORT", "6380")]);
        assert_eq!(config.redis_host, "cache.internal");
        assert_eq!(config.redis_port, 6380);
        assert_eq!(config.redis_url(), "redis://cache.internal:6380");
    }

    #[test]
    fn test_default_redis_url() {
        assert_eq!(Config::default().redis_url(), "redis://localhost:6379");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_with(&[
            ("PORT", "not-a-port"),
            ("REDIS_PORT", "70000"),
            ("REDIS_HOST", "   "),
            ("SEED_DEMO_KEY", "maybe"),
        ]);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.redis_port, 6379);
        assert_eq!(config.redis_host, "localhost");
        assert!(config.seed_on_startup);
    }

    #[test]
    fn test_seed_flag_parsing() {
        assert!(!config_with(&[("SEED_DEMO_KEY", "false")]).seed_on_startup);
        assert!(!config_with(&[("SEED_DEMO_KEY", "0")]).seed_on_startup);
        assert!(config_with(&[("SEED_DEMO_KEY", "YES")]).seed_on_startup);
    }

    #[test]
    fn test_timeouts_and_reconnect() {
        let config = config_with(&[
            ("REQUEST_TIMEOUT_MS", "250"),
            ("REDIS_CONNECT_TIMEOUT_MS", "100"),
            ("REDIS_RECONNECT_INTERVAL", "3"),
        ]);
        assert_eq!(config.request_timeout, Duration::from_millis(250));
        assert_eq!(config.connect_timeout, Duration::from_millis(100));
        assert_eq!(config.reconnect_interval, Some(Duration::from_secs(3)));

        let disabled = config_with(&[("REDIS_RECONNECT_INTERVAL", "0")]);
        assert_eq!(disabled.reconnect_interval, None);
    }
}

//! Configuration management for the Scope Builder MCP Server.
//!
//! Configuration is loaded once from environment variables at process start
//! and injected into the client afterwards. Nothing else in the crate reads
//! the environment.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default JobNimbus REST API base URL.
pub const DEFAULT_JOBNIMBUS_API_URL: &str = "https://app.jobnimbus.com/api1";

/// Configuration for the Scope Builder MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// JobNimbus API base URL
    pub jobnimbus_api_url: String,

    /// JobNimbus API key (bearer credential).
    /// Optional at startup; customer search fails with a configuration error without it.
    pub jobnimbus_api_key: Option<String>,

    /// Number of contacts requested per search strategy (default: 20)
    pub search_page_size: usize,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `JOBNIMBUS_API_KEY`: Bearer credential for the JobNimbus API
    /// - `JOBNIMBUS_API_URL`: Base URL (default: `https://app.jobnimbus.com/api1`)
    /// - `JOBNIMBUS_SEARCH_PAGE_SIZE`: Contacts per search strategy (default: 20)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; dotenvy does not print to stdout
        let _ = dotenvy::dotenv();

        let jobnimbus_api_url = env::var("JOBNIMBUS_API_URL")
            .unwrap_or_else(|_| DEFAULT_JOBNIMBUS_API_URL.to_string());

        if !jobnimbus_api_url.starts_with("http://") && !jobnimbus_api_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                var: "JOBNIMBUS_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        // A blank key is treated the same as a missing one
        let jobnimbus_api_key = env::var("JOBNIMBUS_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let search_page_size = Self::parse_env_usize("JOBNIMBUS_SEARCH_PAGE_SIZE", 20)?;
        if search_page_size == 0 || search_page_size > 1000 {
            return Err(ConfigError::InvalidValue {
                var: "JOBNIMBUS_SEARCH_PAGE_SIZE".to_string(),
                reason: "Must be between 1 and 1000".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            jobnimbus_api_url,
            jobnimbus_api_key,
            search_page_size,
            request_timeout,
            log_level,
        })
    }

    /// Return the API key, or a `MissingVar` error if none was configured.
    pub fn require_api_key(&self) -> ConfigResult<&str> {
        self.jobnimbus_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingVar("JOBNIMBUS_API_KEY".to_string()))
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            jobnimbus_api_url: DEFAULT_JOBNIMBUS_API_URL.to_string(),
            jobnimbus_api_key: None,
            search_page_size: 20,
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const MANAGED_VARS: [&str; 4] = [
        "JOBNIMBUS_API_URL",
        "JOBNIMBUS_API_KEY",
        "JOBNIMBUS_SEARCH_PAGE_SIZE",
        "REQUEST_TIMEOUT",
    ];

    // Sets env vars for one test and removes them on drop
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in MANAGED_VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.jobnimbus_api_url, DEFAULT_JOBNIMBUS_API_URL);
        assert!(config.jobnimbus_api_key.is_none());
        assert_eq!(config.search_page_size, 20);
        assert_eq!(config.request_timeout, 10);
    }

    #[test]
    fn test_require_api_key_missing() {
        let config = Config::default();
        match config.require_api_key() {
            Err(ConfigError::MissingVar(var)) => assert_eq!(var, "JOBNIMBUS_API_KEY"),
            other => panic!("Expected MissingVar error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("JOBNIMBUS_API_URL", "https://jn.example.com/api1");
        guard.set("JOBNIMBUS_API_KEY", "test-key-123");
        guard.set("JOBNIMBUS_SEARCH_PAGE_SIZE", "50");

        let config = Config::from_env().unwrap();
        assert_eq!(config.jobnimbus_api_url, "https://jn.example.com/api1");
        assert_eq!(config.jobnimbus_api_key.as_deref(), Some("test-key-123"));
        assert_eq!(config.search_page_size, 50);
        assert_eq!(config.require_api_key().unwrap(), "test-key-123");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("JOBNIMBUS_API_URL", "not-a-url");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "JOBNIMBUS_API_URL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_blank_api_key_is_unset() {
        let mut guard = EnvGuard::new();
        guard.set("JOBNIMBUS_API_KEY", "   ");

        let config = Config::from_env().unwrap();
        assert!(config.jobnimbus_api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_config_invalid_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("JOBNIMBUS_SEARCH_PAGE_SIZE", "0");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "JOBNIMBUS_SEARCH_PAGE_SIZE")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("REQUEST_TIMEOUT", "not-a-number");

        let result = Config::parse_env_u64("REQUEST_TIMEOUT", 10);
        assert!(result.is_err());
        assert_eq!(Config::parse_env_u64("NONEXISTENT_TIMEOUT", 10).unwrap(), 10);
    }
}

//! Configuration management module.
//!
//! Handles the provider endpoint and request timeout, with optional loading
//! from environment variables.

use std::env;

use crate::error::AppError;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Per-request timeout in milliseconds (default: 10000).
    pub timeout_ms: u64,
}

impl Config {
    /// Create a configuration for the given endpoint.
    ///
    /// `timeout_ms` defaults to [`DEFAULT_TIMEOUT_MS`] when `None`.
    pub fn new(rpc_url: impl Into<String>, timeout_ms: Option<u64>) -> Self {
        Self { rpc_url: rpc_url.into(), timeout_ms: timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS) }
    }

    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ETHEREUM_RPC_URL`: Ethereum JSON-RPC endpoint
    ///
    /// Optional environment variables:
    /// - `ETHEREUM_RPC_TIMEOUT_MS`: request timeout in milliseconds (default: 10000)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let rpc_url = env::var("ETHEREUM_RPC_URL").map_err(|_| {
            AppError::Config("ETHEREUM_RPC_URL environment variable not set".into())
        })?;

        let timeout_ms = match env::var("ETHEREUM_RPC_TIMEOUT_MS") {
            Ok(raw) => Some(raw.parse()?),
            Err(_) => None,
        };

        Ok(Self::new(rpc_url, timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // from_env tests mutate process-wide environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_timeout_applied() {
        let config = Config::new("http://localhost:8545", None);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn test_explicit_timeout_kept() {
        let config = Config::new("http://localhost:8545", Some(2_500));
        assert_eq!(config.timeout_ms, 2_500);
    }

    #[test]
    fn test_from_env_missing_url_is_config_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var("ETHEREUM_RPC_URL");
        env::remove_var("ETHEREUM_RPC_TIMEOUT_MS");

        let err = Config::from_env().unwrap_err();
        match err {
            AppError::Config(msg) => assert!(msg.contains("ETHEREUM_RPC_URL")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_env_reads_url_and_timeout() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("ETHEREUM_RPC_URL", "http://localhost:8545");
        env::set_var("ETHEREUM_RPC_TIMEOUT_MS", "2500");

        let result = Config::from_env();
        env::remove_var("ETHEREUM_RPC_URL");
        env::remove_var("ETHEREUM_RPC_TIMEOUT_MS");

        let config = result.unwrap();
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.timeout_ms, 2_500);
    }

    #[test]
    fn test_from_env_rejects_non_numeric_timeout() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("ETHEREUM_RPC_URL", "http://localhost:8545");
        env::set_var("ETHEREUM_RPC_TIMEOUT_MS", "fast");

        let result = Config::from_env();
        env::remove_var("ETHEREUM_RPC_URL");
        env::remove_var("ETHEREUM_RPC_TIMEOUT_MS");

        match result.unwrap_err() {
            AppError::Parse(msg) => assert!(msg.contains("invalid")),
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }
}

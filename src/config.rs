//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! (or the Lambda runtime) starts.
//!
//! ```bash
//! export TABLE_NAME="shortlinks"
//! export DYNAMODB_ENDPOINT="http://localhost:8000"   # optional, DynamoDB Local
//! ```
//!
//! ## Required Variables
//!
//! - `TABLE_NAME` - DynamoDB table holding the records (not needed with
//!   `STORE_BACKEND=memory`)
//!
//! ## Optional Variables
//!
//! - `STORE_BACKEND` - `dynamodb` or `memory` (default: `dynamodb`)
//! - `DYNAMODB_ENDPOINT` - Endpoint override for the DynamoDB client
//! - `LISTEN` - Bind address of the HTTP server (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! AWS region and credentials come from the standard AWS environment.

use anyhow::Result;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Storage backend behind the URL repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    DynamoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(Self::DynamoDb),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("STORE_BACKEND must be 'dynamodb' or 'memory', got '{other}'"),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DynamoDb => write!(f, "dynamodb"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    /// DynamoDB table name. Empty when unset.
    pub table_name: String,
    pub dynamodb_endpoint: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STORE_BACKEND` names an unknown backend.
    pub fn from_env() -> Result<Self> {
        let store_backend = env::var("STORE_BACKEND")
            .map(|v| v.parse::<StoreBackend>())
            .unwrap_or(Ok(StoreBackend::DynamoDb))?;

        let table_name = env::var("TABLE_NAME").unwrap_or_default();
        let dynamodb_endpoint = env::var("DYNAMODB_ENDPOINT")
            .ok()
            .filter(|v| !v.is_empty());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            store_backend,
            table_name,
            dynamodb_endpoint,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `table_name` is empty while the DynamoDB backend is selected
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `dynamodb_endpoint` is not an http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.store_backend == StoreBackend::DynamoDb && self.table_name.trim().is_empty() {
            anyhow::bail!("TABLE_NAME must be set when STORE_BACKEND is 'dynamodb'");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref endpoint) = self.dynamodb_endpoint
            && !endpoint.starts_with("http://")
            && !endpoint.starts_with("https://")
        {
            anyhow::bail!(
                "DYNAMODB_ENDPOINT must start with 'http://' or 'https://', got '{}'",
                endpoint
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store backend: {}", self.store_backend);
        if self.store_backend == StoreBackend::DynamoDb {
            tracing::info!("  Table: {}", self.table_name);
            if let Some(ref endpoint) = self.dynamodb_endpoint {
                tracing::info!("  DynamoDB endpoint: {}", endpoint);
            }
        }
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables are invalid or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            store_backend: StoreBackend::DynamoDb,
            table_name: "shortlinks".to_string(),
            dynamodb_endpoint: None,
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    const VARS: [&str; 6] = [
        "STORE_BACKEND",
        "TABLE_NAME",
        "DYNAMODB_ENDPOINT",
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_store_backend_parse() {
        assert_eq!(
            "dynamodb".parse::<StoreBackend>().unwrap(),
            StoreBackend::DynamoDb
        );
        assert_eq!(
            "MEMORY".parse::<StoreBackend>().unwrap(),
            StoreBackend::Memory
        );
        assert!("redis".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Missing table with DynamoDB
        config.table_name = "  ".to_string();
        assert!(config.validate().is_err());

        // Memory backend does not need a table
        config.store_backend = StoreBackend::Memory;
        assert!(config.validate().is_ok());

        config = base_config();

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:3000".to_string();
        config.dynamodb_endpoint = Some("localhost:8000".to_string());
        assert!(config.validate().is_err());

        config.dynamodb_endpoint = Some("http://localhost:8000".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("TABLE_NAME", "shortlinks");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.store_backend, StoreBackend::DynamoDb);
        assert_eq!(config.table_name, "shortlinks");
        assert_eq!(config.dynamodb_endpoint, None);
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_requires_table_for_dynamodb() {
        clear_env();

        assert!(load_from_env().is_err());

        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("STORE_BACKEND", "memory");
        }
        let config = load_from_env().unwrap();
        assert_eq!(config.store_backend, StoreBackend::Memory);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unknown_backend() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("STORE_BACKEND", "postgres");
            env::set_var("TABLE_NAME", "shortlinks");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_endpoint_is_ignored() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial]
        unsafe {
            env::set_var("TABLE_NAME", "shortlinks");
            env::set_var("DYNAMODB_ENDPOINT", "");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.dynamodb_endpoint, None);

        clear_env();
    }
}

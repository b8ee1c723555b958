//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional (all have defaults suitable for local development)
//! - `SOLE_STREET_HOST` - Bind address (default: 127.0.0.1)
//! - `SOLE_STREET_PORT` - Listen port (default: 3000)
//! - `SOLE_STREET_BASE_URL` - Public URL (default: http://localhost:3000)
//! - `SOLE_STREET_CATALOG_PATH` - Bundled dataset (default: crates/storefront/data/footwear.json)
//! - `SOLE_STREET_STORAGE_DIR` - Durable key-value storage directory (default: .sole-street)
//! - `SOLE_STREET_TAX_RATE` - Tax rate as a decimal fraction (default: 0.13)
//! - `SOLE_STREET_SHIPPING_FEE` - Flat shipping fee (default: 15)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Path to the bundled product dataset
    pub catalog_path: PathBuf,
    /// Directory backing the durable key-value store
    pub storage_dir: PathBuf,
    /// Tax rate applied by the order summary calculator
    pub tax_rate: Decimal,
    /// Flat shipping fee applied to non-empty orders
    pub shipping_fee: Decimal,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env("SOLE_STREET_HOST", "127.0.0.1")?;
        let port = parse_env("SOLE_STREET_PORT", "3000")?;
        let base_url = get_env_or_default("SOLE_STREET_BASE_URL", "http://localhost:3000");
        let catalog_path = PathBuf::from(get_env_or_default(
            "SOLE_STREET_CATALOG_PATH",
            "crates/storefront/data/footwear.json",
        ));
        let storage_dir = PathBuf::from(get_env_or_default("SOLE_STREET_STORAGE_DIR", ".sole-street"));
        let tax_rate = parse_env("SOLE_STREET_TAX_RATE", "0.13")?;
        let shipping_fee = parse_env("SOLE_STREET_SHIPPING_FEE", "15")?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            base_url,
            catalog_path,
            storage_dir,
            tax_rate,
            shipping_fee,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable (with default) and parse it.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let port: u16 = parse_env("SOLE_STREET_TEST_UNSET_PORT", "3000").unwrap();
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_parse_env_rejects_garbage_default() {
        let result: Result<u16, _> = parse_env("SOLE_STREET_TEST_UNSET_PORT", "not-a-port");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            catalog_path: PathBuf::from("data/footwear.json"),
            storage_dir: PathBuf::from(".sole-street"),
            tax_rate: "0.13".parse().unwrap(),
            shipping_fee: "15".parse().unwrap(),
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}

//! Marketplace configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ECOFINDS_NAMESPACE` - Storage key namespace (default: `ecofinds`)
//! - `ECOFINDS_DATA_FILE` - Path to the JSON data file; when unset, the
//!   marketplace runs on the in-memory backend

use std::path::PathBuf;

use thiserror::Error;

/// Default storage key namespace.
pub const DEFAULT_NAMESPACE: &str = "ecofinds";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Marketplace configuration.
#[derive(Debug, Clone)]
pub struct MarketplaceConfig {
    /// Namespace prefixed to every storage key (`<ns>_users`, ...).
    pub namespace: String,
    /// JSON data file path; `None` selects the in-memory backend.
    pub data_file: Option<PathBuf>,
}

impl MarketplaceConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `ECOFINDS_NAMESPACE` is set
    /// to an empty string or contains whitespace.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let namespace = get_env_or_default("ECOFINDS_NAMESPACE", DEFAULT_NAMESPACE);
        validate_namespace(&namespace)?;

        let data_file = get_optional_env("ECOFINDS_DATA_FILE").map(PathBuf::from);

        Ok(Self {
            namespace,
            data_file,
        })
    }

    /// Configuration with the given namespace and no data file.
    #[must_use]
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            data_file: None,
        }
    }
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self::with_namespace(DEFAULT_NAMESPACE)
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Namespaces end up embedded in storage keys, so they must be non-empty
/// and free of whitespace.
fn validate_namespace(namespace: &str) -> Result<(), ConfigError> {
    if namespace.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            "ECOFINDS_NAMESPACE".to_string(),
            "must not be empty".to_string(),
        ));
    }
    if namespace.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidEnvVar(
            "ECOFINDS_NAMESPACE".to_string(),
            "must not contain whitespace".to_string(),
        ));
    }
    Ok(())
}

//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LUMORA_DATA_DIR` - Directory for the persisted cart document
//!   (default: `.lumora` in the current directory)
//! - `LUMORA_CART_KEY` - Storage key for the cart document
//!   (default: `lumora-cart`)

use std::path::PathBuf;

use lumora_cart::DEFAULT_CART_KEY;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding the persisted cart document.
    pub data_dir: PathBuf,
    /// Storage key the cart document is written under.
    pub cart_key: String,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unusable (empty
    /// cart key).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = std::env::var("LUMORA_DATA_DIR")
            .map_or_else(|_| PathBuf::from(".lumora"), PathBuf::from);

        let cart_key = std::env::var("LUMORA_CART_KEY")
            .unwrap_or_else(|_| DEFAULT_CART_KEY.to_string());
        if cart_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "LUMORA_CART_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self { data_dir, cart_key })
    }
}

//! Configuration Module
//!
//! Handles loading and managing store configuration from environment variables.

use std::env;

use crate::store::MAX_SAFE_INTEGER_MS;

/// Store configuration parameters.
///
/// Values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Default TTL in milliseconds for entries set without an explicit TTL
    pub default_ttl_ms: u64,
}

impl StoreConfig {
    /// Creates a new StoreConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TTL_STORE_DEFAULT_TTL_MS` - Default TTL in milliseconds
    ///   (default: 2^53 - 1, effectively never expires)
    ///
    /// Values outside the valid TTL range (1 to 2^53 - 1) fall back to
    /// the default.
    pub fn from_env() -> Self {
        Self {
            default_ttl_ms: env::var("TTL_STORE_DEFAULT_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| (1..=MAX_SAFE_INTEGER_MS).contains(v))
                .unwrap_or(MAX_SAFE_INTEGER_MS),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: MAX_SAFE_INTEGER_MS,
        }
    }
}

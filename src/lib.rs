//! TTL Store - A minimal in-process key-value store
//!
//! Associates each key with a value and an expiration time, returning
//! the value only while it remains unexpired. Expiry is passive: entries
//! are compared against the clock at read time, never swept.

pub mod config;
pub mod error;
pub mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use store::{TtlStore, MAX_SAFE_INTEGER_MS};

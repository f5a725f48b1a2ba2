//! Store Module
//!
//! Provides an in-process key-value map with passive TTL expiration.

mod entry;
mod store;
mod validate;


// Re-export public types
pub use entry::StoreEntry;
pub use store::TtlStore;
pub use validate::{validate_key, validate_ttl};

// == Public Constants ==
/// Largest accepted TTL in milliseconds (2^53 - 1), and the initial
/// default TTL. Mirrors the largest integer a double can represent
/// exactly, which is where the original contract drew its bound.
pub const MAX_SAFE_INTEGER_MS: u64 = 9_007_199_254_740_991;

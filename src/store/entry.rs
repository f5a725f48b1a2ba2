//! Store Entry Module
//!
//! Defines the structure for individual store entries with TTL expiration.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Store Entry ==
/// A single stored value together with its expiration timestamp.
///
/// Every entry expires: `expire_at` is computed at insertion time as
/// `now + ttl`, and the default TTL of 2^53 - 1 ms makes "never expires"
/// a practical consequence rather than a special case.
#[derive(Debug, Clone)]
pub struct StoreEntry {
    /// The stored value
    pub value: Value,
    /// Expiration timestamp (Unix milliseconds)
    pub expire_at: u64,
}

impl StoreEntry {
    // == Constructor ==
    /// Creates a new entry expiring `ttl_ms` milliseconds from now.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_ms` - TTL in milliseconds, already validated by the caller
    pub fn new(value: Value, ttl_ms: u64) -> Self {
        Self {
            value,
            expire_at: current_timestamp_ms().saturating_add(ttl_ms),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has logically expired.
    ///
    /// Boundary condition: an entry is expired only once the current time
    /// is strictly past `expire_at`, so a read at exactly `expire_at`
    /// still returns the value.
    ///
    /// Logical expiry does not imply removal; the owning store decides
    /// whether the entry is physically deleted.
    pub fn is_expired(&self) -> bool {
        self.expire_at < current_timestamp_ms()
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation() {
        let entry = StoreEntry::new(json!("test_value"), 60_000);

        assert_eq!(entry.value, json!("test_value"));
        assert!(entry.expire_at > current_timestamp_ms());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        // Create entry with 50 ms TTL
        let entry = StoreEntry::new(json!("test_value"), 50);

        assert!(!entry.is_expired());

        // Wait for expiration
        sleep(Duration::from_millis(60));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // An entry whose expire_at is already in the past is expired
        let stale = StoreEntry {
            value: json!("test"),
            expire_at: current_timestamp_ms() - 1,
        };
        assert!(stale.is_expired());

        // An entry expiring in the future is live
        let live = StoreEntry {
            value: json!("test"),
            expire_at: current_timestamp_ms() + 1_000,
        };
        assert!(!live.is_expired());
    }

    #[test]
    fn test_entry_huge_ttl_does_not_overflow() {
        let entry = StoreEntry::new(json!(1), u64::MAX);
        assert!(!entry.is_expired());
    }
}

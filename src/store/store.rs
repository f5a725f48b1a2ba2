//! TTL Store Module
//!
//! Main store engine combining HashMap storage with passive TTL expiration.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::store::{validate_key, validate_ttl, StoreEntry};

// == TTL Store ==
/// In-process key-value store with per-entry TTL expiration.
///
/// Expiry is purely passive: an entry past its `expire_at` is hidden by
/// `get` but stays in the map until overwritten or removed. There is no
/// background sweep, no capacity bound, and no internal locking; callers
/// in multi-threaded programs must wrap the store in a mutex themselves.
#[derive(Debug)]
pub struct TtlStore {
    /// Key-value storage, keyed by the coerced string form of each key
    entries: HashMap<String, StoreEntry>,
    /// TTL in milliseconds applied by `set` when no explicit TTL is given
    default_ttl_ms: u64,
}

impl TtlStore {
    // == Constructors ==
    /// Creates an empty store with the default configuration
    /// (default TTL of 2^53 - 1 ms, effectively never expiring).
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store from an explicit configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl_ms: config.default_ttl_ms,
        }
    }

    // == Set ==
    /// Stores a value under `key` with an optional TTL.
    ///
    /// If the key already exists, the entry is overwritten and its
    /// expiration reset. `None` uses the store's current default TTL.
    ///
    /// # Arguments
    /// * `key` - JSON string or number; numbers are coerced to their
    ///   textual form, so `5` and `"5"` address the same entry
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL in milliseconds as a JSON number
    ///
    /// # Errors
    /// `InvalidTtl` if the TTL is not a number, not strictly positive,
    /// or above 2^53 - 1; `InvalidKey` if the key has the wrong type.
    /// Nothing is written on error.
    pub fn set(&mut self, key: &Value, value: Value, ttl: Option<&Value>) -> Result<()> {
        let ttl_ms = match ttl {
            Some(ttl) => validate_ttl(ttl)?,
            None => self.default_ttl_ms,
        };
        let key = validate_key(key)?;

        let entry = StoreEntry::new(value, ttl_ms);
        let previous = self.entries.insert(key.clone(), entry);

        if previous.is_some() {
            debug!(key = %key, ttl_ms, "overwrote entry");
        } else {
            debug!(key = %key, ttl_ms, "inserted entry");
        }
        Ok(())
    }

    // == Get ==
    /// Retrieves the value stored under `key`.
    ///
    /// Returns `None` if the key is absent or its entry has logically
    /// expired. An expired entry is NOT removed here; the read only hides
    /// it, and it stays in the map until overwritten or removed. `remove`
    /// is asymmetric and will still hand back such a stale value.
    ///
    /// # Errors
    /// `InvalidKey` if the key is neither a string nor a number.
    pub fn get(&self, key: &Value) -> Result<Option<Value>> {
        let key = validate_key(key)?;

        match self.entries.get(&key) {
            Some(entry) if entry.is_expired() => {
                trace!(key = %key, "entry expired, hiding stale value");
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    // == Remove ==
    /// Deletes the entry under `key` and returns its stored value.
    ///
    /// Performs no expiry check: an entry whose TTL has already elapsed
    /// is still deleted and its stale value returned. Returns `None` if
    /// no entry exists.
    ///
    /// # Errors
    /// `InvalidKey` if the key is neither a string nor a number.
    pub fn remove(&mut self, key: &Value) -> Result<Option<Value>> {
        let key = validate_key(key)?;

        match self.entries.remove(&key) {
            Some(entry) => {
                debug!(key = %key, "removed entry");
                Ok(Some(entry.value))
            }
            None => Ok(None),
        }
    }

    // == Default TTL ==
    /// Overwrites the default TTL, in milliseconds.
    ///
    /// Validated exactly like `set`'s TTL argument. Entries created
    /// earlier keep the expiration they were given.
    ///
    /// # Errors
    /// `InvalidTtl` under the same conditions as `set`; the previous
    /// default is kept on error.
    pub fn set_default_ttl(&mut self, ttl: &Value) -> Result<()> {
        self.default_ttl_ms = validate_ttl(ttl)?;
        debug!(default_ttl_ms = self.default_ttl_ms, "default ttl updated");
        Ok(())
    }

    /// Returns the current default TTL in milliseconds.
    pub fn default_ttl(&self) -> u64 {
        self.default_ttl_ms
    }

    // == Length ==
    /// Returns the number of physically present entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TtlStore {
    fn default() -> Self {
        Self::new()
    }
}

//! Input Validation Module
//!
//! Shared validation contract for keys and TTLs. `set` and
//! `set_default_ttl` validate TTLs identically, and `set`/`get`/`remove`
//! validate keys identically, so the rules live in one place.

use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::store::MAX_SAFE_INTEGER_MS;

// == Key Validation ==
/// Validates a key and coerces it to its storage form.
///
/// Accepts JSON strings and JSON numbers; numbers are coerced to their
/// textual representation, so `5` and `"5"` address the same entry.
/// Any other JSON type fails with `InvalidKey`.
pub fn validate_key(key: &Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(StoreError::InvalidKey(
            "key must be a string or a number".to_string(),
        )),
    }
}

// == TTL Validation ==
/// Validates a TTL and returns it as whole milliseconds.
///
/// A TTL must be a JSON number whose integer part is strictly positive
/// and no larger than [`MAX_SAFE_INTEGER_MS`]; anything else fails with
/// `InvalidTtl`. The fractional part, if any, is truncated.
pub fn validate_ttl(ttl: &Value) -> Result<u64> {
    let ttl_ms = ttl
        .as_f64()
        .ok_or_else(|| StoreError::InvalidTtl("ttl must be a number".to_string()))?
        .trunc();

    if ttl_ms <= 0.0 {
        return Err(StoreError::InvalidTtl(
            "ttl must be greater than 0".to_string(),
        ));
    }
    if ttl_ms > MAX_SAFE_INTEGER_MS as f64 {
        return Err(StoreError::InvalidTtl(format!(
            "ttl must be at most {}",
            MAX_SAFE_INTEGER_MS
        )));
    }

    Ok(ttl_ms as u64)
}

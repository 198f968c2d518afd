//! Domain layer for the key-value cache store
//!
//! # Domain Models
//!
//! - `StoredEntry`: one cached value with its write timestamp
//!
//! # Port Trait
//!
//! - `KeyValueStore`: storage abstraction consumed by the catalog cache

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::Result;

// ═══════════════════════════════════════════════════════════════════════════
// Domain Models
// ═══════════════════════════════════════════════════════════════════════════

/// A cached value together with the time it was written
///
/// `timestamp_ms` is milliseconds since the Unix epoch. Freshness policy
/// (TTL) belongs to the caller; the store keeps entries until they are
/// overwritten or removed.
///
/// # Examples
///
/// ```rust
/// use scout_storage::StoredEntry;
///
/// let entry = StoredEntry::new(1_700_000_000_000, serde_json::json!({"features": []}));
/// assert_eq!(entry.timestamp_ms, 1_700_000_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEntry {
    /// Write time (epoch milliseconds)
    pub timestamp_ms: i64,
    /// Stored payload
    pub data: serde_json::Value,
}

impl StoredEntry {
    pub fn new(timestamp_ms: i64, data: serde_json::Value) -> Self {
        Self { timestamp_ms, data }
    }
}

/// SHA-256 hex digest of a serialized payload
pub fn payload_checksum(payload: &str) -> String {
    let digest = Sha256::digest(payload.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Port
// ═══════════════════════════════════════════════════════════════════════════

/// Key-value store port
///
/// Implementations must be safe to share between concurrent scans.
/// `put` replaces any existing entry for the key in one step.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the entry stored under `key`
    async fn get(&self, key: &str) -> Result<Option<StoredEntry>>;

    /// Store `entry` under `key`, replacing any previous entry
    async fn put(&self, key: &str, entry: StoredEntry) -> Result<()>;

    /// Remove the entry stored under `key` (no-op when absent)
    async fn remove(&self, key: &str) -> Result<()>;

    /// Backend name for log lines
    fn backend_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_stable() {
        let a = payload_checksum("[1,2,3]");
        let b = payload_checksum("[1,2,3]");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert_ne!(a, payload_checksum("[1,2]"));
    }

    #[test]
    fn test_entry_json_roundtrip() {
        let entry = StoredEntry::new(42, serde_json::json!({"k": "v"}));
        let json = serde_json::to_string(&entry).unwrap();
        let back: StoredEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}

//! Scout Storage - persistent key-value cache for catalog snapshots
//!
//! Holds the last fetched feature catalog between runs so that scans can
//! start without a network round-trip and can fall back to stale data
//! when the catalog service is unreachable.
//!
//! ## Core Principles
//!
//! 1. **Whole-value replace**: an entry is written and read as one unit,
//!    there are no partial updates.
//! 2. **Last writer wins**: concurrent writers racing on the same key never
//!    corrupt the store, the later write simply replaces the earlier one.
//! 3. **Checksummed payloads**: a payload that no longer matches its
//!    checksum is reported as corrupted instead of being handed back.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scout_storage::{KeyValueStore, MemoryStore, StoredEntry};
//!
//! let store = MemoryStore::new();
//! store.put("api-cache:abc", StoredEntry::new(1_700_000_000_000, serde_json::json!([]))).await?;
//! let entry = store.get("api-cache:abc").await?;
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, StorageError};

pub use domain::{payload_checksum, KeyValueStore, StoredEntry};
pub use infrastructure::memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use infrastructure::sqlite::SqliteStore;

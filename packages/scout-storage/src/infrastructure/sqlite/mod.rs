//! SQLite adapter for KeyValueStore
//!
//! Schema: one row per key holding the write timestamp, the JSON payload
//! and a SHA-256 checksum of that payload. Writes use `INSERT OR REPLACE`
//! so concurrent refreshes resolve as last-writer-wins.

use std::path::Path;

use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{payload_checksum, KeyValueStore, StoredEntry};
use crate::{Result, StorageError};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS cache_entries (
    key          TEXT PRIMARY KEY,
    timestamp_ms INTEGER NOT NULL,
    payload      TEXT NOT NULL,
    checksum     TEXT NOT NULL
);
";

/// File-backed key-value store
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a store at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<StoredEntry>> {
        let row: Option<(i64, String, String)> = {
            let conn = self.conn.lock();
            conn.query_row(
                "SELECT timestamp_ms, payload, checksum FROM cache_entries WHERE key = ?1",
                params![key],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?
        };

        let Some((timestamp_ms, payload, checksum)) = row else {
            return Ok(None);
        };

        if payload_checksum(&payload) != checksum {
            return Err(StorageError::corrupted(key));
        }

        let data: serde_json::Value = serde_json::from_str(&payload)?;
        Ok(Some(StoredEntry::new(timestamp_ms, data)))
    }

    async fn put(&self, key: &str, entry: StoredEntry) -> Result<()> {
        let payload = serde_json::to_string(&entry.data)?;
        let checksum = payload_checksum(&payload);

        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO cache_entries (key, timestamp_ms, payload, checksum)
             VALUES (?1, ?2, ?3, ?4)",
            params![key, entry.timestamp_ms, payload, checksum],
        )?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM cache_entries WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

//! Storage adapters
//!
//! - `memory`: process-local store (tests, `--offline` runs without a cache file)
//! - `sqlite`: file-backed store that survives restarts

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

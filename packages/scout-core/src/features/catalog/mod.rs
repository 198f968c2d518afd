//! Feature Catalog (accessor, cache, source)
//!
//! Retrieves the canonical list of tracked web-platform features and keeps
//! a persistent copy so scans can run offline.
//!
//! ## Structure
//! - `domain/` - response parsing, snapshots and freshness
//! - `ports/` - `CatalogSource` trait
//! - `infrastructure/` - HTTP source, `CatalogCache` over a key-value store
//! - `application/` - `CatalogAccessor` (cache-first fetch with retry)
//!
//! Every failure path resolves to stale data or an empty list; nothing here
//! propagates a hard error to a scan.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::CatalogAccessor;
pub use domain::{parse_features_response, CachedCatalog, CatalogFreshness, CatalogSnapshot};
pub use infrastructure::{cache_key_for, CatalogCache, HttpCatalogSource};
pub use ports::CatalogSource;

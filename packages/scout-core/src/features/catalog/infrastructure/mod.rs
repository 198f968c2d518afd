//! Catalog infrastructure adapters

pub mod cache;
pub mod http_source;

pub use cache::{cache_key_for, CatalogCache};
pub use http_source::HttpCatalogSource;

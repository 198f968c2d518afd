//! Catalog application layer

pub mod accessor;

pub use accessor::CatalogAccessor;

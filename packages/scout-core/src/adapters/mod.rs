//! Host adapters (file enumeration)

pub mod workspace;

pub use workspace::discover_files;

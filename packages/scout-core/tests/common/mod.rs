//! Common test utilities for scout-core
//!
//! Catalog fixtures, scripted catalog sources and source snippets shared
//! by the integration tests.

#![allow(dead_code)]

mod fixtures;
mod sources;

pub use fixtures::*;
pub use sources::*;

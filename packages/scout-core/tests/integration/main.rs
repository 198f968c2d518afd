//! Integration tests for scout-core

#[path = "../common/mod.rs"]
mod common;

mod aggregate_properties;
mod catalog_fallback;
mod malformed_input;
mod scenarios;
mod workspace_scan;

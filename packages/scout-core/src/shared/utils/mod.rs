//! Shared utilities

pub mod tree_sitter;

pub use self::tree_sitter::{
    find_child_by_kind, find_descendants_by_kind, node_location, node_text, parse_with,
    visit_preorder,
};

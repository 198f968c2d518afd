//! Tree-sitter Utility Functions
//!
//! Common helpers for working with tree-sitter syntax trees, shared by the
//! script, style and markup scanners.

use tree_sitter::{Language, Node, Parser, Tree};

use crate::shared::models::Location;

// ═══════════════════════════════════════════════════════════════════════════
// Parsing
// ═══════════════════════════════════════════════════════════════════════════

/// Parse `source` with `language`
///
/// tree-sitter recovers from syntax errors on its own, so a tree is almost
/// always produced; `ERROR` and `MISSING` nodes mark the damaged regions.
/// Returns `Err` only when the grammar cannot be loaded or the parser gives
/// up entirely.
pub fn parse_with(language: &Language, source: &str) -> Result<Tree, String> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| format!("Failed to set language: {}", e))?;

    parser
        .parse(source, None)
        .ok_or_else(|| "Failed to parse content".to_string())
}

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Visit `root` and all of its descendants in document (pre-)order
///
/// Iterative, so deeply nested input cannot overflow the stack.
pub fn visit_preorder<'a, F>(root: Node<'a>, mut visit: F)
where
    F: FnMut(Node<'a>),
{
    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        visit(current);
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
}

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if child.kind() == kind {
                return Some(child);
            }
        }
    }
    None
}

/// Find all descendants by kind, in document order
pub fn find_descendants_by_kind<'a>(node: &Node<'a>, kind: &str) -> Vec<Node<'a>> {
    let mut result = Vec::new();
    visit_preorder(*node, |n| {
        if n.kind() == kind {
            result.push(n);
        }
    });
    result
}

// ═══════════════════════════════════════════════════════════════════════════
// Text & Position Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node (empty when the range is not valid UTF-8)
#[inline]
pub fn node_text<'s>(node: &Node, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or("")
}

/// 1-indexed start location of a node
#[inline]
pub fn node_location(node: &Node) -> Location {
    Location::from_point(node.start_position())
}

//! Script scanner (JavaScript / TypeScript / JSX)
//!
//! `.ts` files use the TypeScript grammar; everything else routed here
//! uses the TSX grammar, which accepts JSX and type annotations alike.

use tree_sitter::Language;

use super::issue_at;
use crate::features::scanning::index::FeatureIndex;
use crate::features::scanning::ports::{LanguageScanner, ScanLanguage};
use crate::shared::models::Issue;
use crate::shared::utils::{node_location, node_text, parse_with, visit_preorder};

/// Node kinds carrying a name as written in source
const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "property_identifier",
    "type_identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptScanner;

impl ScriptScanner {
    pub fn new() -> Self {
        Self
    }

    fn grammar_for(path: &str) -> Language {
        let is_plain_ts = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.eq_ignore_ascii_case("ts"))
            .unwrap_or(false);
        if is_plain_ts {
            tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
        } else {
            tree_sitter_typescript::LANGUAGE_TSX.into()
        }
    }
}

impl LanguageScanner for ScriptScanner {
    fn language(&self) -> ScanLanguage {
        ScanLanguage::Script
    }

    fn scan(&self, source: &str, path: &str, index: &FeatureIndex) -> Vec<Issue> {
        let tree = match parse_with(&Self::grammar_for(path), source) {
            Ok(tree) => tree,
            Err(e) => {
                tracing::warn!("Failed to parse script {}: {}", path, e);
                return Vec::new();
            }
        };

        let root = tree.root_node();
        if root.has_error() {
            tracing::debug!("Syntax errors in {}, scanning recovered tree", path);
        }

        let mut issues = Vec::new();
        visit_preorder(root, |node| {
            if !IDENTIFIER_KINDS.contains(&node.kind()) {
                return;
            }
            if let Some(feature) = index.script_feature(node_text(&node, source)) {
                issues.push(issue_at(path, feature, feature.name.clone(), node_location(&node), index));
            }
        });

        tracing::debug!("{}: {} script issues", path, issues.len());
        issues
    }
}

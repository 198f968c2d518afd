//! Markup scanner (HTML)
//!
//! Every opening tag is checked against `html-element-<tag>`, and each of
//! its attributes against `html-attribute-<attr>`. All issues of a tag
//! carry the tag's opening position.

use tree_sitter::Node;

use super::issue_at;
use crate::features::scanning::index::FeatureIndex;
use crate::features::scanning::ports::{LanguageScanner, ScanLanguage};
use crate::shared::models::Issue;
use crate::shared::utils::{find_child_by_kind, node_location, node_text, parse_with, visit_preorder};

const TAG_KINDS: &[&str] = &["start_tag", "self_closing_tag"];

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupScanner;

impl MarkupScanner {
    pub fn new() -> Self {
        Self
    }

    fn scan_tag(tag: Node, source: &str, path: &str, index: &FeatureIndex, issues: &mut Vec<Issue>) {
        let at = node_location(&tag);

        if let Some(name_node) = find_child_by_kind(&tag, "tag_name") {
            let name = node_text(&name_node, source).to_ascii_lowercase();
            if let Some(feature) = index.lookup(&format!("html-element-{}", name)) {
                issues.push(issue_at(path, feature, feature.name.clone(), at, index));
            }
        }

        for i in 0..tag.child_count() {
            let Some(attribute) = tag.child(i) else {
                continue;
            };
            if attribute.kind() != "attribute" {
                continue;
            }
            let Some(name_node) = find_child_by_kind(&attribute, "attribute_name") else {
                continue;
            };
            let name = node_text(&name_node, source).to_ascii_lowercase();
            if let Some(feature) = index.lookup(&format!("html-attribute-{}", name)) {
                issues.push(issue_at(path, feature, feature.name.clone(), at, index));
            }
        }
    }
}

impl LanguageScanner for MarkupScanner {
    fn language(&self) -> ScanLanguage {
        ScanLanguage::Markup
    }

    fn scan(&self, source: &str, path: &str, index: &FeatureIndex) -> Vec<Issue> {
        let tree = match parse_with(&tree_sitter_html::LANGUAGE.into(), source) {
            Ok(tree) => tree,
            Err(e) => {
                tracing::warn!("Failed to parse markup {}: {}", path, e);
                return Vec::new();
            }
        };

        let mut issues = Vec::new();
        visit_preorder(tree.root_node(), |node| {
            if TAG_KINDS.contains(&node.kind()) {
                Self::scan_tag(node, source, path, index, &mut issues);
            }
        });

        tracing::debug!("{}: {} markup issues", path, issues.len());
        issues
    }
}

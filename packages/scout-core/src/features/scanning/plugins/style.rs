//! Style scanner (CSS)
//!
//! Two rules per `declaration` node:
//! - property: `css-properties-<property>`, at the declaration
//! - value: `css-properties-<property>-<keyword>` for each bare keyword,
//!   at the keyword, named `"<property>: <keyword>"`
//!
//! Each rule reports only the statuses it is configured for. Results are
//! de-duplicated on `(featureId, line)`.

use std::collections::HashSet;

use tree_sitter::Node;

use super::issue_at;
use crate::config::StyleScanConfig;
use crate::features::scanning::index::FeatureIndex;
use crate::features::scanning::ports::{LanguageScanner, ScanLanguage};
use crate::shared::models::{Issue, StatusLevel};
use crate::shared::utils::{
    find_child_by_kind, find_descendants_by_kind, node_location, node_text, parse_with,
    visit_preorder,
};

#[derive(Debug, Clone)]
pub struct StyleScanner {
    property_statuses: Vec<StatusLevel>,
    value_statuses: Vec<StatusLevel>,
    scan_values: bool,
}

impl StyleScanner {
    pub fn new(config: &StyleScanConfig) -> Self {
        Self {
            property_statuses: config.property_statuses.clone(),
            value_statuses: config.value_statuses.clone(),
            scan_values: config.scan_values,
        }
    }

    fn scan_declaration(
        &self,
        declaration: Node,
        source: &str,
        path: &str,
        index: &FeatureIndex,
        seen: &mut HashSet<(String, u32)>,
        issues: &mut Vec<Issue>,
    ) {
        let Some(property_node) = find_child_by_kind(&declaration, "property_name") else {
            return;
        };
        let property = node_text(&property_node, source).trim().to_ascii_lowercase();
        if property.is_empty() || property.starts_with("--") {
            return;
        }

        let mut emit = |issue: Issue, issues: &mut Vec<Issue>| {
            if seen.insert((issue.feature_id.clone(), issue.line)) {
                issues.push(issue);
            }
        };

        let property_id = format!("css-properties-{}", property);
        if let Some(feature) = index.lookup(&property_id) {
            if self.property_statuses.contains(&feature.status) {
                let at = node_location(&declaration);
                emit(issue_at(path, feature, feature.name.clone(), at, index), issues);
            }
        }

        if !self.scan_values {
            return;
        }
        for keyword in find_descendants_by_kind(&declaration, "plain_value") {
            let value = node_text(&keyword, source).trim().to_ascii_lowercase();
            if value.is_empty() {
                continue;
            }
            let value_id = format!("{}-{}", property_id, value);
            let Some(feature) = index.lookup(&value_id) else {
                continue;
            };
            if self.value_statuses.contains(&feature.status) {
                let name = format!("{}: {}", property, value);
                emit(issue_at(path, feature, name, node_location(&keyword), index), issues);
            }
        }
    }
}

impl Default for StyleScanner {
    fn default() -> Self {
        Self::new(&StyleScanConfig::default())
    }
}

impl LanguageScanner for StyleScanner {
    fn language(&self) -> ScanLanguage {
        ScanLanguage::Style
    }

    fn scan(&self, source: &str, path: &str, index: &FeatureIndex) -> Vec<Issue> {
        let tree = match parse_with(&tree_sitter_css::LANGUAGE.into(), source) {
            Ok(tree) => tree,
            Err(e) => {
                tracing::warn!("Failed to parse stylesheet {}: {}", path, e);
                return Vec::new();
            }
        };

        let root = tree.root_node();
        if root.has_error() {
            tracing::debug!("Syntax errors in {}, scanning recovered tree", path);
        }

        let mut declarations = Vec::new();
        visit_preorder(root, |node| {
            if node.kind() == "declaration" {
                declarations.push(node);
            }
        });

        let mut seen = HashSet::new();
        let mut issues = Vec::new();
        for declaration in declarations {
            self.scan_declaration(declaration, source, path, index, &mut seen, &mut issues);
        }

        tracing::debug!("{}: {} style issues", path, issues.len());
        issues
    }
}

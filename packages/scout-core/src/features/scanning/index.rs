//! Feature index
//!
//! Built once per scan from the catalog. Every record is classified up
//! front, so scanners only do hash lookups per token.
//!
//! Tie-break: the first record in catalog order wins, for both exact
//! identifier lookups and script fragment (containment) lookups.

use rustc_hash::FxHashMap;

use super::script_table::ScriptNameTable;
use crate::features::classification::{classify, PriorityPolicy};
use crate::shared::models::{FeatureDomain, FeatureRecord, PriorityLevel, StatusLevel};

/// A catalog record reduced to what scanners report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFeature {
    pub identifier: String,
    /// Display name (falls back to the identifier when the record has none)
    pub name: String,
    pub status: StatusLevel,
}

#[derive(Debug, Clone, Default)]
pub struct FeatureIndex {
    features: Vec<IndexedFeature>,
    exact: FxHashMap<String, usize>,
    by_domain: [Vec<usize>; 5],
    /// Source identifier → resolved script feature
    script_names: FxHashMap<String, usize>,
    policy: PriorityPolicy,
}

impl FeatureIndex {
    pub fn build(catalog: &[FeatureRecord], script_table: &ScriptNameTable) -> Self {
        let mut index = Self::default();

        for record in catalog {
            let slot = index.features.len();
            let name = if record.name.is_empty() {
                record.identifier.clone()
            } else {
                record.name.clone()
            };
            index.features.push(IndexedFeature {
                identifier: record.identifier.clone(),
                name,
                status: classify(Some(record)),
            });
            index.exact.entry(record.identifier.clone()).or_insert(slot);
            index.by_domain[record.domain().slot()].push(slot);
        }

        for (identifier, fragment) in script_table.iter() {
            if let Some(slot) = index.first_script_match(fragment) {
                index.script_names.insert(identifier.to_string(), slot);
            }
        }

        tracing::debug!(
            "Feature index: {} records ({} css, {} html), {} script names resolved",
            index.features.len(),
            index.domain_len(FeatureDomain::Css),
            index.domain_len(FeatureDomain::Html),
            index.script_names.len()
        );
        index
    }

    pub fn with_priority(mut self, policy: PriorityPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn first_script_match(&self, fragment: &str) -> Option<usize> {
        // Script domain slots merged back into catalog order
        let mut candidates: Vec<usize> = FeatureDomain::ALL
            .iter()
            .filter(|domain| domain.is_script())
            .flat_map(|domain| self.by_domain[domain.slot()].iter().copied())
            .filter(|&i| self.features[i].identifier.contains(fragment))
            .collect();
        candidates.sort_unstable();
        candidates.first().copied()
    }

    /// Exact identifier lookup
    pub fn lookup(&self, identifier: &str) -> Option<&IndexedFeature> {
        self.exact.get(identifier).map(|&i| &self.features[i])
    }

    /// Feature referenced by a script identifier token
    pub fn script_feature(&self, identifier: &str) -> Option<&IndexedFeature> {
        self.script_names.get(identifier).map(|&i| &self.features[i])
    }

    pub fn domain_len(&self, domain: FeatureDomain) -> usize {
        self.by_domain[domain.slot()].len()
    }

    pub fn priority_of(&self, status: StatusLevel) -> PriorityLevel {
        self.policy.priority_of(status)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

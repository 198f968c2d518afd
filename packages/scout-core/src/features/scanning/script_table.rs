//! Global web-API names recognised in script sources
//!
//! Each entry maps an identifier as written in source to a fragment that
//! is looked up (by containment) in API/JS catalog identifiers.

use std::collections::BTreeMap;

/// Built-in identifier → catalog fragment pairs
pub const DEFAULT_SCRIPT_NAMES: &[(&str, &str)] = &[
    ("structuredClone", "structuredClone"),
    ("fetch", "fetch"),
    ("IntersectionObserver", "intersection-observer"),
    ("ResizeObserver", "resize-observer"),
    ("MutationObserver", "mutation-observer"),
    ("AbortController", "abortcontroller"),
    ("AbortSignal", "abortsignal"),
    ("BroadcastChannel", "broadcast-channel"),
    ("requestIdleCallback", "requestidlecallback"),
    ("queueMicrotask", "queuemicrotask"),
    ("showPopover", "popover"),
    ("startViewTransition", "view-transitions"),
    ("showModal", "dialog"),
    ("CompressionStream", "compression-streams"),
    ("DecompressionStream", "compression-streams"),
    ("WeakRef", "weakrefs"),
    ("FinalizationRegistry", "weakrefs"),
    ("findLast", "array-findlast"),
    ("findLastIndex", "array-findlast"),
    ("toSorted", "array-by-copy"),
    ("toReversed", "array-by-copy"),
    ("toSpliced", "array-by-copy"),
    ("groupBy", "array-group"),
    ("withResolvers", "promise-withresolvers"),
];

/// Lookup table of identifier names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptNameTable {
    /// Ordered so index construction is deterministic
    entries: BTreeMap<String, String>,
}

impl ScriptNameTable {
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Built-in names plus `extra` (extras override on conflict)
    pub fn with_extras(extra: &BTreeMap<String, String>) -> Self {
        let mut table = Self::default();
        for (identifier, fragment) in extra {
            table.insert(identifier.clone(), fragment.clone());
        }
        table
    }

    pub fn insert(&mut self, identifier: impl Into<String>, fragment: impl Into<String>) {
        self.entries.insert(identifier.into(), fragment.into());
    }

    pub fn fragment_for(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ScriptNameTable {
    fn default() -> Self {
        let entries = DEFAULT_SCRIPT_NAMES
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { entries }
    }
}

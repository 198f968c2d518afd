//! Scanner Port
//!
//! Contract for per-language scanners and the registry that dispatches
//! files to them by extension.

use std::collections::HashMap;
use std::path::Path;

use crate::features::scanning::index::FeatureIndex;
use crate::shared::models::Issue;

/// Scanner family a file is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanLanguage {
    /// `.js`, `.jsx`, `.ts`, `.tsx`
    Script,
    /// `.css`
    Style,
    /// `.html`
    Markup,
}

impl ScanLanguage {
    pub fn name(&self) -> &'static str {
        match self {
            ScanLanguage::Script => "script",
            ScanLanguage::Style => "style",
            ScanLanguage::Markup => "markup",
        }
    }

    /// Get language from file extension (case-insensitive, no leading dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "ts" | "tsx" => Some(ScanLanguage::Script),
            "css" => Some(ScanLanguage::Style),
            "html" => Some(ScanLanguage::Markup),
            _ => None,
        }
    }

    /// Get language from a path's extension
    pub fn from_path(path: &str) -> Option<Self> {
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ScanLanguage::Script => &["js", "jsx", "ts", "tsx"],
            ScanLanguage::Style => &["css"],
            ScanLanguage::Markup => &["html"],
        }
    }
}

/// Scanner for one language family
///
/// Total: malformed input yields partial or empty results plus a log
/// line, never an error.
pub trait LanguageScanner: Send + Sync {
    fn language(&self) -> ScanLanguage;

    /// Issues found in `source`, tagged with `path`
    fn scan(&self, source: &str, path: &str, index: &FeatureIndex) -> Vec<Issue>;
}

/// Registry of scanners keyed by language
pub struct ScannerRegistry {
    scanners: HashMap<ScanLanguage, Box<dyn LanguageScanner>>,
}

impl ScannerRegistry {
    pub fn new() -> Self {
        Self {
            scanners: HashMap::new(),
        }
    }

    /// Register a scanner (replaces any scanner for the same language)
    pub fn register(&mut self, scanner: Box<dyn LanguageScanner>) {
        self.scanners.insert(scanner.language(), scanner);
    }

    pub fn get(&self, lang: ScanLanguage) -> Option<&dyn LanguageScanner> {
        self.scanners.get(&lang).map(|s| s.as_ref())
    }

    /// Scanner responsible for `path`, if any
    pub fn get_for_path(&self, path: &str) -> Option<&dyn LanguageScanner> {
        self.get(ScanLanguage::from_path(path)?)
    }
}

impl Default for ScannerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

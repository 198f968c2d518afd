//! Scanning feature
//!
//! - `index`: catalog lookup structure built once per scan
//! - `script_table`: global web-API names recognised in scripts
//! - `ports`: scanner trait, language dispatch and registry
//! - `plugins`: script, style and markup scanners

pub mod index;
pub mod plugins;
pub mod ports;
pub mod script_table;

pub use index::{FeatureIndex, IndexedFeature};
pub use plugins::{
    create_registry, scan_markup, scan_script, scan_style, MarkupScanner, ScriptScanner,
    StyleScanner,
};
pub use ports::{LanguageScanner, ScanLanguage, ScannerRegistry};
pub use script_table::{ScriptNameTable, DEFAULT_SCRIPT_NAMES};

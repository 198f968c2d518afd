//! Scanner configuration
//!
//! Layering order: built-in defaults → YAML file → environment → validation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigFileV1, SUPPORTED_VERSIONS};
use super::validation::Validatable;
use crate::features::classification::PriorityPolicy;
use crate::shared::models::StatusLevel;

/// Overrides `catalog.base_url`
pub const ENV_API_BASE: &str = "SCOUT_API_BASE";
/// Overrides `cache.path`
pub const ENV_CACHE_PATH: &str = "SCOUT_CACHE_PATH";

// ═══════════════════════════════════════════════════════════════════════════
// Sections
// ═══════════════════════════════════════════════════════════════════════════

/// Remote catalog and retry settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub base_url: String,
    pub endpoint: String,
    /// Cache freshness window
    pub cache_ttl_secs: u64,
    /// Total fetch attempts, including the first
    pub max_attempts: u32,
    /// First backoff delay; doubles after every failed attempt
    pub backoff_base_ms: u64,
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.webstatus.dev/v1".to_string(),
            endpoint: "/features".to_string(),
            cache_ttl_secs: 24 * 60 * 60,
            max_attempts: 3,
            backoff_base_ms: 1000,
            request_timeout_secs: 30,
        }
    }
}

/// Persistent cache location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// SQLite file; `None` uses [`default_cache_path`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// `false` keeps the cache in memory for the process lifetime
    pub persistent: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: None,
            persistent: true,
        }
    }
}

impl CacheConfig {
    /// SQLite file to open, `None` when the cache stays in memory
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if !self.persistent {
            return None;
        }
        self.path.clone().or_else(default_cache_path)
    }
}

/// `<user cache dir>/baseline-scout/catalog.sqlite`
///
/// The user cache dir honours `XDG_CACHE_HOME` on Linux. `None` when the
/// platform reports no home directory.
pub fn default_cache_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("baseline-scout").join("catalog.sqlite"))
}

/// Stylesheet matching rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleScanConfig {
    /// Statuses reported for property matches
    pub property_statuses: Vec<StatusLevel>,
    /// Statuses reported for `property: value` matches
    pub value_statuses: Vec<StatusLevel>,
    pub scan_values: bool,
}

impl Default for StyleScanConfig {
    fn default() -> Self {
        Self {
            property_statuses: vec![StatusLevel::Limited, StatusLevel::Newly],
            value_statuses: vec![StatusLevel::Limited, StatusLevel::Newly],
            scan_values: true,
        }
    }
}

/// Script matching rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptScanConfig {
    /// Identifier → catalog fragment, appended to the built-in table
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_names: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub priority: PriorityPolicy,
    pub style: StyleScanConfig,
    pub script: ScriptScanConfig,
}

/// File discovery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Directory names skipped at any depth
    pub ignore_dirs: Vec<String>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: vec!["node_modules".to_string(), ".git".to_string()],
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ScoutConfig
// ═══════════════════════════════════════════════════════════════════════════

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoutConfig {
    pub catalog: CatalogConfig,
    pub cache: CacheConfig,
    pub scan: ScanConfig,
    pub workspace: WorkspaceConfig,
}

impl ScoutConfig {
    /// Load from a YAML file, then apply environment overrides and validate
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config = Self::parse_yaml(&content)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate YAML text (no environment lookup)
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let config = Self::parse_yaml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides, validated
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn parse_yaml(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        Ok(Self {
            catalog: file.catalog.unwrap_or_default(),
            cache: file.cache.unwrap_or_default(),
            scan: file.scan.unwrap_or_default(),
            workspace: file.workspace.unwrap_or_default(),
        })
    }

    /// Apply `SCOUT_API_BASE` / `SCOUT_CACHE_PATH` from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup (empty values are ignored)
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base) = lookup(ENV_API_BASE).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("{} overrides catalog.base_url", ENV_API_BASE);
            self.catalog.base_url = base;
        }
        if let Some(path) = lookup(ENV_CACHE_PATH).filter(|v| !v.trim().is_empty()) {
            tracing::debug!("{} overrides cache.path", ENV_CACHE_PATH);
            self.cache.path = Some(PathBuf::from(path));
        }
    }

    /// Export as YAML v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            catalog: Some(self.catalog.clone()),
            cache: Some(self.cache.clone()),
            scan: Some(self.scan.clone()),
            workspace: Some(self.workspace.clone()),
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}

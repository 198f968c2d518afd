//! Configuration
//!
//! Versioned YAML (`version: 1`) with per-section defaults, environment
//! overrides and range validation.

pub mod error;
pub mod io;
pub mod scout_config;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use scout_config::{
    default_cache_path, CacheConfig, CatalogConfig, ScanConfig, ScoutConfig, ScriptScanConfig,
    StyleScanConfig, WorkspaceConfig, ENV_API_BASE, ENV_CACHE_PATH,
};
pub use validation::Validatable;

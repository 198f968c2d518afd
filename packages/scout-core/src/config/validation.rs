//! Configuration validation

use super::error::{ConfigError, ConfigResult};
use super::scout_config::{CatalogConfig, ScoutConfig};

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

impl Validatable for CatalogConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(1..=10).contains(&self.max_attempts) {
            return Err(ConfigError::range(
                "catalog.max_attempts",
                self.max_attempts,
                1,
                10,
                "Use 3 for the standard retry behaviour.",
            ));
        }
        if self.cache_ttl_secs < 1 {
            return Err(ConfigError::range(
                "catalog.cache_ttl_secs",
                self.cache_ttl_secs,
                1,
                u64::MAX,
                "The default is 86400 (24 hours).",
            ));
        }
        if !(1..=600).contains(&self.request_timeout_secs) {
            return Err(ConfigError::range(
                "catalog.request_timeout_secs",
                self.request_timeout_secs,
                1,
                600,
                "Pick a timeout between one second and ten minutes.",
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "catalog.base_url".to_string(),
                hint: "Set it to https://api.webstatus.dev/v1 or a mirror.".to_string(),
            });
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "CatalogConfig"
    }
}

impl Validatable for ScoutConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.catalog.validate()?;
        for (identifier, fragment) in &self.scan.script.extra_names {
            if identifier.is_empty() || fragment.is_empty() {
                return Err(ConfigError::Empty {
                    field: format!("scan.script.extra_names.{identifier}"),
                    hint: "Both the identifier and the fragment are required.".to_string(),
                });
            }
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "ScoutConfig"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ScoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_attempts_out_of_range() {
        let mut config = ScoutConfig::default();
        config.catalog.max_attempts = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Range { .. })));

        config.catalog.max_attempts = 11;
        assert!(matches!(config.validate(), Err(ConfigError::Range { .. })));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let mut config = ScoutConfig::default();
        config.catalog.cache_ttl_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_bounds() {
        let mut config = ScoutConfig::default();
        config.catalog.request_timeout_secs = 601;
        assert!(config.validate().is_err());
        config.catalog.request_timeout_secs = 600;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_extra_name_rejected() {
        let mut config = ScoutConfig::default();
        config
            .scan
            .script
            .extra_names
            .insert("fancyThing".to_string(), String::new());
        assert!(matches!(config.validate(), Err(ConfigError::Empty { .. })));
    }
}

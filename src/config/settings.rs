//! # Configuration Settings
//!
//! Defines the configuration structure for meshgate.

use crate::errors::{MeshgateError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use validator::Validate;

/// Environment prefix for file-based configuration overrides (`MESHGATE__VALIDATION__MODE`)
const ENV_OVERRIDE_PREFIX: &str = "MESHGATE";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Validation behaviour
    #[validate(nested)]
    pub validation: ValidationSettings,

    /// Observability configuration
    #[validate(nested)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Create configuration from `MESHGATE_*` environment variables
    pub fn from_env() -> Result<Self> {
        let config = Self {
            validation: ValidationSettings::from_env()?,
            observability: ObservabilityConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML, YAML or JSON file.
    ///
    /// Values can be overridden with `MESHGATE__<SECTION>__<KEY>` environment
    /// variables. Missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()))
            .add_source(
                ::config::Environment::with_prefix(ENV_OVERRIDE_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self).map_err(MeshgateError::from)?;

        self.validate_custom()?;

        Ok(())
    }

    fn validate_custom(&self) -> Result<()> {
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(MeshgateError::config(format!(
                "Log level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.observability.log_level
            )));
        }

        Ok(())
    }
}

/// How an entry's violations are reported.
///
/// Environment variables and config files accept the same spellings:
/// `fail_fast` and `aggregate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Reject with the first violation found
    #[default]
    FailFast,

    /// Reject with every violation in the entry
    Aggregate,
}

impl FromStr for ValidationMode {
    type Err = MeshgateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fail_fast" => Ok(ValidationMode::FailFast),
            "aggregate" => Ok(ValidationMode::Aggregate),
            other => Err(MeshgateError::config(format!(
                "Invalid validation mode '{}': expected 'fail_fast' or 'aggregate'",
                other
            ))),
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::FailFast => write!(f, "fail_fast"),
            ValidationMode::Aggregate => write!(f, "aggregate"),
        }
    }
}

/// Validation behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ValidationSettings {
    /// Report the first violation or all of them
    pub mode: ValidationMode,

    /// Log every rejected entry at warn level
    pub log_rejections: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self { mode: ValidationMode::FailFast, log_rejections: true }
    }
}

impl ValidationSettings {
    /// Create ValidationSettings from environment variables
    pub fn from_env() -> Result<Self> {
        let mode = match std::env::var("MESHGATE_VALIDATION_MODE") {
            Ok(value) => value.parse::<ValidationMode>()?,
            Err(_) => ValidationMode::default(),
        };

        let log_rejections = parse_bool_env("MESHGATE_LOG_REJECTIONS", true)?;

        Ok(Self { mode, log_rejections })
    }
}

/// Observability configuration for logging and metrics
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Service name attached to log output
    #[validate(length(min = 1, message = "Service name cannot be empty"))]
    pub service_name: String,

    /// Log level (trace, debug, info, warn, error)
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub log_level: String,

    /// Enable JSON structured logging
    pub json_logging: bool,

    /// Record validation metrics
    pub enable_metrics: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "meshgate".to_string(),
            log_level: "info".to_string(),
            json_logging: false,
            enable_metrics: true,
        }
    }
}

impl ObservabilityConfig {
    /// Create ObservabilityConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let service_name =
            std::env::var("MESHGATE_SERVICE_NAME").unwrap_or(defaults.service_name);
        let log_level = std::env::var("MESHGATE_LOG_LEVEL").unwrap_or(defaults.log_level);
        let json_logging = parse_bool_env("MESHGATE_JSON_LOGGING", defaults.json_logging)?;
        let enable_metrics = parse_bool_env("MESHGATE_ENABLE_METRICS", defaults.enable_metrics)?;

        Ok(Self { service_name, log_level, json_logging, enable_metrics })
    }
}

fn parse_bool_env(key: &str, default: bool) -> Result<bool> {
    match std::env::var(key) {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(MeshgateError::config(format!("Invalid boolean for {}: '{}'", key, value))),
        },
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.validation.mode, ValidationMode::FailFast);
        assert!(config.validation.log_rejections);
        assert_eq!(config.observability.service_name, "meshgate");
    }

    #[test]
    fn test_validation_mode_parsing() {
        assert_eq!("fail_fast".parse::<ValidationMode>().unwrap(), ValidationMode::FailFast);
        assert_eq!("aggregate".parse::<ValidationMode>().unwrap(), ValidationMode::Aggregate);
        assert!("collect".parse::<ValidationMode>().is_err());
        assert!("fail-fast".parse::<ValidationMode>().is_err());
        assert!("Aggregate".parse::<ValidationMode>().is_err());
    }

    #[test]
    fn test_validation_mode_parsing_matches_serde() {
        for mode in [ValidationMode::FailFast, ValidationMode::Aggregate] {
            let text = mode.to_string();
            let from_serde: ValidationMode =
                serde_json::from_value(serde_json::Value::String(text.clone())).unwrap();
            assert_eq!(text.parse::<ValidationMode>().unwrap(), from_serde);
        }

        for text in ["fail-fast", "failfast", "Aggregate"] {
            assert!(text.parse::<ValidationMode>().is_err());
            assert!(serde_json::from_value::<ValidationMode>(serde_json::Value::String(
                text.to_string()
            ))
            .is_err());
        }
    }

    #[test]
    fn test_validation_mode_display() {
        assert_eq!(ValidationMode::FailFast.to_string(), "fail_fast");
        assert_eq!(ValidationMode::Aggregate.to_string(), "aggregate");
    }

    #[test]
    fn test_config_validation_errors() {
        let config = AppConfig {
            observability: ObservabilityConfig {
                service_name: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(matches!(error, MeshgateError::Config { .. }));
        assert!(error
            .to_string()
            .contains("observability.service_name: Service name cannot be empty"));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let config = AppConfig {
            observability: ObservabilityConfig {
                log_level: "verbose".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("Log level must be one of"));

        let config = AppConfig {
            observability: ObservabilityConfig {
                log_level: "DEBUG".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}

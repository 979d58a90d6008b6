//! # meshgate
//!
//! Validation rules for service-mesh gateway configuration entries. A control
//! plane calls into this crate on its config-entry write path, immediately
//! before an entry is committed to storage, so that inconsistent gateway
//! configuration (port clashes, protocol misuse) never reaches a proxy.
//!
//! ## Architecture
//!
//! ```text
//! write path → EntryValidator → ConfigEntry::validate → protocol capability table
//!                   ↓
//!          tracing logs / metrics
//! ```
//!
//! ## Core Components
//!
//! - **Domain**: ingress and terminating gateway entries as a sum type
//! - **Protocol capability table**: whether a protocol allows wildcard or
//!   multiple services on a listener
//! - **Validation**: per-kind rules, fail-fast or aggregating
//! - **EntryValidator**: applies the configured validation mode and records
//!   the outcome
//!
//! ## Example Usage
//!
//! ```rust
//! use meshgate::domain::{ConfigEntry, IngressGatewayConfigEntry, IngressListener};
//!
//! let entry = IngressGatewayConfigEntry::new("ingress-web")
//!     .with_listener(IngressListener::new(8080, "http").with_service("*"));
//!
//! assert!(entry.validate().is_ok());
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod observability;
pub mod services;
pub mod validation;

// Re-export commonly used types and traits
pub use self::config::{AppConfig, ValidationMode, ValidationSettings};
pub use domain::{
    ConfigEntry, GatewayConfigEntry, GatewayKind, IngressGatewayConfigEntry, IngressListener,
    IngressService, LinkedService, Protocol, TerminatingGatewayConfigEntry,
};
pub use errors::{MeshgateError, Result};
pub use services::EntryValidator;
pub use validation::ValidationError;

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

/// Build an [`EntryValidator`] from application configuration, initializing
/// logging and metrics along the way.
pub fn entry_validator(config: &AppConfig) -> Result<EntryValidator> {
    config.validate()?;
    let metrics = observability::init_observability(&config.observability)?;
    observability::log_config_info(config);
    Ok(EntryValidator::new(config.validation.clone(), metrics))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_available() {
        assert!(!VERSION.is_empty());
        assert_eq!(APP_NAME, "meshgate");
    }

    #[test]
    fn test_entry_validator_from_default_config() {
        let validator = entry_validator(&AppConfig::default()).expect("default config is valid");
        assert_eq!(validator.settings().mode, ValidationMode::FailFast);
    }
}

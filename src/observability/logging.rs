//! # Structured Logging
//!
//! Logging setup and span helpers built on the tracing ecosystem.
//!
//! `RUST_LOG` takes precedence over the configured log level, so operators can
//! raise verbosity for a single module (for example
//! `RUST_LOG=meshgate::validation=debug`) to see every rejected entry.

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;
use crate::errors::{MeshgateError, Result};

/// Create a tracing span for the validation of one configuration entry.
///
/// ```rust,ignore
/// let _span = validation_span!("ingress-gateway", "ingress-web").entered();
/// ```
#[macro_export]
macro_rules! validation_span {
    ($kind:expr, $name:expr) => {
        tracing::debug_span!(
            "entry_validation",
            kind = %$kind,
            name = %$name,
            validation_id = %uuid::Uuid::new_v4()
        )
    };
    ($kind:expr, $name:expr, $($field:tt)*) => {
        tracing::debug_span!(
            "entry_validation",
            kind = %$kind,
            name = %$name,
            validation_id = %uuid::Uuid::new_v4(),
            $($field)*
        )
    };
}

/// Install the global tracing subscriber.
///
/// Returns `Ok(false)` when a subscriber was already installed (for example by
/// a test harness); that case is not an error.
pub fn init_logging(config: &ObservabilityConfig) -> Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            MeshgateError::config_with_source(
                format!("Invalid log level '{}'", config.log_level),
                Box::new(e),
            )
        })?,
    };

    let installed = if config.json_logging {
        tracing_subscriber::fmt().json().with_env_filter(filter).try_init().is_ok()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok()
    };

    if installed {
        tracing::info!(
            service_name = %config.service_name,
            log_level = %config.log_level,
            json_logging = config.json_logging,
            "Logging initialized"
        );
    }

    Ok(installed)
}

/// Log configuration at startup
pub fn log_config_info(config: &crate::config::AppConfig) {
    tracing::info!(
        validation_mode = %config.validation.mode,
        log_rejections = config.validation.log_rejections,
        metrics_enabled = config.observability.enable_metrics,
        "meshgate validation configuration"
    );
}

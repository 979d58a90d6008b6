//! # Observability Infrastructure
//!
//! Structured logging and validation metrics for meshgate.

pub mod logging;
pub mod metrics;

pub use logging::{init_logging, log_config_info};
pub use self::metrics::ValidationMetrics;

use crate::config::ObservabilityConfig;
use crate::errors::Result;

/// Initialize logging and return a metrics recorder configured from `config`
pub fn init_observability(config: &ObservabilityConfig) -> Result<ValidationMetrics> {
    init_logging(config)?;

    let metrics = ValidationMetrics::new(config.enable_metrics);
    metrics.describe();

    ::tracing::info!(
        service_name = %config.service_name,
        metrics_enabled = config.enable_metrics,
        "Observability initialized successfully"
    );

    Ok(metrics)
}

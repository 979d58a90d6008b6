//! # Metrics Collection
//!
//! Counters for validation outcomes. Values are emitted through the `metrics`
//! facade; installing an exporter is left to the embedding control plane.

use metrics::{counter, describe_counter};

use crate::domain::GatewayKind;
use crate::validation::ValidationError;

/// Metrics recorder for entry validation
#[derive(Debug, Clone, Default)]
pub struct ValidationMetrics {
    enabled: bool,
}

impl ValidationMetrics {
    /// Create a new metrics recorder; a disabled recorder emits nothing
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Register metric descriptions with the installed recorder
    pub fn describe(&self) {
        if !self.enabled {
            return;
        }
        describe_counter!(
            "gateway_entry_validations_total",
            "Gateway configuration entries validated, by kind and outcome"
        );
        describe_counter!(
            "gateway_entry_violations_total",
            "Rule violations found in gateway configuration entries, by kind and violation"
        );
    }

    /// Record the outcome of validating one entry
    pub fn record_outcome(&self, kind: GatewayKind, accepted: bool) {
        if !self.enabled {
            return;
        }
        let outcome = if accepted { "accepted" } else { "rejected" };
        let labels = [("kind", kind.as_str().to_string()), ("outcome", outcome.to_string())];
        counter!("gateway_entry_validations_total", &labels).increment(1);
    }

    /// Record each violation found in one entry
    pub fn record_violations(&self, kind: GatewayKind, violations: &[ValidationError]) {
        if !self.enabled {
            return;
        }
        for violation in violations {
            let labels =
                [("kind", kind.as_str().to_string()), ("violation", violation.code().to_string())];
            counter!("gateway_entry_violations_total", &labels).increment(1);
        }
    }
}

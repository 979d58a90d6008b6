//! Entry validation service
//!
//! The write path calls [`EntryValidator::check`] immediately before a gateway
//! configuration entry is committed. Acceptance is all-or-nothing: an entry
//! with any violation is rejected whole.

use tracing::{debug, warn};

use crate::config::{ValidationMode, ValidationSettings};
use crate::domain::ConfigEntry;
use crate::errors::{MeshgateError, Result};
use crate::observability::ValidationMetrics;

/// Validates gateway configuration entries according to [`ValidationSettings`]
#[derive(Debug, Clone, Default)]
pub struct EntryValidator {
    settings: ValidationSettings,
    metrics: ValidationMetrics,
}

impl EntryValidator {
    /// Create a new entry validator
    pub fn new(settings: ValidationSettings, metrics: ValidationMetrics) -> Self {
        Self { settings, metrics }
    }

    pub fn settings(&self) -> &ValidationSettings {
        &self.settings
    }

    /// Check an entry, rejecting it with the violations the configured mode
    /// reports.
    pub fn check<E: ConfigEntry + ?Sized>(&self, entry: &E) -> Result<()> {
        let entry_id = entry.display_id();

        let outcome = match self.settings.mode {
            ValidationMode::FailFast => entry.validate().map_err(|violation| {
                self.metrics.record_violations(entry.kind(), std::slice::from_ref(&violation));
                MeshgateError::validation(entry_id.clone(), violation)
            }),
            ValidationMode::Aggregate => {
                let violations = entry.violations();
                if violations.is_empty() {
                    Ok(())
                } else {
                    self.metrics.record_violations(entry.kind(), &violations);
                    Err(MeshgateError::violations(entry_id.clone(), violations))
                }
            }
        };

        self.metrics.record_outcome(entry.kind(), outcome.is_ok());

        match &outcome {
            Ok(()) => {
                debug!(entry = %entry_id, mode = %self.settings.mode, "Config entry accepted")
            }
            Err(error) if self.settings.log_rejections => warn!(
                entry = %entry_id,
                mode = %self.settings.mode,
                violations = error.rule_violations().len(),
                %error,
                "Config entry rejected"
            ),
            Err(_) => {}
        }

        outcome
    }
}

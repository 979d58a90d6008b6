use std::collections::HashSet;

use tracing::debug;

use super::helpers::{is_blank, ViolationSink};
use super::ValidationError;
use crate::domain::{TerminatingGatewayConfigEntry, TERMINATING_GATEWAY};

/// Validate a terminating gateway entry, returning the first violation.
///
/// Linked service names must be non-blank and unique (case-sensitive). An
/// entry with no linked services is valid.
pub fn validate_terminating_gateway(
    entry: &TerminatingGatewayConfigEntry,
) -> Result<(), ValidationError> {
    let _span = crate::validation_span!(TERMINATING_GATEWAY, &entry.name).entered();

    let mut sink = ViolationSink::fail_fast();
    scan(entry, &mut sink);
    let result = sink.into_result();

    if let Err(ref error) = result {
        debug!(
            gateway = %entry.name,
            violation = error.code(),
            %error,
            "terminating gateway entry rejected"
        );
    }
    result
}

/// Every violation in a terminating gateway entry, in scan order
pub fn terminating_gateway_violations(
    entry: &TerminatingGatewayConfigEntry,
) -> Vec<ValidationError> {
    let _span = crate::validation_span!(TERMINATING_GATEWAY, &entry.name).entered();

    let mut sink = ViolationSink::collect_all();
    scan(entry, &mut sink);
    let violations = sink.into_violations();

    if !violations.is_empty() {
        debug!(
            gateway = %entry.name,
            count = violations.len(),
            "terminating gateway entry has violations"
        );
    }
    violations
}

fn scan(entry: &TerminatingGatewayConfigEntry, sink: &mut ViolationSink) {
    let mut seen: HashSet<&str> = HashSet::with_capacity(entry.services.len());

    for service in &entry.services {
        let name = service.name.as_str();

        if is_blank(name) {
            if sink.record(ValidationError::BlankServiceName) {
                return;
            }
            continue;
        }

        if !seen.insert(name)
            && sink.record(ValidationError::DuplicateService { name: name.to_string() })
        {
            return;
        }
    }
}

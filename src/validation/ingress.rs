use std::collections::HashSet;

use tracing::debug;

use super::helpers::{is_blank, ViolationSink};
use super::ValidationError;
use crate::domain::{classify, IngressGatewayConfigEntry, INGRESS_GATEWAY};

/// Validate an ingress gateway entry, returning the first violation.
///
/// Listeners are checked in declaration order. For each listener the port
/// and empty-service checks run first, then each service in order (blank
/// name, then wildcard use), then the multiple-services check.
pub fn validate_ingress_gateway(entry: &IngressGatewayConfigEntry) -> Result<(), ValidationError> {
    let _span = crate::validation_span!(INGRESS_GATEWAY, &entry.name).entered();

    let mut sink = ViolationSink::fail_fast();
    scan(entry, &mut sink);
    let result = sink.into_result();

    if let Err(ref error) = result {
        debug!(
            gateway = %entry.name,
            violation = error.code(),
            %error,
            "ingress gateway entry rejected"
        );
    }
    result
}

/// Every violation in an ingress gateway entry, in scan order
pub fn ingress_gateway_violations(entry: &IngressGatewayConfigEntry) -> Vec<ValidationError> {
    let _span = crate::validation_span!(INGRESS_GATEWAY, &entry.name).entered();

    let mut sink = ViolationSink::collect_all();
    scan(entry, &mut sink);
    let violations = sink.into_violations();

    if !violations.is_empty() {
        debug!(
            gateway = %entry.name,
            count = violations.len(),
            "ingress gateway entry has violations"
        );
    }
    violations
}

fn scan(entry: &IngressGatewayConfigEntry, sink: &mut ViolationSink) {
    let mut declared_ports = HashSet::with_capacity(entry.listeners.len());

    for listener in &entry.listeners {
        let port = listener.port;

        if !declared_ports.insert(port) && sink.record(ValidationError::PortConflict { port }) {
            return;
        }

        if listener.services.is_empty() {
            if sink.record(ValidationError::NoServiceDeclared { port }) {
                return;
            }
            continue;
        }

        let capabilities = classify(&listener.protocol);

        for service in &listener.services {
            if is_blank(&service.name) {
                if sink.record(ValidationError::BlankServiceName) {
                    return;
                }
                continue;
            }

            if service.is_wildcard()
                && !capabilities.allows_wildcard_service
                && sink.record(ValidationError::WildcardNotAllowed {
                    port,
                    protocol: listener.protocol.clone(),
                })
            {
                return;
            }
        }

        if listener.services.len() > 1
            && !capabilities.allows_multiple_services
            && sink.record(ValidationError::MultipleServicesNotAllowed {
                port,
                protocol: listener.protocol.clone(),
            })
        {
            return;
        }
    }
}

//! # Validation Module
//!
//! Consistency rules for gateway configuration entries, checked once on the
//! write path before an entry is stored. Each gateway kind has two entry
//! points that walk the entry in the same order:
//!
//! - `validate_*` stops at the first violation and returns it
//! - `*_violations` keeps going and returns every violation
//!
//! The first element returned by `*_violations` is always the error the
//! matching `validate_*` returns.
//!
//! Validation is pure: no I/O and no shared state, so distinct entries can be
//! validated concurrently without coordination.

use thiserror::Error;

use crate::domain::Protocol;

mod helpers;
mod ingress;
mod terminating;

pub use ingress::{ingress_gateway_violations, validate_ingress_gateway};
pub use terminating::{terminating_gateway_violations, validate_terminating_gateway};

/// Reasons a gateway configuration entry is rejected.
///
/// Messages are for people and are meant to be matched case-insensitively:
/// some start with a capital letter and some do not. Callers that branch on
/// the kind of violation should match the variant or use [`code`](Self::code).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two listeners of one ingress entry bind the same port
    #[error("port {port} declared on two listeners")]
    PortConflict { port: u16 },

    /// An ingress listener declares no services
    #[error("No service declared for listener with port {port}")]
    NoServiceDeclared { port: u16 },

    /// An ingress service or linked service has an empty name
    #[error("Service name cannot be blank.")]
    BlankServiceName,

    /// The wildcard service is used on a protocol that cannot route by host
    #[error(
        "Wildcard service name is only valid for protocols that support host-based \
         multiplexing (http, http2, grpc); listener on port {port} uses protocol '{protocol}'"
    )]
    WildcardNotAllowed { port: u16, protocol: Protocol },

    /// Several services share a listener whose protocol cannot route by host
    #[error(
        "Multiple services per listener are only supported for protocols that support \
         host-based multiplexing (http, http2, grpc); listener on port {port} uses protocol \
         '{protocol}'"
    )]
    MultipleServicesNotAllowed { port: u16, protocol: Protocol },

    /// A terminating gateway links the same service twice
    #[error("Service \"{name}\" was specified more than once")]
    DuplicateService { name: String },
}

impl ValidationError {
    /// Stable snake_case identifier, used as a metrics label
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::PortConflict { .. } => "port_conflict",
            ValidationError::NoServiceDeclared { .. } => "no_service_declared",
            ValidationError::BlankServiceName => "blank_service_name",
            ValidationError::WildcardNotAllowed { .. } => "wildcard_not_allowed",
            ValidationError::MultipleServicesNotAllowed { .. } => "multiple_services_not_allowed",
            ValidationError::DuplicateService { .. } => "duplicate_service",
        }
    }

    /// Listener port the violation was found on, when it belongs to a listener
    pub fn port(&self) -> Option<u16> {
        match self {
            ValidationError::PortConflict { port }
            | ValidationError::NoServiceDeclared { port }
            | ValidationError::WildcardNotAllowed { port, .. }
            | ValidationError::MultipleServicesNotAllowed { port, .. } => Some(*port),
            ValidationError::BlankServiceName | ValidationError::DuplicateService { .. } => None,
        }
    }
}

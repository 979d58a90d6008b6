//! Domain layer
//!
//! Value types for gateway configuration entries. These types carry no
//! infrastructure dependencies; they are built by whatever layer decodes
//! entries and handed to [`crate::validation`] before the entry is stored.
//!
//! ## Module Organization
//!
//! - `protocol`: listener protocols and the protocol capability table
//! - `gateway`: the gateway kind sum type and the [`ConfigEntry`] interface
//! - `ingress`: ingress gateways, listeners and services
//! - `terminating`: terminating gateways and linked services

pub mod gateway;
pub mod ingress;
pub mod protocol;
pub mod terminating;

pub use gateway::{
    ConfigEntry, GatewayConfigEntry, GatewayKind, INGRESS_GATEWAY, TERMINATING_GATEWAY,
};
pub use ingress::{IngressGatewayConfigEntry, IngressListener, IngressService, WILDCARD_SERVICE};
pub use protocol::{classify, Protocol, ProtocolCapabilities};
pub use terminating::{LinkedService, TerminatingGatewayConfigEntry};

//! Ingress gateway domain types
//!
//! An ingress gateway accepts traffic from outside the mesh on a set of
//! listeners. Each listener binds one port with one protocol and forwards to
//! the services it declares.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::protocol::Protocol;

/// Service name that matches any request host on a listener
pub const WILDCARD_SERVICE: &str = "*";

/// Ingress gateway configuration entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IngressGatewayConfigEntry {
    /// Gateway name
    pub name: String,

    /// Listeners in declaration order
    #[serde(default)]
    pub listeners: Vec<IngressListener>,

    /// Opaque user metadata
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}

impl IngressGatewayConfigEntry {
    /// Create an entry with no listeners
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), listeners: Vec::new(), meta: BTreeMap::new() }
    }

    /// Append a listener
    pub fn with_listener(mut self, listener: IngressListener) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Attach a metadata key/value pair
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Find the listener bound to `port`, if any
    pub fn listener(&self, port: u16) -> Option<&IngressListener> {
        self.listeners.iter().find(|listener| listener.port == port)
    }
}

/// A port/protocol binding on an ingress gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IngressListener {
    /// Port the gateway listens on
    pub port: u16,

    /// Protocol spoken on the port
    #[serde(default)]
    pub protocol: Protocol,

    /// Services reachable through this listener, in declaration order
    #[serde(default)]
    pub services: Vec<IngressService>,
}

impl IngressListener {
    /// Create a listener with no services
    pub fn new(port: u16, protocol: impl Into<Protocol>) -> Self {
        Self { port, protocol: protocol.into(), services: Vec::new() }
    }

    /// Append a service by name
    pub fn with_service(mut self, name: impl Into<String>) -> Self {
        self.services.push(IngressService::new(name));
        self
    }
}

/// A service exposed by an ingress listener
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IngressService {
    /// Service name, or [`WILDCARD_SERVICE`]
    #[serde(default)]
    pub name: String,
}

impl IngressService {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether this is the wildcard service
    pub fn is_wildcard(&self) -> bool {
        self.name == WILDCARD_SERVICE
    }
}

//! Terminating gateway domain types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Terminating gateway configuration entry.
///
/// Exposes services that live outside the mesh to mesh members. An entry with
/// no linked services is legal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TerminatingGatewayConfigEntry {
    /// Gateway name
    pub name: String,

    /// Linked services in declaration order
    #[serde(default)]
    pub services: Vec<LinkedService>,

    /// Opaque user metadata
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}

impl TerminatingGatewayConfigEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), services: Vec::new(), meta: BTreeMap::new() }
    }

    /// Link a service by name
    pub fn with_service(mut self, name: impl Into<String>) -> Self {
        self.services.push(LinkedService::new(name));
        self
    }

    /// Attach a metadata key/value pair
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

/// A non-mesh service exposed through a terminating gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkedService {
    /// Service name, unique within the entry (case-sensitive)
    #[serde(default)]
    pub name: String,
}

impl LinkedService {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

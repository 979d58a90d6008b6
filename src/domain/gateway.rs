//! Gateway configuration entries
//!
//! [`GatewayConfigEntry`] is the sum of the two gateway kinds. Every kind, and
//! the sum itself, implements [`ConfigEntry`], which is the single interface
//! the write path uses to check an entry before committing it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ingress::IngressGatewayConfigEntry;
use super::terminating::TerminatingGatewayConfigEntry;
use crate::validation::{self, ValidationError};

/// Discriminator string for ingress gateway entries
pub const INGRESS_GATEWAY: &str = "ingress-gateway";

/// Discriminator string for terminating gateway entries
pub const TERMINATING_GATEWAY: &str = "terminating-gateway";

/// Kind of gateway an entry configures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GatewayKind {
    #[serde(rename = "ingress-gateway")]
    Ingress,
    #[serde(rename = "terminating-gateway")]
    Terminating,
}

impl GatewayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GatewayKind::Ingress => INGRESS_GATEWAY,
            GatewayKind::Terminating => TERMINATING_GATEWAY,
        }
    }
}

impl fmt::Display for GatewayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations shared by every gateway configuration entry
pub trait ConfigEntry {
    /// Gateway kind of the entry
    fn kind(&self) -> GatewayKind;

    /// Entry name
    fn name(&self) -> &str;

    /// Check the entry, stopping at the first violation
    fn validate(&self) -> Result<(), ValidationError>;

    /// Every violation in the entry, in the order [`ConfigEntry::validate`]
    /// would encounter them. Empty when the entry is valid.
    fn violations(&self) -> Vec<ValidationError>;

    /// `kind/name` label used in logs and errors
    fn display_id(&self) -> String {
        format!("{}/{}", self.kind(), self.name())
    }
}

/// A gateway configuration entry of either kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Kind")]
pub enum GatewayConfigEntry {
    #[serde(rename = "ingress-gateway")]
    Ingress(IngressGatewayConfigEntry),
    #[serde(rename = "terminating-gateway")]
    Terminating(TerminatingGatewayConfigEntry),
}

impl ConfigEntry for GatewayConfigEntry {
    fn kind(&self) -> GatewayKind {
        match self {
            GatewayConfigEntry::Ingress(_) => GatewayKind::Ingress,
            GatewayConfigEntry::Terminating(_) => GatewayKind::Terminating,
        }
    }

    fn name(&self) -> &str {
        match self {
            GatewayConfigEntry::Ingress(entry) => entry.name(),
            GatewayConfigEntry::Terminating(entry) => entry.name(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            GatewayConfigEntry::Ingress(entry) => entry.validate(),
            GatewayConfigEntry::Terminating(entry) => entry.validate(),
        }
    }

    fn violations(&self) -> Vec<ValidationError> {
        match self {
            GatewayConfigEntry::Ingress(entry) => entry.violations(),
            GatewayConfigEntry::Terminating(entry) => entry.violations(),
        }
    }
}

impl ConfigEntry for IngressGatewayConfigEntry {
    fn kind(&self) -> GatewayKind {
        GatewayKind::Ingress
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_ingress_gateway(self)
    }

    fn violations(&self) -> Vec<ValidationError> {
        validation::ingress_gateway_violations(self)
    }
}

impl ConfigEntry for TerminatingGatewayConfigEntry {
    fn kind(&self) -> GatewayKind {
        GatewayKind::Terminating
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_terminating_gateway(self)
    }

    fn violations(&self) -> Vec<ValidationError> {
        validation::terminating_gateway_violations(self)
    }
}

impl From<IngressGatewayConfigEntry> for GatewayConfigEntry {
    fn from(entry: IngressGatewayConfigEntry) -> Self {
        GatewayConfigEntry::Ingress(entry)
    }
}

impl From<TerminatingGatewayConfigEntry> for GatewayConfigEntry {
    fn from(entry: TerminatingGatewayConfigEntry) -> Self {
        GatewayConfigEntry::Terminating(entry)
    }
}

//! Listener protocols and their capability table
//!
//! Whether a listener may use the wildcard service or host several services
//! depends only on its protocol. [`classify`] is the single lookup that
//! answers both questions; the validators never inspect protocol names
//! directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Listener protocol as declared on an ingress listener.
///
/// Unknown protocol strings are preserved in [`Protocol::Other`] rather than
/// rejected. Deciding whether a protocol name is legal belongs to the layer
/// that decodes entries, not to the gateway validators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Protocol {
    /// Plain TCP proxying (Layer 4)
    #[default]
    Tcp,

    /// HTTP/1.1
    Http,

    /// HTTP/2
    Http2,

    /// gRPC over HTTP/2
    Grpc,

    /// Any protocol string this crate does not recognize
    Other(String),
}

impl Protocol {
    /// Canonical protocol name as written in configuration entries
    pub fn as_str(&self) -> &str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Http => "http",
            Protocol::Http2 => "http2",
            Protocol::Grpc => "grpc",
            Protocol::Other(name) => name,
        }
    }

    /// Capabilities of this protocol, see [`classify`]
    pub fn capabilities(&self) -> ProtocolCapabilities {
        classify(self)
    }

    /// Whether the protocol routes by request host
    pub fn is_host_multiplexing(&self) -> bool {
        matches!(self, Protocol::Http | Protocol::Http2 | Protocol::Grpc)
    }
}

impl From<&str> for Protocol {
    fn from(value: &str) -> Self {
        match value {
            "tcp" => Protocol::Tcp,
            "http" => Protocol::Http,
            "http2" => Protocol::Http2,
            "grpc" => Protocol::Grpc,
            other => Protocol::Other(other.to_string()),
        }
    }
}

impl From<String> for Protocol {
    fn from(value: String) -> Self {
        match Protocol::from(value.as_str()) {
            Protocol::Other(_) => Protocol::Other(value),
            known => known,
        }
    }
}

impl From<Protocol> for String {
    fn from(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a listener using a given protocol is allowed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolCapabilities {
    /// The listener may declare the wildcard service `"*"`
    pub allows_wildcard_service: bool,

    /// The listener may declare more than one service
    pub allows_multiple_services: bool,
}

impl ProtocolCapabilities {
    /// Capabilities of host-multiplexing protocols (http, http2, grpc)
    pub const HOST_MULTIPLEXING: Self =
        Self { allows_wildcard_service: true, allows_multiple_services: true };

    /// Capabilities of tcp, also used for any unrecognized protocol
    pub const RESTRICTED: Self =
        Self { allows_wildcard_service: false, allows_multiple_services: false };
}

/// Look up the capabilities of a protocol.
///
/// Never fails: an unrecognized protocol gets the tcp capabilities.
pub fn classify(protocol: &Protocol) -> ProtocolCapabilities {
    if protocol.is_host_multiplexing() {
        ProtocolCapabilities::HOST_MULTIPLEXING
    } else {
        ProtocolCapabilities::RESTRICTED
    }
}

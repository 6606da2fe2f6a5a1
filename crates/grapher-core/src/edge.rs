//! Directed connections between nodes.

use serde::{Deserialize, Serialize};

/// One end of an edge: the node's implicit single port, or a named port.
///
/// On the wire `Default` is an absent `sourcePort`/`targetPort` field and
/// `Named` is the port name string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Port {
    /// The node's implicit port.
    #[default]
    Default,
    /// A port declared by the node under this name.
    Named(String),
}

impl Port {
    /// A named port.
    pub fn named(name: impl Into<String>) -> Self {
        Port::Named(name.into())
    }

    /// Whether this is the implicit port.
    pub fn is_default(&self) -> bool {
        matches!(self, Port::Default)
    }

    /// The port name, if one was given.
    pub fn name(&self) -> Option<&str> {
        match self {
            Port::Default => None,
            Port::Named(name) => Some(name),
        }
    }
}

impl From<Option<String>> for Port {
    fn from(name: Option<String>) -> Self {
        name.map_or(Port::Default, Port::Named)
    }
}

impl From<Port> for Option<String> {
    fn from(port: Port) -> Self {
        match port {
            Port::Default => None,
            Port::Named(name) => Some(name),
        }
    }
}

/// A directed connection from a source node's output to a target node's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Identifier of the edge.
    pub id: String,
    /// Id of the node the signal leaves.
    pub source: String,
    /// Id of the node the signal enters.
    pub target: String,
    /// Output port on the source node.
    #[serde(default, skip_serializing_if = "Port::is_default")]
    pub source_port: Port,
    /// Input port on the target node.
    #[serde(default, skip_serializing_if = "Port::is_default")]
    pub target_port: Port,
}

impl Edge {
    /// Create an edge between the implicit ports of two nodes.
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_port: Port::Default,
            target_port: Port::Default,
        }
    }

    /// Connect specific named ports instead of the implicit ones.
    pub fn with_ports(mut self, source_port: impl Into<String>, target_port: impl Into<String>) -> Self {
        self.source_port = Port::named(source_port);
        self.target_port = Port::named(target_port);
        self
    }
}

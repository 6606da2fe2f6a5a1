//! The strongly-typed node interface and edge validation.

use grapher_core::{Config, ContentType, Edge, LoadingPolicy, Node, Params};
use uuid::Uuid;

use crate::error::{ConnectError, ConnectResult, MappingResult};
use crate::schema::NodeSchema;

/// A named port with the content type it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortSpec {
    /// Port name used in qualified edges.
    pub name: &'static str,
    /// Content carried by the port.
    pub content_type: ContentType,
}

impl PortSpec {
    /// Declare a port.
    pub const fn new(name: &'static str, content_type: ContentType) -> Self {
        Self { name, content_type }
    }
}

/// Identity fields shared by every typed node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeHeader {
    /// Node id.
    pub id: String,
    /// Loading policy, fixed at construction.
    pub loading_policy: LoadingPolicy,
    /// Optional human-readable description.
    pub label: Option<String>,
}

impl NodeHeader {
    /// Build a header, generating a fresh id when none is given.
    pub fn new(id: Option<String>, loading_policy: LoadingPolicy) -> Self {
        Self {
            id: id.unwrap_or_else(generate_id),
            loading_policy,
            label: None,
        }
    }

    /// Copy the identity fields of a generic node. An absent policy becomes
    /// the default.
    pub fn from_node(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            loading_policy: node.loading_policy.unwrap_or_default(),
            label: node.label.clone(),
        }
    }
}

/// A fresh random (v4) UUID string.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// A plugin node with typed config and parameters.
///
/// Implementors provide identity, declared ports and the keyed maps; edge
/// construction and conversion to a generic [`Node`] are provided.
pub trait TypedNode {
    /// Identity fields.
    fn header(&self) -> &NodeHeader;

    /// Plugin identifier.
    fn kind(&self) -> &'static str;

    /// Declared inputs; empty when the node cannot be a target.
    fn inputs(&self) -> &'static [PortSpec];

    /// Declared outputs; empty when the node cannot be a source.
    fn outputs(&self) -> &'static [PortSpec];

    /// Current config, keyed by wire name.
    fn config(&self) -> Config;

    /// Current parameter logs, keyed by wire name.
    fn params(&self) -> Params;

    /// Node id.
    fn id(&self) -> &str {
        &self.header().id
    }

    /// Loading policy.
    fn loading_policy(&self) -> LoadingPolicy {
        self.header().loading_policy
    }

    /// Label, if any.
    fn label(&self) -> Option<&str> {
        self.header().label.as_deref()
    }

    /// Look up an input port.
    fn input(&self, name: &str) -> Option<&'static PortSpec> {
        self.inputs().iter().find(|port| port.name == name)
    }

    /// Look up an output port.
    fn output(&self, name: &str) -> Option<&'static PortSpec> {
        self.outputs().iter().find(|port| port.name == name)
    }

    /// Materialize the generic node.
    fn to_node(&self) -> Node {
        let header = self.header();
        Node {
            id: header.id.clone(),
            kind: self.kind().to_string(),
            label: header.label.clone(),
            loading_policy: Some(header.loading_policy),
            params: self.params(),
            config: self.config(),
        }
    }

    /// Edge from this node to `target` using implicit ports.
    ///
    /// # Errors
    ///
    /// [`ConnectError::NotASource`] if this node has no outputs and
    /// [`ConnectError::NotATarget`] if `target` has no inputs.
    fn connect_to_target(&self, target: &dyn TypedNode) -> ConnectResult<Edge> {
        connect(self, target)
    }

    /// Edge from this node's `source_port` to `target`'s `target_port`.
    ///
    /// # Errors
    ///
    /// [`ConnectError::UnknownPort`] if either port is not declared and
    /// [`ConnectError::IncompatibleContentType`] if their content types differ.
    fn connect_to_target_via(
        &self,
        target: &dyn TypedNode,
        source_port: &str,
        target_port: &str,
    ) -> ConnectResult<Edge> {
        connect_ports(self, target, source_port, target_port)
    }

    /// Edge from `source` to this node using implicit ports.
    fn connect_to_source(&self, source: &dyn TypedNode) -> ConnectResult<Edge> {
        connect(source, self)
    }

    /// Edge from `source`'s `source_port` to this node's `target_port`.
    fn connect_to_source_via(
        &self,
        source: &dyn TypedNode,
        source_port: &str,
        target_port: &str,
    ) -> ConnectResult<Edge> {
        connect_ports(source, self, source_port, target_port)
    }
}

/// A concrete plugin node type that can be decoded from a generic [`Node`].
pub trait Plugin: TypedNode + Sized {
    /// Plugin identifier matched against [`Node::kind`].
    const KIND: &'static str;

    /// Decode a generic node, validating every config field.
    ///
    /// # Errors
    ///
    /// [`MappingError::UnexpectedKind`](crate::MappingError::UnexpectedKind)
    /// if the node is of another kind, otherwise the first field that fails to
    /// read.
    fn from_node(node: &Node) -> MappingResult<Self>;

    /// Declarative description of the plugin.
    fn schema() -> NodeSchema;
}

fn connect<S, T>(source: &S, target: &T) -> ConnectResult<Edge>
where
    S: TypedNode + ?Sized,
    T: TypedNode + ?Sized,
{
    if source.outputs().is_empty() {
        return Err(ConnectError::NotASource(source.id().to_string()));
    }
    if target.inputs().is_empty() {
        return Err(ConnectError::NotATarget(target.id().to_string()));
    }
    let edge = Edge::new(generate_id(), source.id(), target.id());
    tracing::debug!("node_connect: {} → {} (edge {})", edge.source, edge.target, edge.id);
    Ok(edge)
}

fn connect_ports<S, T>(
    source: &S,
    target: &T,
    source_port: &str,
    target_port: &str,
) -> ConnectResult<Edge>
where
    S: TypedNode + ?Sized,
    T: TypedNode + ?Sized,
{
    let output = source.output(source_port).ok_or_else(|| ConnectError::UnknownPort {
        node: source.id().to_string(),
        port: source_port.to_string(),
    })?;
    let input = target.input(target_port).ok_or_else(|| ConnectError::UnknownPort {
        node: target.id().to_string(),
        port: target_port.to_string(),
    })?;
    if output.content_type != input.content_type {
        return Err(ConnectError::IncompatibleContentType {
            source_type: output.content_type,
            target_type: input.content_type,
        });
    }
    let edge = Edge::new(generate_id(), source.id(), target.id()).with_ports(source_port, target_port);
    tracing::debug!(
        "node_connect: {}:{} → {}:{} (edge {})",
        edge.source,
        source_port,
        edge.target,
        target_port,
        edge.id
    );
    Ok(edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grapher_core::Port;

    const AUDIO_IN: &[PortSpec] = &[PortSpec::new("audio", ContentType::Audio)];
    const MIXED_OUT: &[PortSpec] = &[
        PortSpec::new("audio", ContentType::Audio),
        PortSpec::new("envelope", ContentType::Control),
    ];

    struct Probe {
        header: NodeHeader,
        inputs: &'static [PortSpec],
        outputs: &'static [PortSpec],
    }

    impl Probe {
        fn new(id: &str, inputs: &'static [PortSpec], outputs: &'static [PortSpec]) -> Self {
            Self {
                header: NodeHeader::new(Some(id.to_string()), LoadingPolicy::default()),
                inputs,
                outputs,
            }
        }
    }

    impl TypedNode for Probe {
        fn header(&self) -> &NodeHeader {
            &self.header
        }
        fn kind(&self) -> &'static str {
            "test.probe"
        }
        fn inputs(&self) -> &'static [PortSpec] {
            self.inputs
        }
        fn outputs(&self) -> &'static [PortSpec] {
            self.outputs
        }
        fn config(&self) -> Config {
            Config::new()
        }
        fn params(&self) -> Params {
            Params::new()
        }
    }

    #[test]
    fn generated_ids_are_unique_uuids() {
        let a = NodeHeader::new(None, LoadingPolicy::default());
        let b = NodeHeader::new(None, LoadingPolicy::default());
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn header_from_node_defaults_policy() {
        let header = NodeHeader::from_node(&Node::new("n", "k"));
        assert_eq!(header.loading_policy, LoadingPolicy::AllContentPlaythrough);
    }

    #[test]
    fn implicit_connection() {
        let source = Probe::new("src", &[], MIXED_OUT);
        let sink = Probe::new("dst", AUDIO_IN, &[]);
        let edge = source.connect_to_target(&sink).unwrap();
        assert_eq!((edge.source.as_str(), edge.target.as_str()), ("src", "dst"));
        assert_eq!(edge.source_port, Port::Default);
        assert_eq!(edge.target_port, Port::Default);
    }

    #[test]
    fn source_without_outputs() {
        let sink = Probe::new("dst", AUDIO_IN, &[]);
        assert_eq!(
            sink.connect_to_target(&sink),
            Err(ConnectError::NotASource("dst".to_string()))
        );
    }

    #[test]
    fn target_without_inputs() {
        let source = Probe::new("src", &[], MIXED_OUT);
        assert_eq!(
            source.connect_to_target(&source),
            Err(ConnectError::NotATarget("src".to_string()))
        );
    }

    #[test]
    fn mismatched_content_types() {
        let source = Probe::new("src", &[], MIXED_OUT);
        let sink = Probe::new("dst", AUDIO_IN, &[]);
        assert_eq!(
            source.connect_to_target_via(&sink, "envelope", "audio"),
            Err(ConnectError::IncompatibleContentType {
                source_type: ContentType::Control,
                target_type: ContentType::Audio,
            })
        );
    }

    #[test]
    fn unknown_ports() {
        let source = Probe::new("src", &[], MIXED_OUT);
        let sink = Probe::new("dst", AUDIO_IN, &[]);
        assert_eq!(
            source.connect_to_target_via(&sink, "video", "audio"),
            Err(ConnectError::UnknownPort {
                node: "src".to_string(),
                port: "video".to_string(),
            })
        );
        assert_eq!(
            source.connect_to_target_via(&sink, "audio", "sidechain"),
            Err(ConnectError::UnknownPort {
                node: "dst".to_string(),
                port: "sidechain".to_string(),
            })
        );
    }

    #[test]
    fn connect_to_source_swaps_roles() {
        let source = Probe::new("src", &[], MIXED_OUT);
        let sink = Probe::new("dst", AUDIO_IN, &[]);
        let edge = sink.connect_to_source_via(&source, "audio", "audio").unwrap();
        assert_eq!(edge.source, "src");
        assert_eq!(edge.source_port, Port::named("audio"));
        assert!(source.connect_to_source(&sink).is_err());
    }
}

//! Plugin registry and the closed set of built-in nodes.
//!
//! [`PluginNode`] holds any built-in node and dispatches on the generic node's
//! `kind` when decoding. [`PluginRegistry`] exposes the same table for
//! discovery: descriptors, kinds and schemas.
//!
//! # Example
//!
//! ```rust
//! use grapher_core::Node;
//! use grapher_typed::{MappingError, PluginNode, PluginRegistry, TypedNode};
//!
//! let node = Node::new("g", "com.nativeformat.plugin.waa.gain");
//! let typed = PluginNode::from_node(&node).unwrap();
//! assert!(matches!(typed, PluginNode::Gain(_)));
//!
//! let registry = PluginRegistry::new();
//! assert_eq!(registry.len(), 13);
//! assert!(matches!(
//!     registry.decode(&Node::new("x", "com.example.reverb")),
//!     Err(MappingError::UnknownNodeKind(_))
//! ));
//! ```

use grapher_core::{Config, Graph, Node, Params};

use crate::error::{MappingError, MappingResult};
use crate::nodes::{
    CompanderNode, CompressorNode, DelayNode, Eq3bandNode, ExpanderNode, FileNode, FilterNode,
    GainNode, LoopNode, NoiseNode, SilenceNode, SineNode, StretchNode,
};
use crate::schema::NodeSchema;
use crate::typed_node::{NodeHeader, Plugin, PortSpec, TypedNode};

/// Describes a plugin in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Plugin identifier.
    pub kind: &'static str,
    /// Short name, matching the [`PluginNode`] variant.
    pub name: &'static str,
    /// Brief description.
    pub description: &'static str,
}

/// Decoder function type for building a typed node from a generic one.
type PluginDecoder = fn(&Node) -> MappingResult<PluginNode>;

/// Internal entry in the registry.
#[derive(Clone, Copy)]
struct RegistryEntry {
    descriptor: PluginDescriptor,
    schema: fn() -> NodeSchema,
    decode: PluginDecoder,
}

fn decode<T>(node: &Node) -> MappingResult<PluginNode>
where
    T: Plugin + Into<PluginNode>,
{
    T::from_node(node).map(Into::into)
}

fn decode_with(entries: &[RegistryEntry], node: &Node) -> MappingResult<PluginNode> {
    let Some(entry) = entries.iter().find(|entry| entry.descriptor.kind == node.kind) else {
        tracing::debug!("registry_decode: no plugin for kind {}", node.kind);
        return Err(MappingError::UnknownNodeKind(node.kind.clone()));
    };
    tracing::debug!("registry_decode: {} as {}", node.id, entry.descriptor.name);
    (entry.decode)(node)
}

macro_rules! plugin_nodes {
    ($( $(#[$meta:meta])* $variant:ident($ty:ty) => $description:literal ),+ $(,)?) => {
        /// Any built-in plugin node.
        #[derive(Debug, Clone, PartialEq)]
        pub enum PluginNode {
            $( $(#[$meta])* $variant($ty), )+
        }

        $(
            impl From<$ty> for PluginNode {
                fn from(node: $ty) -> Self {
                    PluginNode::$variant(node)
                }
            }
        )+

        impl PluginNode {
            fn as_typed(&self) -> &dyn TypedNode {
                match self {
                    $( PluginNode::$variant(node) => node, )+
                }
            }

            /// Schema of the contained node's plugin.
            pub fn schema(&self) -> NodeSchema {
                match self {
                    $( PluginNode::$variant(_) => <$ty as Plugin>::schema(), )+
                }
            }
        }

        const BUILTIN: &[RegistryEntry] = &[
            $(
                RegistryEntry {
                    descriptor: PluginDescriptor {
                        kind: <$ty as Plugin>::KIND,
                        name: stringify!($variant),
                        description: $description,
                    },
                    schema: <$ty as Plugin>::schema,
                    decode: decode::<$ty>,
                },
            )+
        ];
    };
}

plugin_nodes! {
    /// Compressor.
    Compressor(CompressorNode) => "Downward compressor with sidechain and multiband support",
    /// Expander.
    Expander(ExpanderNode) => "Downward expander with sidechain and multiband support",
    /// Compander.
    Compander(CompanderNode) => "Combined compressor and expander",
    /// Delay.
    Delay(DelayNode) => "Variable delay line",
    /// Gain.
    Gain(GainNode) => "Amplitude scaling",
    /// Filter.
    Filter(FilterNode) => "Low, high or band pass filter",
    /// Three-band equalizer.
    Eq3band(Eq3bandNode) => "Three-band equalizer",
    /// Time stretch.
    Stretch(StretchNode) => "Time stretching and pitch shifting",
    /// Loop.
    Loop(LoopNode) => "Repeats a window of its input",
    /// File playback.
    File(FileNode) => "Audio file playback",
    /// Noise source.
    Noise(NoiseNode) => "White noise source",
    /// Silence source.
    Silence(SilenceNode) => "Silent source",
    /// Sine source.
    Sine(SineNode) => "Sine wave source",
}

impl PluginNode {
    /// Decode a generic node into the built-in type matching its kind.
    ///
    /// # Errors
    ///
    /// [`MappingError::UnknownNodeKind`] if no built-in plugin has this kind,
    /// otherwise the first field of the node that fails to read.
    pub fn from_node(node: &Node) -> MappingResult<Self> {
        decode_with(BUILTIN, node)
    }

    /// Decode every node of a graph, in order. The first failure aborts.
    ///
    /// # Errors
    ///
    /// Same as [`from_node`](Self::from_node).
    pub fn from_graph(graph: &Graph) -> MappingResult<Vec<Self>> {
        graph.nodes.iter().map(Self::from_node).collect()
    }
}

impl TypedNode for PluginNode {
    fn header(&self) -> &NodeHeader {
        self.as_typed().header()
    }

    fn kind(&self) -> &'static str {
        self.as_typed().kind()
    }

    fn inputs(&self) -> &'static [PortSpec] {
        self.as_typed().inputs()
    }

    fn outputs(&self) -> &'static [PortSpec] {
        self.as_typed().outputs()
    }

    fn config(&self) -> Config {
        self.as_typed().config()
    }

    fn params(&self) -> Params {
        self.as_typed().params()
    }
}

/// Registry of all built-in plugins.
pub struct PluginRegistry {
    entries: Vec<RegistryEntry>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginRegistry {
    /// Create a registry with every built-in plugin registered.
    pub fn new() -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(BUILTIN.len()),
        };
        registry.register_builtin_plugins();
        registry
    }

    fn register_builtin_plugins(&mut self) {
        for entry in BUILTIN {
            self.register(*entry);
        }
    }

    fn register(&mut self, entry: RegistryEntry) {
        self.entries.push(entry);
    }

    /// All registered plugins, in registration order.
    pub fn all_plugins(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.entries.iter().map(|entry| &entry.descriptor)
    }

    /// All registered kinds.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.descriptor.kind)
    }

    /// Look up a plugin by kind.
    pub fn get(&self, kind: &str) -> Option<&PluginDescriptor> {
        self.all_plugins().find(|descriptor| descriptor.kind == kind)
    }

    /// Schema of one plugin.
    pub fn schema(&self, kind: &str) -> Option<NodeSchema> {
        self.entries
            .iter()
            .find(|entry| entry.descriptor.kind == kind)
            .map(|entry| (entry.schema)())
    }

    /// Schemas of every plugin.
    pub fn schemas(&self) -> Vec<NodeSchema> {
        self.entries.iter().map(|entry| (entry.schema)()).collect()
    }

    /// Decode a generic node.
    ///
    /// # Errors
    ///
    /// Same as [`PluginNode::from_node`].
    pub fn decode(&self, node: &Node) -> MappingResult<PluginNode> {
        decode_with(&self.entries, node)
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{FileConfig, GainConfig};
    use grapher_core::Edge;
    use std::collections::HashSet;

    #[test]
    fn kinds_are_unique() {
        let registry = PluginRegistry::new();
        let kinds: HashSet<&str> = registry.kinds().collect();
        assert_eq!(kinds.len(), registry.len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn descriptor_lookup() {
        let registry = PluginRegistry::new();
        let file = registry.get("com.nativeformat.plugin.file.file").unwrap();
        assert_eq!(file.name, "File");
        assert!(registry.get("com.nativeformat.plugin.file").is_none());
    }

    #[test]
    fn schemas_match_their_kind() {
        let registry = PluginRegistry::new();
        for descriptor in registry.all_plugins() {
            let schema = registry.schema(descriptor.kind).unwrap();
            assert_eq!(schema.kind, descriptor.kind);
        }
        assert_eq!(registry.schemas().len(), registry.len());
    }

    #[test]
    fn source_only_plugins() {
        let sources: Vec<&str> = PluginRegistry::new()
            .schemas()
            .into_iter()
            .filter(|schema| !schema.is_target())
            .map(|schema| schema.kind)
            .collect();
        assert_eq!(
            sources,
            [
                "com.nativeformat.plugin.file.file",
                "com.nativeformat.plugin.noise.noise",
                "com.nativeformat.plugin.noise.silence",
                "com.nativeformat.plugin.wave.sine",
            ]
        );
    }

    #[test]
    fn file_schema_marks_file_required() {
        let schema = FileNode::schema();
        let required: Vec<&str> = schema.required_config().collect();
        assert_eq!(required, ["file"]);
        assert!(schema.params.is_empty());
    }

    #[test]
    fn plugin_node_delegates() {
        let file = FileNode::create(FileConfig::default().file("a.ogg".to_string())).unwrap();
        let gain = GainNode::create(GainConfig::default()).unwrap();
        let edge: Edge = PluginNode::from(file.clone())
            .connect_to_target(&PluginNode::from(gain.clone()))
            .unwrap();
        assert_eq!(edge.source, file.id());
        assert_eq!(edge.target, gain.id());

        let any = PluginNode::from(file.clone());
        assert_eq!(any.to_node(), file.to_node());
        assert_eq!(any.schema(), FileNode::schema());
    }

    #[test]
    fn decode_errors_propagate() {
        let node = Node::new("f", FileNode::KIND);
        assert_eq!(
            PluginNode::from_node(&node),
            Err(MappingError::MissingRequiredArgument("file".to_string()))
        );
    }

    #[test]
    fn from_graph_stops_at_unknown_kind() {
        let graph = Graph::new("g")
            .with_node(Node::new("a", GainNode::KIND))
            .with_node(Node::new("b", "com.example.unknown"));
        assert_eq!(
            PluginNode::from_graph(&graph),
            Err(MappingError::UnknownNodeKind("com.example.unknown".to_string()))
        );
    }
}

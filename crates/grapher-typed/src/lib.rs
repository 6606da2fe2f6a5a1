//! Strongly-typed plugin nodes for score graphs.
//!
//! `grapher-core` models a score as untyped JSON-shaped records. This crate
//! adds the typed layer on top:
//!
//! - **Mappers**: [`ArgMapper`] checks and converts one config field,
//!   [`ParamMapper`] rebuilds one automatable parameter
//! - **Parameters**: [`AudioParam`], an initial value plus an append-only log
//!   of automation commands
//! - **Nodes**: the [`TypedNode`] trait with port-checked edge construction,
//!   and the built-in plugins in [`nodes`]
//! - **Registry**: [`PluginNode`] and [`PluginRegistry`] decode any generic
//!   node by its `kind`
//!
//! # Example
//!
//! ```rust
//! use grapher_core::{Converter, Graph, Score, Time};
//! use grapher_typed::nodes::{FileConfig, FileNode, GainConfig, GainNode};
//! use grapher_typed::{PluginNode, TypedNode};
//!
//! let file = FileNode::create(FileConfig::default().file("spotify:track:XYZ".to_string())).unwrap();
//! let mut gain = GainNode::create(GainConfig::default()).unwrap();
//! gain.gain.set_value_at_time(0.5, Time::from_seconds(1.0)).unwrap();
//!
//! let edge = file.connect_to_target(&gain).unwrap();
//! let graph = Graph::new("graph")
//!     .with_node(file.to_node())
//!     .with_node(gain.to_node())
//!     .with_edge(edge);
//!
//! let converter = Converter::default();
//! let json = converter.to_json_string(&Score::new(graph)).unwrap();
//!
//! let score = converter.from_json_str(&json).unwrap();
//! let nodes = PluginNode::from_graph(&score.graph).unwrap();
//! assert_eq!(nodes[0], PluginNode::File(file));
//! assert_eq!(nodes[1], PluginNode::Gain(gain));
//! ```

mod arg;
mod error;
mod macros;
mod param;
mod registry;
mod schema;
mod typed_node;

pub mod nodes;

pub use arg::{ArgKind, ArgMapper, ArgValue, ScalarArg, ScalarKind, ValueError, ValueKind};
pub use error::{ConnectError, ConnectResult, MappingError, MappingResult};
pub use param::{AudioParam, ParamMapper, TypedParam};
pub use registry::{PluginDescriptor, PluginNode, PluginRegistry};
pub use schema::{ArgSpec, NodeSchema, ParamSpec};
pub use typed_node::{NodeHeader, Plugin, PortSpec, TypedNode, generate_id};

pub use grapher_core::{Config, ContentType, LoadingPolicy, Node, Params, Value, wire_enum};

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}

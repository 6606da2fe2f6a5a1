//! Score document model and JSON codec for plugin graphs.
//!
//! A *score* describes a directed graph of audio plugin nodes together with
//! their static configuration and their time-varying parameter automation. The
//! document is exchanged as JSON with a native audio engine; this crate owns the
//! untyped half of that contract:
//!
//! - **Primitives**: [`Time`] (integer nanoseconds) and [`Command`] (one
//!   automation instruction)
//! - **Wire enums**: [`LoadingPolicy`] and [`ContentType`], plus the
//!   [`wire_enum!`] macro used to declare plugin-specific enums
//! - **Document model**: [`Node`], [`Edge`], [`Port`], [`Graph`], [`Script`],
//!   [`Score`]
//! - **Codec**: [`Converter`], configured through [`ConverterOptions`]
//!
//! Strongly-typed plugin nodes and the mapping layer live in `grapher-typed`.
//!
//! # Example
//!
//! ```rust
//! use grapher_core::{Converter, Edge, Graph, Node, Score};
//!
//! let graph = Graph::new("graph-1")
//!     .with_node(Node::new("a", "com.nativeformat.plugin.wave.sine"))
//!     .with_node(Node::new("b", "com.nativeformat.plugin.waa.gain"))
//!     .with_edge(Edge::new("e", "a", "b"));
//!
//! let converter = Converter::default();
//! let json = converter.to_json_string(&Score::new(graph)).unwrap();
//! let score = converter.from_json_str(&json).unwrap();
//! assert_eq!(score.graph.nodes.len(), 2);
//! ```

mod codec;
mod command;
mod edge;
mod error;
mod graph;
mod node;
mod options;
mod score;
mod time;

/// Wire enum declarations shared by the document model and plugin nodes.
pub mod wire;

pub use codec::Converter;
pub use command::Command;
pub use edge::{Edge, Port};
pub use error::{ScoreError, ScoreResult, UnrecognizedEnumValue};
pub use graph::{Graph, Script};
pub use node::{Config, Node, Params};
pub use options::ConverterOptions;
pub use score::{FORMAT_VERSION, Score};
pub use time::Time;
pub use wire::{ContentType, LoadingPolicy};

/// Generic JSON value tree produced by the codec.
pub use serde_json::{Map, Value};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

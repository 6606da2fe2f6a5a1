//! The serialization root.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// Format version stamped on every score built with [`Score::new`].
pub const FORMAT_VERSION: &str = "1.2.19";

/// A graph plus the format version it was written against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// The audio graph.
    pub graph: Graph,
    /// Format version string, e.g. `1.2.19`.
    pub version: String,
}

impl Score {
    /// Wrap a graph, stamping the current [`FORMAT_VERSION`].
    pub fn new(graph: Graph) -> Self {
        Self::with_version(graph, FORMAT_VERSION)
    }

    /// Wrap a graph with an explicit version string.
    pub fn with_version(graph: Graph, version: impl Into<String>) -> Self {
        Self {
            graph,
            version: version.into(),
        }
    }
}

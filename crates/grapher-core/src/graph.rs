//! Graph containers.
//!
//! A [`Graph`] owns its nodes, edges and scripts by value and applies no
//! structural checks as it is built or decoded. Referential integrity (every
//! edge endpoint names a node in the same graph, node ids are unique) is
//! checked on demand by [`Graph::validate_references`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::error::{ScoreError, ScoreResult};
use crate::node::Node;
use crate::wire::LoadingPolicy;

/// A named piece of code the engine runs against a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Unique name of the script.
    pub name: String,
    /// Script source.
    pub code: String,
}

impl Script {
    /// Create a script.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// A node/edge collection describing one audio processing pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    /// Identifier of the graph.
    pub id: String,

    /// Optional loading policy applied to the graph as a whole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_policy: Option<LoadingPolicy>,

    /// Nodes in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<Node>,

    /// Edges in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<Edge>,

    /// Scripts in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<Script>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            loading_policy: None,
            nodes: Vec::new(),
            edges: Vec::new(),
            scripts: Vec::new(),
        }
    }

    /// Set the graph-level loading policy.
    pub fn with_loading_policy(mut self, policy: LoadingPolicy) -> Self {
        self.loading_policy = Some(policy);
        self
    }

    /// Add a node.
    pub fn with_node(mut self, node: Node) -> Self {
        self.add_node(node);
        self
    }

    /// Add several nodes.
    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        for node in nodes {
            self.add_node(node);
        }
        self
    }

    /// Add an edge.
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.add_edge(edge);
        self
    }

    /// Add several edges.
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = Edge>) -> Self {
        for edge in edges {
            self.add_edge(edge);
        }
        self
    }

    /// Add a script.
    pub fn with_script(mut self, script: Script) -> Self {
        self.scripts.push(script);
        self
    }

    /// Append a node.
    pub fn add_node(&mut self, node: Node) {
        tracing::debug!("graph_add: node {} ({})", node.id, node.kind);
        self.nodes.push(node);
    }

    /// Append an edge. Endpoints are not checked here.
    pub fn add_edge(&mut self, edge: Edge) {
        tracing::debug!("graph_connect: {} → {} (edge {})", edge.source, edge.target, edge.id);
        self.edges.push(edge);
    }

    /// Find a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges leaving the given node.
    pub fn edges_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// Edges entering the given node.
    pub fn edges_to<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.target == id)
    }

    /// Check that node ids are unique and every edge endpoint exists.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::DuplicateNodeId`] for the first repeated id, or
    /// [`ScoreError::DanglingEdge`] for the first edge whose source or target
    /// is not a node of this graph.
    pub fn validate_references(&self) -> ScoreResult<()> {
        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                tracing::warn!("graph_validate: duplicate node id {}", node.id);
                return Err(ScoreError::DuplicateNodeId(node.id.clone()));
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    tracing::warn!("graph_validate: edge {} → unknown node {endpoint}", edge.id);
                    return Err(ScoreError::DanglingEdge {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

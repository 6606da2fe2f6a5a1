//! Generic plugin node records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::command::Command;
use crate::wire::LoadingPolicy;

/// Static configuration of a node, keyed by field name.
pub type Config = Map<String, Value>;

/// Time-varying parameters of a node: each name maps to its command log.
pub type Params = BTreeMap<String, Vec<Command>>;

/// One plugin instance in a graph, in its untyped wire form.
///
/// `kind` names the plugin and decides how `config` and `params` are
/// interpreted; the typed layer in `grapher-typed` checks them against the
/// plugin's declared schema.
///
/// # JSON Format
///
/// ```json
/// {
///   "id": "3796a523-39fb-4a87-934d-bf7c2c3c0a21",
///   "kind": "com.nativeformat.plugin.waa.gain",
///   "loadingPolicy": "allContentPlaythrough",
///   "params": { "gain": [{ "name": "setValueAtTime", "args": { "value": 0.5, "startTime": 0 } }] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Identifier, unique within a graph.
    pub id: String,

    /// Plugin identifier, e.g. `com.nativeformat.plugin.file.file`.
    pub kind: String,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Optional loading policy for this node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_policy: Option<LoadingPolicy>,

    /// Parameter automation.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: Params,

    /// Static configuration.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub config: Config,
}

impl Node {
    /// Create a node with no label, policy, params or config.
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            label: None,
            loading_policy: None,
            params: Params::new(),
            config: Config::new(),
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the loading policy.
    pub fn with_loading_policy(mut self, policy: LoadingPolicy) -> Self {
        self.loading_policy = Some(policy);
        self
    }

    /// Add a configuration value.
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// Add a parameter command log.
    pub fn with_param(mut self, key: impl Into<String>, commands: Vec<Command>) -> Self {
        self.params.insert(key.into(), commands);
        self
    }

    /// Look up one configuration value.
    pub fn config_value(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }

    /// Look up one parameter's commands.
    pub fn param_commands(&self, key: &str) -> Option<&[Command]> {
        self.params.get(key).map(Vec::as_slice)
    }
}

//! Declarative descriptions of plugin nodes.
//!
//! A [`NodeSchema`] is derived from the same mappers a node uses to read and
//! write itself, so it always agrees with the wire behavior.

use grapher_core::Value;

use crate::arg::ArgKind;
use crate::typed_node::PortSpec;

/// One config field of a plugin.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgSpec {
    /// Wire name.
    pub name: &'static str,
    /// Declared kind.
    pub kind: ArgKind,
    /// Whether the field has no default.
    pub required: bool,
    /// Encoded default, for optional fields.
    pub default: Option<Value>,
}

/// One automatable parameter of a plugin.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Wire name.
    pub name: &'static str,
    /// Encoded initial value.
    pub initial_value: Value,
}

/// Everything a document needs to know about one plugin kind.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSchema {
    /// Plugin identifier.
    pub kind: &'static str,
    /// Declared inputs.
    pub inputs: &'static [PortSpec],
    /// Declared outputs.
    pub outputs: &'static [PortSpec],
    /// Config fields in declaration order.
    pub config: Vec<ArgSpec>,
    /// Parameters in declaration order.
    pub params: Vec<ParamSpec>,
}

impl NodeSchema {
    /// Look up a config field by name.
    pub fn config_field(&self, name: &str) -> Option<&ArgSpec> {
        self.config.iter().find(|spec| spec.name == name)
    }

    /// Look up a parameter by name.
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|spec| spec.name == name)
    }

    /// Names of config fields that must be present in a document.
    pub fn required_config(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.config
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name)
    }

    /// Whether the plugin can feed other nodes.
    pub fn is_source(&self) -> bool {
        !self.outputs.is_empty()
    }

    /// Whether the plugin can be fed by other nodes.
    pub fn is_target(&self) -> bool {
        !self.inputs.is_empty()
    }
}

//! Automation commands.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One recorded automation instruction, such as "set value at time".
///
/// A command is a name plus a map of named arguments. The argument shapes are
/// defined by the consuming engine and treated as opaque here. Commands are
/// built once with [`Command::new`] and [`Command::with_arg`] and are immutable
/// afterwards.
///
/// # Example
///
/// ```rust
/// use grapher_core::{Command, Time};
///
/// let cmd = Command::new("setValueAtTime")
///     .with_arg("value", 0.5)
///     .with_arg("startTime", Time::from_seconds(1.0));
///
/// assert_eq!(cmd.name(), "setValueAtTime");
/// assert_eq!(cmd.arg("startTime").and_then(|v| v.as_i64()), Some(1_000_000_000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    name: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    args: Map<String, Value>,
}

impl Command {
    /// Create a command with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Map::new(),
        }
    }

    /// Add an argument, replacing any previous value under the same key.
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// The command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All arguments, keyed by name.
    pub fn args(&self) -> &Map<String, Value> {
        &self.args
    }

    /// Look up one argument.
    pub fn arg(&self, key: &str) -> Option<&Value> {
        self.args.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_collects_args() {
        let cmd = Command::new("setValueCurveAtTime")
            .with_arg("values", vec![0.0, 1.0])
            .with_arg("duration", 10);
        assert_eq!(cmd.args().len(), 2);
        assert_eq!(cmd.arg("values"), Some(&json!([0.0, 1.0])));
        assert!(cmd.arg("startTime").is_none());
    }

    #[test]
    fn with_arg_replaces_existing_key() {
        let cmd = Command::new("x").with_arg("value", 1).with_arg("value", 2);
        assert_eq!(cmd.arg("value"), Some(&json!(2)));
    }

    #[test]
    fn missing_args_decode_as_empty() {
        let cmd: Command = serde_json::from_value(json!({ "name": "noop" })).unwrap();
        assert_eq!(cmd, Command::new("noop"));
    }

    #[test]
    fn empty_args_are_omitted() {
        let json = serde_json::to_value(Command::new("noop")).unwrap();
        assert_eq!(json, json!({ "name": "noop" }));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let cmd: Command =
            serde_json::from_value(json!({ "name": "n", "args": {}, "extra": true })).unwrap();
        assert_eq!(cmd.name(), "n");
    }
}

//! JSON encoding and decoding of scores.

use serde_json::Value;

use crate::error::ScoreResult;
use crate::node::Node;
use crate::options::ConverterOptions;
use crate::score::Score;

/// Converts scores to and from JSON text.
///
/// Decode errors from the JSON codec are passed through unchanged as
/// [`ScoreError::Json`](crate::ScoreError::Json). Unknown fields are ignored on
/// read and empty collections are omitted on write.
///
/// # Example
///
/// ```rust
/// use grapher_core::{Converter, ConverterOptions};
///
/// let converter = Converter::new(ConverterOptions::new().with_reference_checks(true));
/// let json = r#"{"graph":{"id":"g","edges":[{"id":"e","source":"a","target":"b"}]},"version":"1.2.19"}"#;
/// assert!(converter.from_json_str(json).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConverterOptions,
}

impl Converter {
    /// Create a converter with the given options.
    pub fn new(options: ConverterOptions) -> Self {
        Self { options }
    }

    /// The active options.
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Parse a score from JSON text.
    pub fn from_json_str(&self, json: &str) -> ScoreResult<Score> {
        let score: Score = serde_json::from_str(json)?;
        self.check(&score)?;
        tracing::debug!(
            "score_decode: graph {} ({} nodes, {} edges, version {})",
            score.graph.id,
            score.graph.nodes.len(),
            score.graph.edges.len(),
            score.version
        );
        Ok(score)
    }

    /// Encode a score as JSON text.
    pub fn to_json_string(&self, score: &Score) -> ScoreResult<String> {
        self.check(score)?;
        let text = if self.options.pretty {
            serde_json::to_string_pretty(score)?
        } else {
            serde_json::to_string(score)?
        };
        tracing::debug!("score_encode: graph {} ({} bytes)", score.graph.id, text.len());
        Ok(text)
    }

    /// Build a score from an already-parsed value tree.
    pub fn from_value(&self, value: Value) -> ScoreResult<Score> {
        let score: Score = serde_json::from_value(value)?;
        self.check(&score)?;
        Ok(score)
    }

    /// Convert a score into a value tree.
    pub fn to_value(&self, score: &Score) -> ScoreResult<Value> {
        self.check(score)?;
        Ok(serde_json::to_value(score)?)
    }

    /// Parse a single node from JSON text.
    pub fn node_from_json_str(&self, json: &str) -> ScoreResult<Node> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode a single node as JSON text.
    pub fn node_to_json_string(&self, node: &Node) -> ScoreResult<String> {
        if self.options.pretty {
            Ok(serde_json::to_string_pretty(node)?)
        } else {
            Ok(serde_json::to_string(node)?)
        }
    }

    fn check(&self, score: &Score) -> ScoreResult<()> {
        if self.options.check_references {
            score.graph.validate_references()?;
        }
        Ok(())
    }
}

//! Error types for document and codec operations.

use thiserror::Error;

/// A string that does not name any variant of a wire enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized {type_name} value '{value}'")]
pub struct UnrecognizedEnumValue {
    /// Rust name of the enum being decoded.
    pub type_name: &'static str,
    /// The rejected wire string.
    pub value: String,
}

impl UnrecognizedEnumValue {
    /// Create an error for `value` not matching any variant of `type_name`.
    pub fn new(type_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            type_name,
            value: value.into(),
        }
    }
}

/// Errors that can occur while encoding, decoding or checking a score.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The JSON codec rejected the input or failed to encode.
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse TOML converter options
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML converter options
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A wire enum string was not recognized.
    #[error(transparent)]
    UnrecognizedEnumValue(#[from] UnrecognizedEnumValue),

    /// An edge references a node id that is not part of the graph.
    #[error("edge '{edge}' references unknown node '{node}'")]
    DanglingEdge {
        /// Id of the offending edge.
        edge: String,
        /// The node id that could not be found.
        node: String,
    },

    /// Two nodes in one graph share an id.
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(String),
}

/// Result type for score operations.
pub type ScoreResult<T> = Result<T, ScoreError>;

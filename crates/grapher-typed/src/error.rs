//! Error types for typed mapping and graph wiring.

use grapher_core::{ContentType, UnrecognizedEnumValue};
use thiserror::Error;

use crate::arg::{ArgKind, ValueKind};

/// Errors raised while reading typed values out of generic nodes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MappingError {
    /// A field without a default value is absent.
    #[error("arg={0} is not set and has no default value")]
    MissingRequiredArgument(String),

    /// A field is present but its JSON kind does not match the declared kind.
    #[error("arg={field} expects kind={expected} but value is kind={actual}")]
    KindMismatch {
        /// Name of the field.
        field: String,
        /// Kind declared by the field's mapper.
        expected: ArgKind,
        /// Kind of the value that was found.
        actual: ValueKind,
    },

    /// A node of another plugin kind was handed to a typed constructor.
    #[error("expected plugin kind={expected} but node is kind={actual}")]
    UnexpectedKind {
        /// Kind the typed node requires.
        expected: &'static str,
        /// Kind found on the node.
        actual: String,
    },

    /// An enum field holds a string that names no variant.
    #[error("arg={field}: {source}")]
    UnrecognizedEnumValue {
        /// Name of the field.
        field: String,
        /// The underlying decode failure.
        #[source]
        source: UnrecognizedEnumValue,
    },

    /// A float value is infinite or NaN and has no JSON encoding.
    #[error("arg={0} must be a finite number")]
    NonFiniteValue(String),

    /// No registered plugin handles this kind.
    #[error("unknown node kind: {0}")]
    UnknownNodeKind(String),
}

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// Errors raised when wiring two typed nodes together.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectError {
    /// The would-be source declares no outputs.
    #[error("node={0} cannot be a source")]
    NotASource(String),

    /// The would-be target declares no inputs.
    #[error("node={0} cannot be a target")]
    NotATarget(String),

    /// A named port is not declared on the node.
    #[error("node={node} does not have a port named {port}")]
    UnknownPort {
        /// Id of the node that was searched.
        node: String,
        /// The missing port name.
        port: String,
    },

    /// The two named ports carry different content.
    #[error("incompatible types for edge with source={source_type} target={target_type}")]
    IncompatibleContentType {
        /// Content type of the source output.
        source_type: ContentType,
        /// Content type of the target input.
        target_type: ContentType,
    },
}

/// Result type for connection operations.
pub type ConnectResult<T> = Result<T, ConnectError>;

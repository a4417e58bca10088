//! Error types for schema loading and code generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Error type for generator operations
///
/// Every input-correctness error is raised while a schema is being loaded and
/// resolved, before anything is emitted or written.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// A version-range expression does not match the grammar
    #[error("malformed version range '{expression}': {reason}")]
    MalformedRange { expression: String, reason: String },

    /// A message name does not follow the Request/Response/Header convention
    #[error("invalid message name: {0}")]
    InvalidName(String),

    /// The declared message type is not request, response or header
    #[error("unknown message kind: {0}")]
    UnknownMessageKind(String),

    /// A field declares a type the generator cannot map
    #[error("unsupported type '{ty}' for field {field}")]
    UnsupportedType { field: String, ty: String },

    /// A field's default value does not fit its type
    #[error("invalid default {value} for field {field}")]
    InvalidDefault { field: String, value: String },

    /// A field refers to a structure that is never defined
    #[error("field {field} refers to undefined structure {name}")]
    UnknownStruct { field: String, name: String },

    /// A generated class would declare the same method twice, or redeclare a
    /// final method of `java.lang.Object`
    #[error("method {method} of class {class} conflicts with another method")]
    MethodConflict { class: String, method: String },

    /// The schema document could not be parsed
    #[error("failed to parse schema {path}: {source}")]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading a schema or writing generated output failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generator configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl GeneratorError {
    /// Shorthand for a [`GeneratorError::MalformedRange`]
    pub fn malformed_range(expression: impl Into<String>, reason: impl Into<String>) -> Self {
        GeneratorError::MalformedRange {
            expression: expression.into(),
            reason: reason.into(),
        }
    }
}

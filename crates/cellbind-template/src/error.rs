//! Template error types

use thiserror::Error;

use crate::path::KeyType;

/// Result type for template operations
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while reading descriptors or decoding a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Descriptor does not match any recognized shape
    #[error("Malformed descriptor: '{0}'")]
    MalformedDescriptor(String),

    /// Model path does not match the path grammar
    #[error("Invalid model path: '{0}'")]
    InvalidModelPath(String),

    /// Collection indexed with a key of the wrong type
    #[error("Collection with {expected} keys was indexed by {actual}")]
    KeyTypeMismatch { expected: KeyType, actual: KeyType },

    /// Indexer is neither a quoted string nor an integer
    #[error("Only strings and ints are supported as collection indexers, got '{0}'")]
    UnsupportedKeyKind(String),

    /// Collection longer than the enumerable ceiling
    #[error("Lists longer than {limit} are not supported (got {length})")]
    CollectionTooLarge { length: usize, limit: usize },

    /// Declared element count is neither -1 nor non-negative
    #[error("Invalid enumerable length: {0}")]
    InvalidLength(i64),

    /// No atomic parser registered for a model type
    #[error("No parser for model type: {0}")]
    UnsupportedModelType(String),

    /// Traversal state popped without a matching push
    #[error("Table parser state stack underflow")]
    StackUnderflow,

    /// Two templates declared under the same name
    #[error("Template already declared: {0}")]
    DuplicateTemplate(String),

    /// Two template regions share cells
    #[error("Templates '{0}' and '{1}' overlap")]
    OverlappingTemplates(String, String),

    /// Invalid cell reference or rectangle
    #[error(transparent)]
    Geometry(#[from] cellbind_core::Error),
}

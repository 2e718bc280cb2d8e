//! Error types for the Sever library.

use thiserror::Error;

/// Main error type for Sever operations.
#[derive(Debug, Error)]
pub enum SeverError {
    /// Input text could not be recovered into any document tree.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// The path expression itself is syntactically invalid.
    #[error("invalid path expression '{expression}': {message}")]
    InvalidPathExpression {
        expression: String,
        message: String,
    },

    /// The path expression matched zero nodes.
    #[error("no node matches path expression '{0}'")]
    NodeNotFound(String),

    /// The target node is the document root, which cannot be spliced.
    #[error("cannot split the document root")]
    CannotSplitRoot,

    /// Transport or status failure calling the model gateway.
    #[error("model gateway unavailable: {0}")]
    ModelUnavailable(String),

    /// The categorization response was not parseable markup.
    #[error("model returned invalid markup: {0}")]
    InvalidModelOutput(String),

    /// Error reading or writing the split store.
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for Sever operations.
pub type Result<T> = std::result::Result<T, SeverError>;

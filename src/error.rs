//! Error types for the quill-link client library.

use crate::models::ResultRow;
use thiserror::Error;

/// Result type for quill-link operations.
pub type Result<T> = std::result::Result<T, QuillLinkError>;

/// Errors reported by the execution layer or surfaced from the driver.
///
/// Driver-originated failures (`TimeoutError`, `Unavailable`,
/// `ConnectionError`, `ServerError`) pass through this layer verbatim —
/// the executor never remaps one variant into another. The only error
/// produced locally is [`QuillLinkError::BatchMismatch`], raised before any
/// network interaction.
#[derive(Debug, Error)]
pub enum QuillLinkError {
    /// Invalid client configuration (missing nodes, bad factory input)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Credentials rejected while establishing the session
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Atomic batch rejected because statements and parameter sets
    /// do not pair up one-to-one
    #[error("Batch validation error: {statements} statements but {param_sets} parameter sets")]
    BatchMismatch { statements: usize, param_sets: usize },

    /// The driver gave up waiting for the required replica acknowledgments
    #[error("Request timed out: {0}")]
    TimeoutError(String),

    /// Not enough live replicas to satisfy the requested consistency level
    #[error("Not enough replicas available: {0}")]
    Unavailable(String),

    /// Transport-level failure on the session connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Any other failure reported by the cluster
    #[error("Server error: {0}")]
    ServerError(String),

    /// Closing the row cursor failed after some rows were already read.
    ///
    /// Cursor close is where drivers surface deferred and connection-level
    /// errors, so it is always checked. The rows materialized before the
    /// failure are carried here untouched — callers get both the partial
    /// result set and the original driver error.
    #[error("Cursor close failed after {} rows were read: {source}", .partial.len())]
    CursorClose {
        partial: Vec<ResultRow>,
        #[source]
        source: Box<QuillLinkError>,
    },
}

impl QuillLinkError {
    /// Rows that were materialized before a cursor-close failure, if any.
    pub fn partial_rows(&self) -> Option<&[ResultRow]> {
        match self {
            Self::CursorClose { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

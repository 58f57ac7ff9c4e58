//! Error types for the polaris-snippets library

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for snippet pipeline operations
pub type Result<T> = std::result::Result<T, SnippetError>;

/// Errors that can occur during snippet generation
#[derive(Debug, Error)]
pub enum SnippetError {
    /// The component source tree does not exist or is not a directory
    #[error("Components directory not found: {0}")]
    ComponentsDirNotFound(PathBuf),
    /// A pattern used by the splitter failed to compile
    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),
    /// A lookaround scan failed to compile or exceeded its backtrack limit
    #[error("Scope scan error: {0}")]
    ScopeError(#[from] fancy_regex::Error),
    /// Failed to serialize the snippet mapping
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Other error
    #[error("Error: {0}")]
    Other(String),
}

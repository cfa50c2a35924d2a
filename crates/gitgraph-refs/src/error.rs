//! Error types for reference operations.

use thiserror::Error;

/// Errors that can occur during reference operations.
#[derive(Debug, Error)]
pub enum RefError {
    /// The reference was not found.
    #[error("ref not found: {name}")]
    NotFound { name: String },

    /// The name is not a syntactically valid reference name.
    #[error("invalid ref name: {name}: {reason}")]
    InvalidName { name: String, reason: String },

    /// The reference exists but its contents cannot be interpreted.
    #[error("malformed ref {name}: {reason}")]
    Malformed { name: String, reason: String },

    /// Failure reported by the ref storage backend.
    #[error("ref backend error: {0}")]
    Backend(String),
}

/// Convenience type alias for ref operations.
pub type Result<T> = std::result::Result<T, RefError>;

/// Alias used by crates that import several `Result` types.
pub type RefResult<T> = Result<T>;

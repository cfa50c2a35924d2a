//! Error types for graph walking.

use gitgraph_refs::RefError;
use gitgraph_store::StoreError;
use gitgraph_types::ObjectId;

/// Errors that abort a walk.
///
/// Every variant is fatal: the walk stops at the first failure and no
/// partial [`WalkState`](crate::WalkState) is returned.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// A reachable object is absent from the store.
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),

    /// An object payload is malformed, or an object is not of the kind its
    /// referrer requires.
    #[error("cannot decode object {id}: {reason}")]
    Decode { id: ObjectId, reason: String },

    /// A root argument is neither a known reference nor a stored hash.
    #[error("not a reference or object in this repository: {0}")]
    UnresolvableRoot(String),

    /// A reference chain is broken or cyclic.
    #[error("cannot resolve reference {name}: {reason}")]
    ReferenceResolution { name: String, reason: String },

    /// The store backend failed.
    #[error("store error: {0}")]
    Backend(String),
}

/// Convenience alias for walk results.
pub type WalkResult<T> = Result<T, WalkError>;

impl From<StoreError> for WalkError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::ObjectNotFound(id),
            StoreError::CorruptObject { id, reason } => Self::Decode { id, reason },
            other @ (StoreError::Serialization(_) | StoreError::Backend(_) | StoreError::Io(_)) => {
                Self::Backend(other.to_string())
            }
        }
    }
}

impl From<RefError> for WalkError {
    fn from(err: RefError) -> Self {
        match err {
            RefError::NotFound { name } => Self::ReferenceResolution {
                name,
                reason: "reference does not exist".into(),
            },
            RefError::InvalidName { name, reason } | RefError::Malformed { name, reason } => {
                Self::ReferenceResolution { name, reason }
            }
            RefError::Backend(msg) => Self::Backend(msg),
        }
    }
}

//! On-disk git repositories for git-graphviz.
//!
//! [`GitRepository`] wraps a [`gix::Repository`] and implements both
//! [`ObjectStore`](gitgraph_store::ObjectStore) and
//! [`RefStore`](gitgraph_refs::RefStore), decoding loose and packed objects
//! into the crate-neutral object model. [`RepositoryLocation`] decides
//! which repository to open from `GIT_DIR` / `GIT_WORK_TREE`.
//!
//! No other crate in the workspace imports gix.

pub mod error;
pub mod location;
pub mod repository;

pub use error::{GitError, GitResult};
pub use location::RepositoryLocation;
pub use repository::GitRepository;

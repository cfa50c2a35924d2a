//! Foundation types for git-graphviz.
//!
//! Every other crate in the workspace depends on `gitgraph-types` for the
//! two vocabulary types of the object graph.
//!
//! # Key Types
//!
//! - [`ObjectId`] - Fixed-width content hash, the primary key of every object
//! - [`ObjectKind`] - The four object kinds: blob, tree, commit, tag

pub mod error;
pub mod kind;
pub mod object;

pub use error::TypeError;
pub use kind::ObjectKind;
pub use object::ObjectId;

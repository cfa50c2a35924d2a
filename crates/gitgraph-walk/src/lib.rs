//! Object graph discovery for git-graphviz.
//!
//! The [`Walker`] starts from a set of roots (reference names, object
//! hashes, or everything in the store), queries the object and ref stores,
//! and produces a [`WalkState`]: four disjoint per-kind node sets, the
//! references it processed, and every containment edge it saw.
//!
//! # Invariants
//!
//! - A hash belongs to at most one kind set and is expanded at most once.
//! - Edges are never deduplicated: two containment relations to the same
//!   target produce two edges.
//! - Each reference name is processed at most once; a symbolic chain that
//!   loops back on itself is an error, not an infinite walk.
//! - Traversal uses an explicit stack, so history depth does not consume
//!   call stack.

pub mod error;
pub mod state;
pub mod walker;

#[cfg(test)]
mod proptests;

pub use error::{WalkError, WalkResult};
pub use state::{Edge, NodeId, WalkState};
pub use walker::Walker;

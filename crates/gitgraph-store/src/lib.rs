//! Object model and content-addressed object storage for git-graphviz.
//!
//! The object store is the leaf dependency of the graph walker: it answers
//! "what is the object with this hash?" and "which objects exist?". Concrete
//! backends live elsewhere (`gitgraph-git` for on-disk repositories); this
//! crate defines the model they decode into and an in-memory backend.
//!
//! # Object Types
//!
//! - [`Blob`] -- raw content, no outgoing edges
//! - [`Tree`] -- ordered directory entries `(mode, name, target)`
//! - [`Commit`] -- root tree plus parent commits
//! - [`Tag`] -- a labeled pointer to any object
//!
//! All four are variants of the [`Object`] sum type.
//!
//! # Storage Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`InMemoryObjectStore`] -- `HashMap`-based store for tests and embedding

pub mod error;
pub mod hasher;
pub mod memory;
pub mod object;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use hasher::ContentHasher;
pub use memory::InMemoryObjectStore;
pub use object::{Blob, Commit, EntryMode, Object, StoredObject, Tag, Tree, TreeEntry};
pub use traits::ObjectStore;

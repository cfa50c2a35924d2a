//! Named references for git-graphviz.
//!
//! References are the human-readable entry points into the object graph.
//! A reference either names an object directly or names another reference
//! (a symbolic ref such as `HEAD -> refs/heads/main`). Chains of symbolic
//! refs must end in a direct ref; following them is the walker's job, this
//! crate only stores and lists them.
//!
//! # Modules
//!
//! - [`error`] - Error types for ref operations
//! - [`types`] - [`Reference`] and [`RefTarget`]
//! - [`traits`] - The [`RefStore`] trait defining the storage interface
//! - [`names`] - Reference name validation
//! - [`memory`] - In-memory [`InMemoryRefStore`] for tests

pub mod error;
pub mod memory;
pub mod names;
pub mod traits;
pub mod types;

pub use error::{RefError, RefResult, Result};
pub use memory::InMemoryRefStore;
pub use names::validate_ref_name;
pub use traits::RefStore;
pub use types::{RefTarget, Reference};

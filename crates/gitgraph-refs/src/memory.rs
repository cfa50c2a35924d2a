//! In-memory reference store for testing and ephemeral use.
//!
//! [`InMemoryRefStore`] stores all refs in a `BTreeMap` protected by a
//! `RwLock`. It resolves short names the way git does, so tests can use
//! `main` where a repository on disk would accept it.

use std::collections::BTreeMap;
use std::sync::RwLock;

use tracing::trace;

use crate::error::{RefError, Result};
use crate::names::validate_ref_name;
use crate::traits::RefStore;
use crate::types::Reference;

/// Prefixes tried, in order, when a short name has no exact match.
const SHORT_NAME_RULES: &[&str] = &["refs/", "refs/tags/", "refs/heads/", "refs/remotes/"];

/// An in-memory implementation of [`RefStore`].
///
/// All data lives in a `BTreeMap` behind a `RwLock`. Data is lost when the
/// store is dropped.
#[derive(Debug, Default)]
pub struct InMemoryRefStore {
    refs: RwLock<BTreeMap<String, Reference>>,
}

impl InMemoryRefStore {
    /// Create a new empty ref store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a ref under its own name.
    ///
    /// Symbolic targets are not checked: a ref may point at a name that
    /// does not exist.
    pub fn write_ref(&self, reference: Reference) -> Result<()> {
        validate_ref_name(&reference.name)?;
        let mut refs = self
            .refs
            .write()
            .map_err(|e| RefError::Backend(format!("lock poisoned: {e}")))?;
        trace!(name = %reference.name, target = %reference.target, "writing ref");
        refs.insert(reference.name.clone(), reference);
        Ok(())
    }
}

impl RefStore for InMemoryRefStore {
    fn read_ref(&self, name: &str) -> Result<Option<Reference>> {
        validate_ref_name(name)?;
        let refs = self
            .refs
            .read()
            .map_err(|e| RefError::Backend(format!("lock poisoned: {e}")))?;

        if let Some(found) = refs.get(name) {
            return Ok(Some(found.clone()));
        }
        Ok(SHORT_NAME_RULES
            .iter()
            .find_map(|prefix| refs.get(&format!("{prefix}{name}")))
            .cloned())
    }

    fn list_refs(&self) -> Result<Vec<Reference>> {
        let refs = self
            .refs
            .read()
            .map_err(|e| RefError::Backend(format!("lock poisoned: {e}")))?;
        Ok(refs.values().cloned().collect())
    }
}

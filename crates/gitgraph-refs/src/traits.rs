//! The [`RefStore`] trait defining the reference storage interface.

use crate::error::Result;
use crate::types::Reference;

/// Read-only view of a repository's named references.
///
/// The namespace follows git's hierarchical layout:
///
/// - `HEAD` at the top level, usually symbolic
/// - `refs/heads/*` for branches
/// - `refs/tags/*` for tags
/// - `refs/remotes/{remote}/*` for remote tracking refs
pub trait RefStore {
    /// Read a ref by name.
    ///
    /// Backends may accept short names (e.g. `main`) and expand them; the
    /// returned [`Reference`] always carries the canonical full name.
    /// Returns `Ok(None)` if no such ref exists and
    /// [`RefError::InvalidName`](crate::RefError::InvalidName) if `name`
    /// cannot be a ref name at all.
    fn read_ref(&self, name: &str) -> Result<Option<Reference>>;

    /// List every ref in the store (including `HEAD` if present), sorted
    /// by name.
    fn list_refs(&self) -> Result<Vec<Reference>>;
}

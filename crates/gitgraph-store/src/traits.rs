use gitgraph_types::ObjectId;

use crate::error::StoreResult;
use crate::object::Object;

/// Hash-addressed, read-only view of an object database.
///
/// Implementations must satisfy these invariants:
/// - Objects are immutable: the same ID always decodes to the same object.
/// - Absence is not an error: `read` returns `Ok(None)` for unknown IDs.
/// - Payloads that cannot be decoded surface as
///   [`StoreError::CorruptObject`](crate::StoreError::CorruptObject).
/// - All backend failures are propagated, never silently ignored.
///
/// Calls are synchronous and blocking.
pub trait ObjectStore {
    /// Read and decode an object by its ID.
    fn read(&self, id: &ObjectId) -> StoreResult<Option<Object>>;

    /// Enumerate the IDs of every object in the store, sorted.
    fn all_ids(&self) -> StoreResult<Vec<ObjectId>>;

    /// Check whether an object exists in the store.
    ///
    /// Default implementation decodes the object. Backends may override
    /// with a cheaper existence check.
    fn contains(&self, id: &ObjectId) -> StoreResult<bool> {
        Ok(self.read(id)?.is_some())
    }
}

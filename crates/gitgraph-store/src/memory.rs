use std::collections::HashMap;
use std::sync::RwLock;

use tracing::trace;

use gitgraph_types::ObjectId;

use crate::error::{StoreError, StoreResult};
use crate::object::{Object, StoredObject};
use crate::traits::ObjectStore;

/// In-memory, HashMap-based object store.
///
/// Intended for tests and embedding. Objects are kept in their encoded form
/// and decoded on every read, so a malformed payload inserted with
/// [`insert_raw`](Self::insert_raw) fails the same way a corrupt on-disk
/// object would.
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<ObjectId, StoredObject>>,
}

impl InMemoryObjectStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Encode and store an object, returning its content-addressed ID.
    ///
    /// Idempotent: writing the same object twice stores it once.
    pub fn write(&self, object: &Object) -> StoreResult<ObjectId> {
        let stored = object.to_stored_object()?;
        let id = stored.compute_id();
        self.insert_raw(id, stored)?;
        Ok(id)
    }

    /// Store an already-encoded object under an explicit ID.
    ///
    /// The ID is not checked against the payload.
    pub fn insert_raw(&self, id: ObjectId, stored: StoredObject) -> StoreResult<()> {
        let mut map = self
            .objects
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        trace!(id = %id.short_hex(), kind = %stored.kind, "storing object");
        map.entry(id).or_insert(stored);
        Ok(())
    }

    /// Number of objects currently stored.
    ///
    /// A poisoned lock reads as empty.
    pub fn len(&self) -> usize {
        self.objects.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn read(&self, id: &ObjectId) -> StoreResult<Option<Object>> {
        let map = self
            .objects
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        let Some(stored) = map.get(id) else {
            return Ok(None);
        };
        let object = Object::from_stored_object(stored).map_err(|e| match e {
            // Report the ID the object is stored under, not the one its
            // payload hashes to.
            StoreError::CorruptObject { reason, .. } => StoreError::CorruptObject { id: *id, reason },
            other => other,
        })?;
        Ok(Some(object))
    }

    fn all_ids(&self) -> StoreResult<Vec<ObjectId>> {
        let map = self
            .objects
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        let mut ids: Vec<ObjectId> = map.keys().copied().collect();
        ids.sort();
        Ok(ids)
    }

    fn contains(&self, id: &ObjectId) -> StoreResult<bool> {
        let map = self
            .objects
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(map.contains_key(id))
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryObjectStore")
            .field("object_count", &count)
            .finish()
    }
}

use serde::{Deserialize, Serialize};

use gitgraph_types::{ObjectId, ObjectKind};

use crate::error::{StoreError, StoreResult};
use crate::hasher::ContentHasher;

/// A stored object: kind tag + serialized data + cached size.
///
/// `StoredObject` is the unit of storage for stores that keep their own
/// encoding. Decoding into an [`Object`] happens on read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredObject {
    /// The type of this object.
    pub kind: ObjectKind,
    /// The serialized bytes of the object.
    pub data: Vec<u8>,
    /// The size of `data` in bytes.
    pub size: u64,
}

impl StoredObject {
    /// Create a new stored object from kind and data.
    pub fn new(kind: ObjectKind, data: Vec<u8>) -> Self {
        let size = data.len() as u64;
        Self { kind, data, size }
    }

    /// Compute the content-addressed ID for this object.
    pub fn compute_id(&self) -> ObjectId {
        ContentHasher::for_kind(self.kind).hash(&self.data)
    }

    fn decode_json<T: for<'de> Deserialize<'de>>(&self) -> StoreResult<T> {
        serde_json::from_slice(&self.data).map_err(|e| StoreError::CorruptObject {
            id: self.compute_id(),
            reason: e.to_string(),
        })
    }
}

fn encode_json<T: Serialize>(kind: ObjectKind, value: &T) -> StoreResult<StoredObject> {
    let data = serde_json::to_vec(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(StoredObject::new(kind, data))
}

// ---------------------------------------------------------------------------
// Object
// ---------------------------------------------------------------------------

/// A decoded object of any kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Object {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
    Tag(Tag),
}

impl Object {
    /// The kind of this object.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Blob(_) => ObjectKind::Blob,
            Self::Tree(_) => ObjectKind::Tree,
            Self::Commit(_) => ObjectKind::Commit,
            Self::Tag(_) => ObjectKind::Tag,
        }
    }

    /// Encode into a `StoredObject`.
    pub fn to_stored_object(&self) -> StoreResult<StoredObject> {
        match self {
            Self::Blob(blob) => Ok(StoredObject::new(ObjectKind::Blob, blob.data.clone())),
            Self::Tree(tree) => encode_json(ObjectKind::Tree, tree),
            Self::Commit(commit) => encode_json(ObjectKind::Commit, commit),
            Self::Tag(tag) => encode_json(ObjectKind::Tag, tag),
        }
    }

    /// Decode from a `StoredObject`, dispatching on its kind tag.
    pub fn from_stored_object(obj: &StoredObject) -> StoreResult<Self> {
        Ok(match obj.kind {
            ObjectKind::Blob => Self::Blob(Blob::new(obj.data.clone())),
            ObjectKind::Tree => Self::Tree(obj.decode_json()?),
            ObjectKind::Commit => Self::Commit(obj.decode_json()?),
            ObjectKind::Tag => Self::Tag(obj.decode_json()?),
        })
    }
}

impl From<Blob> for Object {
    fn from(blob: Blob) -> Self {
        Self::Blob(blob)
    }
}

impl From<Tree> for Object {
    fn from(tree: Tree) -> Self {
        Self::Tree(tree)
    }
}

impl From<Commit> for Object {
    fn from(commit: Commit) -> Self {
        Self::Commit(commit)
    }
}

impl From<Tag> for Object {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

// ---------------------------------------------------------------------------
// Blob
// ---------------------------------------------------------------------------

/// Raw content object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    pub data: Vec<u8>,
}

impl Blob {
    /// Create a new blob from raw bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

// ---------------------------------------------------------------------------
// Tree
// ---------------------------------------------------------------------------

/// File mode for a tree entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryMode {
    /// Normal file (0o100644).
    Regular,
    /// Executable file (0o100755).
    Executable,
    /// Symbolic link (0o120000).
    Symlink,
    /// Subtree / directory (0o040000).
    Directory,
    /// Submodule link to a commit in another repository (0o160000).
    Submodule,
}

impl EntryMode {
    /// Returns `true` for entries whose target is a blob.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::Regular | Self::Executable | Self::Symlink)
    }
}

/// A single entry in a tree object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// File mode (regular, executable, symlink, directory, submodule).
    pub mode: EntryMode,
    /// Entry name (filename or directory name).
    pub name: String,
    /// ID of the referenced object.
    pub object_id: ObjectId,
}

impl TreeEntry {
    /// Create a new tree entry.
    pub fn new(mode: EntryMode, name: impl Into<String>, object_id: ObjectId) -> Self {
        Self {
            mode,
            name: name.into(),
            object_id,
        }
    }
}

impl PartialOrd for TreeEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TreeEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

/// Directory listing object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    /// Entries in this directory, in stored order.
    pub entries: Vec<TreeEntry>,
}

impl Tree {
    /// Create a new tree with the given entries, sorted by name.
    pub fn new(mut entries: Vec<TreeEntry>) -> Self {
        entries.sort();
        Self { entries }
    }

    /// Create a tree that keeps entries in the order given.
    ///
    /// Backends decoding an existing tree use this to preserve the
    /// on-disk order.
    pub fn from_ordered(entries: Vec<TreeEntry>) -> Self {
        Self { entries }
    }
}

// ---------------------------------------------------------------------------
// Commit
// ---------------------------------------------------------------------------

/// A commit: root tree, parent commits, and message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The root tree of this commit.
    pub tree: ObjectId,
    /// Parent commits, in order. Empty for a root commit.
    pub parents: Vec<ObjectId>,
    /// Commit message.
    pub message: String,
}

impl Commit {
    /// Create a commit.
    pub fn new(tree: ObjectId, parents: Vec<ObjectId>, message: impl Into<String>) -> Self {
        Self {
            tree,
            parents,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tag
// ---------------------------------------------------------------------------

/// An annotated tag object pointing at any other object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// The tagged object.
    pub target: ObjectId,
    /// Kind of the tagged object, as recorded in the tag.
    pub target_kind: ObjectKind,
    /// Tag name (e.g. "v1.0.0").
    pub name: String,
    /// Tag message.
    pub message: String,
}

impl Tag {
    /// Create a tag.
    pub fn new(
        target: ObjectId,
        target_kind: ObjectKind,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            target,
            target_kind,
            name: name.into(),
            message: message.into(),
        }
    }
}

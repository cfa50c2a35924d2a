//! The gix-backed object and reference store.

use std::path::Path;

use gix::objs::{CommitRef, TagRef, TreeRef};
use tracing::{debug, trace};

use gitgraph_refs::{RefError, RefResult, RefStore, Reference};
use gitgraph_store::{
    Blob, Commit, EntryMode, Object, ObjectStore, StoreError, StoreResult, Tag, Tree, TreeEntry,
};
use gitgraph_types::{ObjectId, ObjectKind};

use crate::error::{GitError, GitResult};

/// A git repository on disk.
pub struct GitRepository {
    repo: gix::Repository,
}

impl GitRepository {
    /// Open the repository whose git dir (or work tree) is `path`.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let repo = gix::open(path).map_err(|source| GitError::Open {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        debug!(git_dir = %repo.git_dir().display(), "opened repository");
        Ok(Self { repo })
    }

    /// Find the repository containing `start`, searching upwards.
    pub fn discover(start: impl AsRef<Path>) -> GitResult<Self> {
        let start = start.as_ref();
        let repo = gix::discover(start).map_err(|source| GitError::Discover {
            path: start.to_path_buf(),
            source: Box::new(source),
        })?;
        debug!(git_dir = %repo.git_dir().display(), "discovered repository");
        Ok(Self { repo })
    }

    /// The repository's git dir.
    pub fn git_dir(&self) -> &Path {
        self.repo.git_dir()
    }

    /// The working tree, if the repository is not bare.
    pub fn work_dir(&self) -> Option<&Path> {
        self.repo.work_dir()
    }

    fn reference(&self, reference: &gix::Reference<'_>) -> RefResult<Reference> {
        let name = reference.name().as_bstr().to_string();
        let target = reference.target();
        if let Some(id) = target.try_id() {
            return Ok(Reference::direct(name, from_gix(id)?));
        }
        if let Some(symbolic) = target.try_name() {
            return Ok(Reference::symbolic(name, symbolic.as_bstr().to_string()));
        }
        Err(RefError::Malformed {
            name,
            reason: "target is neither an object nor a reference".into(),
        })
    }
}

impl std::fmt::Debug for GitRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepository")
            .field("git_dir", &self.repo.git_dir())
            .finish()
    }
}

fn to_gix(id: &ObjectId) -> gix::ObjectId {
    gix::ObjectId::Sha1(*id.as_bytes())
}

fn from_gix(id: &gix::oid) -> RefResult<ObjectId> {
    ObjectId::from_slice(id.as_bytes()).map_err(|e| RefError::Backend(e.to_string()))
}

fn object_id(id: &ObjectId, raw: gix::ObjectId) -> StoreResult<ObjectId> {
    ObjectId::from_slice(raw.as_bytes()).map_err(|e| StoreError::CorruptObject {
        id: *id,
        reason: e.to_string(),
    })
}

fn object_kind(kind: gix::object::Kind) -> ObjectKind {
    match kind {
        gix::object::Kind::Blob => ObjectKind::Blob,
        gix::object::Kind::Tree => ObjectKind::Tree,
        gix::object::Kind::Commit => ObjectKind::Commit,
        gix::object::Kind::Tag => ObjectKind::Tag,
    }
}

fn entry_mode(mode: gix::objs::tree::EntryMode) -> EntryMode {
    if mode.is_tree() {
        EntryMode::Directory
    } else if mode.is_commit() {
        EntryMode::Submodule
    } else if mode.is_link() {
        EntryMode::Symlink
    } else if mode.is_blob() {
        EntryMode::Regular
    } else {
        EntryMode::Executable
    }
}

/// Decode a raw git object payload.
fn decode(id: &ObjectId, kind: gix::object::Kind, data: &[u8]) -> StoreResult<Object> {
    let corrupt = |e: gix::objs::decode::Error| StoreError::CorruptObject {
        id: *id,
        reason: e.to_string(),
    };

    let object = match kind {
        gix::object::Kind::Blob => Blob::new(data.to_vec()).into(),
        gix::object::Kind::Tree => {
            let tree = TreeRef::from_bytes(data).map_err(corrupt)?;
            let entries = tree
                .entries
                .iter()
                .map(|entry| {
                    Ok(TreeEntry::new(
                        entry_mode(entry.mode),
                        entry.filename.to_string(),
                        object_id(id, entry.oid.to_owned())?,
                    ))
                })
                .collect::<StoreResult<Vec<_>>>()?;
            // Git's own entry order is kept.
            Tree::from_ordered(entries).into()
        }
        gix::object::Kind::Commit => {
            let commit = CommitRef::from_bytes(data).map_err(corrupt)?;
            let parents = commit
                .parents()
                .map(|parent| object_id(id, parent))
                .collect::<StoreResult<Vec<_>>>()?;
            Commit::new(object_id(id, commit.tree())?, parents, commit.message.to_string()).into()
        }
        gix::object::Kind::Tag => {
            let tag = TagRef::from_bytes(data).map_err(corrupt)?;
            Tag::new(
                object_id(id, tag.target())?,
                object_kind(tag.target_kind),
                tag.name.to_string(),
                tag.message.to_string(),
            )
            .into()
        }
    };
    Ok(object)
}

impl ObjectStore for GitRepository {
    fn read(&self, id: &ObjectId) -> StoreResult<Option<Object>> {
        let found = self
            .repo
            .try_find_object(to_gix(id))
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let Some(raw) = found else {
            return Ok(None);
        };
        trace!(id = %id.short_hex(), kind = %raw.kind, size = raw.data.len(), "decoding object");
        decode(id, raw.kind, &raw.data).map(Some)
    }

    fn all_ids(&self) -> StoreResult<Vec<ObjectId>> {
        let iter = self
            .repo
            .objects
            .iter()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let mut ids = Vec::new();
        for raw in iter {
            let raw = raw.map_err(|e| StoreError::Backend(e.to_string()))?;
            let id = ObjectId::from_slice(raw.as_bytes())
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            ids.push(id);
        }
        // Packs and loose objects may both hold a copy.
        ids.sort();
        ids.dedup();
        debug!(count = ids.len(), "enumerated objects");
        Ok(ids)
    }

    fn contains(&self, id: &ObjectId) -> StoreResult<bool> {
        Ok(self.repo.has_object(to_gix(id)))
    }
}

impl RefStore for GitRepository {
    fn read_ref(&self, name: &str) -> RefResult<Option<Reference>> {
        gitgraph_refs::validate_ref_name(name)?;
        <&gix::refs::PartialNameRef>::try_from(name).map_err(|e| RefError::InvalidName {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        let found = self
            .repo
            .try_find_reference(name)
            .map_err(|e| RefError::Backend(e.to_string()))?;
        found.map(|r| self.reference(&r)).transpose()
    }

    fn list_refs(&self) -> RefResult<Vec<Reference>> {
        let platform = self
            .repo
            .references()
            .map_err(|e| RefError::Backend(e.to_string()))?;
        let iter = platform.all().map_err(|e| RefError::Backend(e.to_string()))?;

        let mut refs = Vec::new();
        for r in iter {
            let r = r.map_err(|e| RefError::Backend(e.to_string()))?;
            refs.push(self.reference(&r)?);
        }

        // HEAD lives outside refs/ and is not part of the iteration.
        if let Some(head) = self
            .repo
            .try_find_reference("HEAD")
            .map_err(|e| RefError::Backend(e.to_string()))?
        {
            refs.push(self.reference(&head)?);
        }

        refs.sort_by(|a, b| a.name.cmp(&b.name));
        refs.dedup_by(|a, b| a.name == b.name);
        debug!(count = refs.len(), "enumerated references");
        Ok(refs)
    }
}

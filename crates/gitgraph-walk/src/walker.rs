//! The graph walker and its traversal algorithm.
//!
//! [`Walker`] borrows the two stores and produces a fresh [`WalkState`] per
//! call to [`Walker::walk`]. Internally each walk runs on a private context
//! holding the state under construction and a worklist of pending objects.
//!
//! # Dispatch
//!
//! Each pending object carries how it was reached, which decides whether
//! the store is consulted and which kind is required:
//!
//! | Reached as        | Store read | Required kind | Expansion                 |
//! |-------------------|------------|---------------|---------------------------|
//! | root / tag target | yes        | any           | by the object's own kind  |
//! | commit parent     | yes        | commit        | tree + parents            |
//! | directory entry   | yes        | tree          | one edge per entry        |
//! | file entry        | no         | blob          | none                      |
//! | submodule entry   | if present | commit        | as commit, else leaf      |

use std::collections::HashSet;

use tracing::{debug, info};

use gitgraph_refs::{RefError, RefStore, RefTarget, Reference};
use gitgraph_store::{EntryMode, Object, ObjectStore};
use gitgraph_types::{ObjectId, ObjectKind};

use crate::error::{WalkError, WalkResult};
use crate::state::{NodeId, WalkState};

/// How an object was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Reach {
    /// Root hash, resolved reference, or tag target: kind comes from the store.
    Any,
    /// Commit parent.
    Commit,
    /// Directory entry.
    Tree,
    /// Regular file, executable or symlink entry.
    Blob,
    /// Submodule entry: a commit that usually lives in another repository.
    Submodule,
}

impl Reach {
    fn required_kind(self) -> Option<ObjectKind> {
        match self {
            Self::Any => None,
            Self::Commit | Self::Submodule => Some(ObjectKind::Commit),
            Self::Tree => Some(ObjectKind::Tree),
            Self::Blob => Some(ObjectKind::Blob),
        }
    }

    fn for_entry(mode: EntryMode) -> Self {
        match mode {
            _ if mode.is_file() => Self::Blob,
            EntryMode::Directory => Self::Tree,
            _ => Self::Submodule,
        }
    }
}

/// Discovers the object graph reachable from a set of roots.
pub struct Walker<'a> {
    objects: &'a dyn ObjectStore,
    refs: &'a dyn RefStore,
}

impl<'a> Walker<'a> {
    /// Create a walker over the given stores.
    pub fn new(objects: &'a dyn ObjectStore, refs: &'a dyn RefStore) -> Self {
        Self { objects, refs }
    }

    /// Walk from `roots`, or everything in the store when `roots` is empty.
    ///
    /// Each root is tried first as a reference name (following symbolic
    /// chains), then as a full hex hash of a stored object. The first store
    /// error aborts the walk and discards everything discovered so far.
    pub fn walk<S: AsRef<str>>(&self, roots: &[S]) -> WalkResult<WalkState> {
        let mut run = Run {
            objects: self.objects,
            refs: self.refs,
            state: WalkState::new(),
            pending: Vec::new(),
        };

        if roots.is_empty() {
            run.walk_everything()?;
        } else {
            for root in roots {
                run.walk_root(root.as_ref())?;
            }
        }

        let state = run.state;
        info!(
            commits = state.objects(ObjectKind::Commit).len(),
            trees = state.objects(ObjectKind::Tree).len(),
            blobs = state.objects(ObjectKind::Blob).len(),
            tags = state.objects(ObjectKind::Tag).len(),
            references = state.references().len(),
            edges = state.edges().len(),
            "walk complete"
        );
        Ok(state)
    }
}

/// Per-walk context: the state under construction and the worklist.
struct Run<'a> {
    objects: &'a dyn ObjectStore,
    refs: &'a dyn RefStore,
    state: WalkState,
    pending: Vec<(ObjectId, Reach)>,
}

impl Run<'_> {
    fn walk_everything(&mut self) -> WalkResult<()> {
        let ids = self.objects.all_ids()?;
        debug!(count = ids.len(), "walking every stored object");
        for id in ids {
            self.walk_object(id, Reach::Any)?;
        }

        let references = self.refs.list_refs()?;
        debug!(count = references.len(), "walking every reference");
        for reference in references {
            self.walk_reference(reference)?;
        }
        Ok(())
    }

    fn walk_root(&mut self, root: &str) -> WalkResult<()> {
        match self.refs.read_ref(root) {
            Ok(Some(reference)) => {
                debug!(root, name = %reference.name, "root is a reference");
                return self.walk_reference(reference);
            }
            Ok(None) | Err(RefError::InvalidName { .. }) => {}
            Err(err) => return Err(err.into()),
        }

        let id = ObjectId::from_hex(root).map_err(|_| WalkError::UnresolvableRoot(root.into()))?;
        if !self.objects.contains(&id)? {
            return Err(WalkError::UnresolvableRoot(root.into()));
        }
        debug!(root, "root is an object");
        self.walk_object(id, Reach::Any)
    }

    /// Follow a reference chain until it reaches an object or a reference
    /// that an earlier chain already processed.
    fn walk_reference(&mut self, start: Reference) -> WalkResult<()> {
        let mut chain: HashSet<String> = HashSet::new();
        let mut current = start;

        loop {
            if !chain.insert(current.name.clone()) {
                return Err(WalkError::ReferenceResolution {
                    name: current.name,
                    reason: "symbolic reference cycle".into(),
                });
            }
            if self.state.has_reference(&current.name) {
                return Ok(());
            }
            debug!(name = %current.name, target = %current.target, "processing reference");

            let name = current.name.clone();
            self.state.record_reference(current.clone());
            match current.target {
                RefTarget::Direct(id) => {
                    self.state.record_edge(NodeId::Reference(name), id);
                    return self.walk_object(id, Reach::Any);
                }
                RefTarget::Symbolic(target) => {
                    let next = self.refs.read_ref(&target)?.ok_or_else(|| {
                        WalkError::ReferenceResolution {
                            name: name.clone(),
                            reason: format!("symbolic target {target} does not exist"),
                        }
                    })?;
                    self.state
                        .record_edge(NodeId::Reference(name), NodeId::Reference(next.name.clone()));
                    current = next;
                }
            }
        }
    }

    fn walk_object(&mut self, id: ObjectId, reach: Reach) -> WalkResult<()> {
        self.pending.push((id, reach));
        while let Some((id, reach)) = self.pending.pop() {
            self.visit(id, reach)?;
        }
        Ok(())
    }

    fn visit(&mut self, id: ObjectId, reach: Reach) -> WalkResult<()> {
        let required = reach.required_kind();

        if let Some(existing) = self.state.kind_of(&id) {
            return match required {
                Some(kind) if kind != existing => Err(kind_conflict(id, kind, existing)),
                _ => Ok(()),
            };
        }

        if reach == Reach::Blob {
            self.state.record_object(ObjectKind::Blob, id);
            return Ok(());
        }

        let object = match self.objects.read(&id)? {
            Some(object) => object,
            None if reach == Reach::Submodule => {
                debug!(id = %id.short_hex(), "submodule commit outside this store");
                self.state.record_object(ObjectKind::Commit, id);
                return Ok(());
            }
            None => return Err(WalkError::ObjectNotFound(id)),
        };

        if let Some(kind) = required {
            if object.kind() != kind {
                return Err(WalkError::Decode {
                    id,
                    reason: format!("expected {kind}, found {}", object.kind()),
                });
            }
        }

        self.expand(id, object);
        Ok(())
    }

    /// Record `object` and its outgoing edges, and queue its children.
    ///
    /// Children are pushed in reverse so they are visited in stored order.
    fn expand(&mut self, id: ObjectId, object: Object) {
        debug!(id = %id.short_hex(), kind = %object.kind(), "expanding object");
        self.state.record_object(object.kind(), id);

        let mut children: Vec<(ObjectId, Reach)> = Vec::new();
        match object {
            Object::Blob(_) => {}
            Object::Tag(tag) => {
                self.state.record_edge(id, tag.target);
                children.push((tag.target, Reach::Any));
            }
            Object::Commit(commit) => {
                self.state.record_edge(id, commit.tree);
                children.push((commit.tree, Reach::Tree));
                for parent in commit.parents {
                    self.state.record_edge(id, parent);
                    children.push((parent, Reach::Commit));
                }
            }
            Object::Tree(tree) => {
                for entry in tree.entries {
                    self.state.record_edge(id, entry.object_id);
                    children.push((entry.object_id, Reach::for_entry(entry.mode)));
                }
            }
        }
        self.pending.extend(children.into_iter().rev());
    }
}

fn kind_conflict(id: ObjectId, wanted: ObjectKind, existing: ObjectKind) -> WalkError {
    WalkError::Decode {
        id,
        reason: format!("reached as {wanted} but already recorded as {existing}"),
    }
}

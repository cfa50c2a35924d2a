//! The result of a walk: visited nodes and recorded edges.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use gitgraph_refs::Reference;
use gitgraph_types::{ObjectId, ObjectKind};

/// Identifier of a graph node: an object hash or a reference name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    Object(ObjectId),
    Reference(String),
}

impl NodeId {
    /// Returns the object ID if this node is an object.
    pub fn as_object(&self) -> Option<&ObjectId> {
        match self {
            Self::Object(id) => Some(id),
            Self::Reference(_) => None,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(id) => write!(f, "{id}"),
            Self::Reference(name) => f.write_str(name),
        }
    }
}

impl From<ObjectId> for NodeId {
    fn from(id: ObjectId) -> Self {
        Self::Object(id)
    }
}

/// A directed containment edge, e.g. commit -> tree or ref -> commit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Everything a walk discovered.
///
/// Created fresh per walk, filled monotonically, then handed whole to the
/// renderer. The per-kind sets are kept disjoint by the walker; recording
/// the same hash under a second kind is the caller's bug.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalkState {
    commits: BTreeSet<ObjectId>,
    trees: BTreeSet<ObjectId>,
    blobs: BTreeSet<ObjectId>,
    tags: BTreeSet<ObjectId>,
    references: BTreeMap<String, Reference>,
    edges: Vec<Edge>,
}

impl WalkState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The visited objects of one kind, sorted by hash.
    pub fn objects(&self, kind: ObjectKind) -> &BTreeSet<ObjectId> {
        match kind {
            ObjectKind::Commit => &self.commits,
            ObjectKind::Tree => &self.trees,
            ObjectKind::Blob => &self.blobs,
            ObjectKind::Tag => &self.tags,
        }
    }

    fn objects_mut(&mut self, kind: ObjectKind) -> &mut BTreeSet<ObjectId> {
        match kind {
            ObjectKind::Commit => &mut self.commits,
            ObjectKind::Tree => &mut self.trees,
            ObjectKind::Blob => &mut self.blobs,
            ObjectKind::Tag => &mut self.tags,
        }
    }

    /// The kind under which `id` was recorded, if it was.
    pub fn kind_of(&self, id: &ObjectId) -> Option<ObjectKind> {
        ObjectKind::ALL
            .into_iter()
            .find(|kind| self.objects(*kind).contains(id))
    }

    /// Returns `true` if `id` was recorded under any kind.
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.kind_of(id).is_some()
    }

    /// Record an object. Returns `false` if it was already recorded under
    /// this kind.
    pub fn record_object(&mut self, kind: ObjectKind, id: ObjectId) -> bool {
        self.objects_mut(kind).insert(id)
    }

    /// The processed references, keyed by full name.
    pub fn references(&self) -> &BTreeMap<String, Reference> {
        &self.references
    }

    /// Returns `true` if a reference with this name was processed.
    pub fn has_reference(&self, name: &str) -> bool {
        self.references.contains_key(name)
    }

    /// Record a processed reference. Returns `false` if the name was
    /// already present.
    pub fn record_reference(&mut self, reference: Reference) -> bool {
        if self.references.contains_key(&reference.name) {
            return false;
        }
        self.references.insert(reference.name.clone(), reference);
        true
    }

    /// All recorded edges, in discovery order, duplicates included.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Append an edge.
    pub fn record_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>) {
        self.edges.push(Edge::new(from, to));
    }

    /// Number of edges whose target is `node`.
    pub fn in_degree(&self, node: &NodeId) -> usize {
        self.edges.iter().filter(|e| &e.to == node).count()
    }

    /// Total number of visited objects across all kinds.
    pub fn object_count(&self) -> usize {
        self.commits.len() + self.trees.len() + self.blobs.len() + self.tags.len()
    }

    /// Total number of nodes: objects plus references.
    pub fn node_count(&self) -> usize {
        self.object_count() + self.references.len()
    }

    /// Returns `true` if nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.node_count() == 0 && self.edges.is_empty()
    }

    /// Returns `true` if `node` was visited.
    pub fn has_node(&self, node: &NodeId) -> bool {
        match node {
            NodeId::Object(id) => self.contains(id),
            NodeId::Reference(name) => self.has_reference(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(byte: u8) -> ObjectId {
        ObjectId::from_hash([byte; 20])
    }

    #[test]
    fn empty_state() {
        let state = WalkState::new();
        assert!(state.is_empty());
        assert_eq!(state.node_count(), 0);
        assert!(state.kind_of(&oid(1)).is_none());
    }

    #[test]
    fn record_object_is_idempotent() {
        let mut state = WalkState::new();
        assert!(state.record_object(ObjectKind::Commit, oid(1)));
        assert!(!state.record_object(ObjectKind::Commit, oid(1)));
        assert_eq!(state.object_count(), 1);
        assert_eq!(state.kind_of(&oid(1)), Some(ObjectKind::Commit));
    }

    #[test]
    fn edges_keep_duplicates() {
        let mut state = WalkState::new();
        state.record_edge(oid(1), oid(2));
        state.record_edge(oid(1), oid(2));
        assert_eq!(state.edges().len(), 2);
        assert_eq!(state.in_degree(&NodeId::Object(oid(2))), 2);
    }

    #[test]
    fn references_are_recorded_once() {
        let mut state = WalkState::new();
        assert!(state.record_reference(Reference::direct("refs/heads/main", oid(1))));
        assert!(!state.record_reference(Reference::direct("refs/heads/main", oid(2))));
        assert_eq!(state.references().len(), 1);
        assert!(state.has_node(&NodeId::Reference("refs/heads/main".into())));
    }

    #[test]
    fn node_id_display() {
        assert_eq!(NodeId::Object(oid(0xab)).to_string(), "ab".repeat(20));
        assert_eq!(NodeId::Reference("HEAD".into()).to_string(), "HEAD");
        assert_eq!(NodeId::Object(oid(1)).as_object(), Some(&oid(1)));
    }
}

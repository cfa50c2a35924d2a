//! Property tests over randomly generated histories.

use proptest::prelude::*;
use proptest::sample::Index;

use gitgraph_refs::{InMemoryRefStore, Reference};
use gitgraph_store::{Blob, Commit, EntryMode, InMemoryObjectStore, ObjectStore, Tree, TreeEntry};
use gitgraph_types::{ObjectId, ObjectKind};

use crate::{NodeId, Walker};

const CONTENTS: [&str; 6] = ["alpha", "beta", "gamma", "delta", "", "shared\n"];

/// One generated commit: file content picks and parent picks.
#[derive(Clone, Debug)]
struct CommitShape {
    files: Vec<usize>,
    parents: Vec<Index>,
}

fn commit_shape() -> impl Strategy<Value = CommitShape> {
    (
        prop::collection::vec(0..CONTENTS.len(), 0..4),
        prop::collection::vec(any::<Index>(), 0..3),
    )
        .prop_map(|(files, parents)| CommitShape { files, parents })
}

fn history() -> impl Strategy<Value = Vec<CommitShape>> {
    prop::collection::vec(commit_shape(), 1..12)
}

/// Build the history; every commit may only name earlier commits as parents.
fn build(shapes: &[CommitShape]) -> (InMemoryObjectStore, InMemoryRefStore, ObjectId) {
    let objects = InMemoryObjectStore::new();
    let refs = InMemoryRefStore::new();
    let mut commits: Vec<ObjectId> = Vec::new();

    for (n, shape) in shapes.iter().enumerate() {
        let entries = shape
            .files
            .iter()
            .enumerate()
            .map(|(i, pick)| {
                let blob = objects
                    .write(&Blob::new(CONTENTS[*pick].as_bytes().to_vec()).into())
                    .unwrap();
                TreeEntry::new(EntryMode::Regular, format!("file{i}"), blob)
            })
            .collect();
        let tree = objects.write(&Tree::new(entries).into()).unwrap();

        let parents = if commits.is_empty() {
            Vec::new()
        } else {
            shape.parents.iter().map(|p| *p.get(&commits)).collect()
        };
        let commit = objects
            .write(&Commit::new(tree, parents, format!("commit {n}")).into())
            .unwrap();
        commits.push(commit);
    }

    let tip = *commits.last().unwrap();
    refs.write_ref(Reference::direct("refs/heads/main", tip)).unwrap();
    refs.write_ref(Reference::symbolic("HEAD", "refs/heads/main")).unwrap();
    (objects, refs, tip)
}

proptest! {
    #[test]
    fn kind_sets_are_disjoint(shapes in history()) {
        let (objects, refs, _) = build(&shapes);
        let state = Walker::new(&objects, &refs).walk(&["HEAD"]).unwrap();

        let total: usize = ObjectKind::ALL
            .into_iter()
            .map(|kind| state.objects(kind).len())
            .sum();
        let mut union: Vec<ObjectId> = ObjectKind::ALL
            .into_iter()
            .flat_map(|kind| state.objects(kind).iter().copied())
            .collect();
        union.sort();
        union.dedup();
        prop_assert_eq!(union.len(), total);
    }

    #[test]
    fn walking_twice_gives_the_same_state(shapes in history()) {
        let (objects, refs, tip) = build(&shapes);
        let walker = Walker::new(&objects, &refs);
        let roots = ["HEAD".to_string(), tip.to_hex()];
        prop_assert_eq!(walker.walk(&roots[..]).unwrap(), walker.walk(&roots[..]).unwrap());
    }

    #[test]
    fn exhaustive_walk_covers_the_store(shapes in history()) {
        let (objects, refs, _) = build(&shapes);
        let state = Walker::new(&objects, &refs).walk::<&str>(&[]).unwrap();

        prop_assert_eq!(state.object_count(), objects.len());
        for id in objects.all_ids().unwrap() {
            prop_assert!(state.contains(&id));
        }
        prop_assert_eq!(state.references().len(), 2);
    }

    #[test]
    fn every_edge_joins_visited_nodes(shapes in history()) {
        let (objects, refs, _) = build(&shapes);
        let state = Walker::new(&objects, &refs).walk(&["HEAD"]).unwrap();

        for edge in state.edges() {
            prop_assert!(state.has_node(&edge.from), "dangling source {}", edge.from);
            prop_assert!(state.has_node(&edge.to), "dangling target {}", edge.to);
        }
        prop_assert!(state.has_node(&NodeId::Reference("HEAD".into())));
    }
}

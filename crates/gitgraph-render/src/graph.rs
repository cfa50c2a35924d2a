//! The renderer's intermediate node/edge model.

use serde::Serialize;

use gitgraph_types::ObjectKind;
use gitgraph_walk::{NodeId, WalkState};

use crate::config::RenderConfig;

/// What a node stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Commit,
    Tree,
    Blob,
    Tag,
    Reference,
}

impl From<ObjectKind> for NodeKind {
    fn from(kind: ObjectKind) -> Self {
        match kind {
            ObjectKind::Commit => Self::Commit,
            ObjectKind::Tree => Self::Tree,
            ObjectKind::Blob => Self::Blob,
            ObjectKind::Tag => Self::Tag,
        }
    }
}

/// A single node, ready to print.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Full hex hash for objects, full name for references.
    pub id: String,
    pub kind: NodeKind,
    /// Display label; may contain a newline between kind and hash.
    pub label: String,
    /// Fill color, absent when color is suppressed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// Nodes and edges of a walk, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    /// Project a walk into printable nodes and edges.
    pub fn from_state(state: &WalkState, config: &RenderConfig) -> Self {
        let mut nodes = Vec::with_capacity(state.node_count());

        for kind in ObjectKind::ALL {
            for id in state.objects(kind) {
                let label = if config.suppress_types {
                    id.short_hex()
                } else {
                    format!("{kind}\n{}", id.short_hex())
                };
                nodes.push(GraphNode {
                    id: id.to_hex(),
                    kind: kind.into(),
                    label,
                    color: color_for(config, kind.into()),
                });
            }
        }

        for name in state.references().keys() {
            nodes.push(GraphNode {
                id: name.clone(),
                kind: NodeKind::Reference,
                label: name.clone(),
                color: color_for(config, NodeKind::Reference),
            });
        }

        let edges = state
            .edges()
            .iter()
            .map(|edge| GraphEdge {
                from: node_key(&edge.from),
                to: node_key(&edge.to),
            })
            .collect();

        Self { nodes, edges }
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

fn node_key(node: &NodeId) -> String {
    match node {
        NodeId::Object(id) => id.to_hex(),
        NodeId::Reference(name) => name.clone(),
    }
}

fn color_for(config: &RenderConfig, kind: NodeKind) -> Option<String> {
    if config.suppress_color {
        return None;
    }
    let palette = &config.palette;
    let color = match kind {
        NodeKind::Commit => &palette.commit,
        NodeKind::Tree => &palette.tree,
        NodeKind::Blob => &palette.blob,
        NodeKind::Tag => &palette.tag,
        NodeKind::Reference => &palette.reference,
    };
    Some(color.clone())
}

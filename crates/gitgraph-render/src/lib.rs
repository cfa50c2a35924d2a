//! Rendering for git-graphviz.
//!
//! A completed [`WalkState`](gitgraph_walk::WalkState) is first projected
//! into a [`Graph`]: one node per visited object or reference, one edge per
//! recorded edge, with labels and colors already decided by the
//! [`RenderConfig`]. The graph is then written out as Graphviz DOT or JSON.
//!
//! Rendering never touches a store and emits nodes in a fixed order
//! (commits, trees, blobs, tags by hash, then references by name), so equal
//! walks produce byte-identical output.

pub mod config;
pub mod dot;
pub mod error;
pub mod graph;

pub use config::{OutputFormat, Palette, RenderConfig};
pub use dot::render_dot;
pub use error::{RenderError, RenderResult};
pub use graph::{Graph, GraphEdge, GraphNode, NodeKind};

use gitgraph_walk::WalkState;

/// Render `state` in the format named by `config.format`.
pub fn render(state: &WalkState, config: &RenderConfig) -> RenderResult<String> {
    match config.format {
        OutputFormat::Dot => Ok(render_dot(state, config)),
        OutputFormat::Json => render_json(state, config),
    }
}

/// Render `state` as pretty-printed JSON: `{"nodes": [...], "edges": [...]}`.
pub fn render_json(state: &WalkState, config: &RenderConfig) -> RenderResult<String> {
    let graph = Graph::from_state(state, config);
    let mut out = serde_json::to_string_pretty(&graph)?;
    out.push('\n');
    Ok(out)
}

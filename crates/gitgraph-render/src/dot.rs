//! Graphviz DOT output.

use std::fmt::Write;

use tracing::debug;

use gitgraph_walk::WalkState;

use crate::config::RenderConfig;
use crate::graph::{Graph, NodeKind};

/// Render `state` as a DOT digraph.
///
/// Output is terminated by a newline and contains one statement per node
/// and one per edge, duplicates included.
pub fn render_dot(state: &WalkState, config: &RenderConfig) -> String {
    let graph = Graph::from_state(state, config);
    debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), "rendering DOT");

    let mut out = String::from("digraph {\n");

    let mut defaults = vec![("fontname", config.font_name.as_str())];
    if !config.suppress_color {
        defaults.push(("style", "filled"));
    }
    out.push_str("\tnode ");
    out.push_str(&attrs(&defaults));
    out.push_str(";\n");

    for node in &graph.nodes {
        let mut list = vec![("label", node.label.as_str())];
        match node.kind {
            NodeKind::Commit => list.push(("group", "commits")),
            NodeKind::Reference => list.push(("shape", "box")),
            _ => {}
        }
        if let Some(color) = &node.color {
            list.push(("color", color.as_str()));
        }
        // Writing to a String cannot fail.
        let _ = writeln!(out, "\t\"{}\" {};", escape(&node.id), attrs(&list));
    }

    for edge in &graph.edges {
        let _ = writeln!(out, "\t\"{}\" -> \"{}\";", escape(&edge.from), escape(&edge.to));
    }

    out.push_str("}\n");
    out
}

fn attrs(list: &[(&str, &str)]) -> String {
    let rendered: Vec<String> = list
        .iter()
        .map(|(key, value)| format!("{key}=\"{}\"", escape(value)))
        .collect();
    format!("[{}]", rendered.join(","))
}

/// Escape a value for use inside a double-quoted DOT string.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

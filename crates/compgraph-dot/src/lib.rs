//! Graph rendering module for producing DOT format output.
//!
//! Turns a [`compgraph_core::Graph`] into Graphviz DOT text: graph attributes
//! first, then node defaults, nodes in creation order, and edges in emission
//! order. Node ids are `n<index>`; the human-readable text lives in labels.

mod dot;

use compgraph_core::Graph;

pub use dot::{DotBuilder, GraphKind, escape_label, sanitize_id};

/// Graph name used when the caller does not pick one.
pub const DEFAULT_GRAPH_NAME: &str = "G";

/// Render `graph` to undirected DOT.
pub fn render_dot(graph: &Graph) -> String {
    render_dot_named(graph, DEFAULT_GRAPH_NAME)
}

/// Render `graph` to undirected DOT under the given graph name.
pub fn render_dot_named(graph: &Graph, name: &str) -> String {
    let mut dot = DotBuilder::new(GraphKind::Undirected, name);

    for (key, value) in graph.attrs() {
        dot.attr(key, value);
    }
    if !graph.node_defaults().is_empty() {
        dot.node_style(
            graph
                .node_defaults()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
    }
    dot.blank();

    for node in graph.nodes() {
        dot.node(
            &node_id(node.id.as_u32()),
            node.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );
    }
    if !graph.edges().is_empty() {
        dot.blank();
    }
    for edge in graph.edges() {
        dot.edge(
            &node_id(edge.from.as_u32()),
            &node_id(edge.to.as_u32()),
            edge.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "rendered dot"
    );
    dot.build()
}

fn node_id(index: u32) -> String {
    format!("n{index}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use compgraph_core::graph::Attrs;

    #[test]
    fn empty_graph() {
        let graph = Graph::default();
        assert_eq!(render_dot(&graph), "graph G {\n\n}\n");
    }

    #[test]
    fn nodes_and_edges() {
        let mut graph = Graph::default();
        let a = graph.add_node("api:services", "api");
        let b = graph.add_node("base:1.0:docker_image", "base \"1.0\"");
        let mut attrs = Attrs::new();
        attrs.insert("arrowhead".into(), "none".into());
        graph.add_edge(a, b, attrs);

        let out = render_dot_named(&graph, "deps");
        assert_eq!(
            out,
            "graph deps {\n\n  n0 [label=\"api\"];\n  n1 [label=\"base \\\"1.0\\\"\"];\n\n  n0 -- n1 [arrowhead=\"none\"];\n}\n"
        );
    }
}

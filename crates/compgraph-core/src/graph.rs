//! Abstract undirected graph produced by a render.
//!
//! The graph knows nothing about output formats; `compgraph-dot` turns it
//! into DOT text.

use std::collections::BTreeMap;

pub type Attrs = BTreeMap<String, String>;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NodeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    /// Composite key the node was registered under.
    pub key: String,
    pub attrs: Attrs,
}

impl Node {
    pub fn label(&self) -> &str {
        self.attrs.get("label").map(String::as_str).unwrap_or_default()
    }
}

/// Undirected edge. `from` is the parent side only for readability of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub attrs: Attrs,
}

impl Edge {
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    attrs: Attrs,
    node_defaults: Attrs,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(attrs: Attrs, node_defaults: Attrs) -> Self {
        Self {
            attrs,
            node_defaults,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Graph-level layout attributes.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Attributes applied to every node unless overridden.
    pub fn node_defaults(&self) -> &Attrs {
        &self.node_defaults
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_node(&mut self, key: impl Into<String>, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let mut attrs = Attrs::new();
        attrs.insert("label".to_string(), label.into());
        self.nodes.push(Node {
            id,
            key: key.into(),
            attrs,
        });
        id
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, attrs: Attrs) {
        self.edges.push(Edge { from, to, attrs });
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn node_by_key(&self, key: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.key == key)
    }

    pub fn nodes_with_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.label() == label)
    }

    /// Number of edges joining `a` and `b`, in either direction.
    pub fn edges_between(&self, a: NodeId, b: NodeId) -> usize {
        self.edges.iter().filter(|e| e.connects(a, b)).count()
    }

    /// Nodes adjacent to `id`, in edge order, possibly repeated.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter_map(|e| {
                if e.from == id {
                    Some(e.to)
                } else if e.to == id {
                    Some(e.from)
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_get_sequential_ids_and_labels() {
        let mut graph = Graph::default();
        let a = graph.add_node("api:services", "api");
        let b = graph.add_node("base:1.0:docker_image", "base:1.0");
        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(graph.node(b).unwrap().label(), "base:1.0");
        assert_eq!(graph.node_by_key("api:services").unwrap().id, a);
        assert!(graph.node_by_key("api").is_none());
    }

    #[test]
    fn edges_are_undirected() {
        let mut graph = Graph::default();
        let a = graph.add_node("a", "a");
        let b = graph.add_node("b", "b");
        let c = graph.add_node("c", "c");
        graph.add_edge(a, b, Attrs::new());
        graph.add_edge(c, b, Attrs::new());

        assert_eq!(graph.edges_between(b, a), 1);
        assert_eq!(graph.edges_between(a, c), 0);
        assert_eq!(graph.neighbors(b), vec![a, c]);
        assert_eq!(graph.edge_count(), 2);
    }
}

//! Composite key to node table; guarantees one node per key.

use std::collections::HashMap;

use crate::filter::ExclusionFilter;
use crate::graph::{Graph, NodeId};

#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    filter: ExclusionFilter,
    nodes: HashMap<String, NodeId>,
}

impl NodeRegistry {
    pub fn new(filter: ExclusionFilter) -> Self {
        Self {
            filter,
            nodes: HashMap::new(),
        }
    }

    pub fn is_excluded(&self, label: &str) -> bool {
        self.filter.is_excluded(label)
    }

    /// Return the node registered under `key`, creating it in `graph` if needed.
    ///
    /// A hit returns the existing node untouched. On a miss, an excluded
    /// `label` yields `None` and nothing is created.
    pub fn get_or_create(&mut self, key: &str, label: &str, graph: &mut Graph) -> Option<NodeId> {
        if let Some(&id) = self.nodes.get(key) {
            tracing::trace!(key, %id, "reusing node");
            return Some(id);
        }
        if self.filter.is_excluded(label) {
            tracing::trace!(key, label, "label excluded");
            return None;
        }
        let id = graph.add_node(key, label);
        tracing::trace!(key, %id, "created node");
        self.nodes.insert(key.to_string(), id);
        Some(id)
    }

    pub fn get(&self, key: &str) -> Option<NodeId> {
        self.nodes.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

//! Recursive descent over a [`ConfigTree`].
//!
//! Depth bookkeeping follows the shape of the component inventory:
//!
//! ```text
//! group:              (set as context by the builder)
//!   api:              entry, depth 0  -> node "api:<group>"
//!     docker_image:   entry, depth 1  -> category, no node
//!       - base:1.0    list at 2, element at 4 -> node "base:1.0:docker_image"
//!     owner: team-a   entry, depth 1  -> node "owner:<group>", leaf "team-a:<group>"
//! ```
//!
//! Ordered mapping entries sit one level below their mapping, a key's value is
//! walked at the key's own depth, and a list adds one level for itself and one
//! for its elements.

use std::collections::BTreeMap;

use crate::config::RenderConfig;
use crate::context::ContextStack;
use crate::graph::{Graph, NodeId};
use crate::registry::NodeRegistry;
use crate::tree::{ConfigTree, Scalar};
use crate::Result;

/// Walks one render's worth of subtrees into a single graph.
///
/// The walker owns the registry and context of the render, so two walkers
/// never share node identities.
pub struct TreeWalker<'a> {
    config: &'a RenderConfig,
    graph: Graph,
    registry: NodeRegistry,
    ctx: ContextStack,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: &'a RenderConfig, graph: Graph) -> Self {
        Self {
            config,
            graph,
            registry: NodeRegistry::new(config.exclusion.clone()),
            ctx: ContextStack::new(),
        }
    }

    pub fn context(&self) -> &ContextStack {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut ContextStack {
        &mut self.ctx
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consume the walker and hand back the graph built so far.
    pub fn finish(self) -> Graph {
        self.graph
    }

    /// Walk one `(key, value)` entry of an ordered mapping sitting at `depth`.
    pub fn walk_entry(
        &mut self,
        key: &str,
        value: &ConfigTree,
        parent: Option<NodeId>,
        depth: usize,
    ) -> Result<()> {
        if self.config.is_category(key) {
            tracing::trace!(category = key, depth, "entering category");
            self.ctx.set_category(key);
            let result = self.walk_value(value, parent, depth + 1);
            self.ctx.clear_category();
            return result;
        }

        let Some(child) = self.resolve_node(key, depth)? else {
            return Ok(());
        };
        if let Some(parent) = parent {
            self.link(parent, child);
        }
        self.walk_value(value, Some(child), depth)
    }

    /// Dispatch on the shape of `value`.
    pub fn walk_value(
        &mut self,
        value: &ConfigTree,
        parent: Option<NodeId>,
        depth: usize,
    ) -> Result<()> {
        match value {
            ConfigTree::Ordered(entries) => {
                for (key, value) in entries {
                    self.walk_entry(key, value, parent, depth + 1)?;
                }
                Ok(())
            }
            ConfigTree::Unordered(map) => self.walk_unordered(map, parent, depth),
            ConfigTree::List(items) => self.walk_list(items, parent, depth + 1),
            ConfigTree::Scalar(scalar) => self.walk_scalar(scalar, parent, depth),
        }
    }

    fn walk_unordered(
        &mut self,
        map: &BTreeMap<String, ConfigTree>,
        parent: Option<NodeId>,
        depth: usize,
    ) -> Result<()> {
        for (key, value) in map {
            let Some(child) = self.resolve_node(key, depth)? else {
                continue;
            };
            if let Some(parent) = parent {
                self.link(parent, child);
            }
            self.walk_value(value, Some(child), depth + 1)?;
        }
        Ok(())
    }

    fn walk_list(
        &mut self,
        items: &[ConfigTree],
        parent: Option<NodeId>,
        depth: usize,
    ) -> Result<()> {
        for item in items {
            self.walk_value(item, parent, depth + 1)?;
        }
        Ok(())
    }

    fn walk_scalar(&mut self, scalar: &Scalar, parent: Option<NodeId>, depth: usize) -> Result<()> {
        let Some(parent) = parent else {
            tracing::debug!(
                value = %scalar,
                depth,
                group = self.ctx.current_group(),
                "leaf without parent dropped"
            );
            return Ok(());
        };
        let label = scalar.to_string();
        if let Some(child) = self.resolve_node(&label, depth)? {
            self.link(parent, child);
        }
        Ok(())
    }

    /// Node for `label` at `depth`, or `None` when the label is excluded.
    ///
    /// Exclusion is checked first, so excluded labels never hit the depth rule.
    fn resolve_node(&mut self, label: &str, depth: usize) -> Result<Option<NodeId>> {
        if self.registry.is_excluded(label) {
            tracing::trace!(label, depth, "pruned excluded subtree");
            return Ok(None);
        }
        let key = self
            .ctx
            .composite_key(&self.config.depth_rule, label, depth)
            .map_err(|e| e.with_operation("walker::resolve_node"))?;
        Ok(self.registry.get_or_create(&key, label, &mut self.graph))
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        tracing::trace!(%parent, %child, "edge");
        self.graph
            .add_edge(parent, child, self.config.style.edge.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn walker(config: &RenderConfig) -> TreeWalker<'_> {
        let mut walker = TreeWalker::new(config, Graph::default());
        walker.context_mut().set_group("services");
        walker
    }

    #[test]
    fn category_key_is_transparent() {
        let config = RenderConfig::default();
        let mut walker = walker(&config);
        let value = ConfigTree::ordered([(
            "docker_image",
            ConfigTree::list([ConfigTree::str("base:1.0")]),
        )]);
        walker.walk_entry("api", &value, None, 0).unwrap();
        assert!(!walker.context().has_category());

        let graph = walker.finish();
        assert_eq!(graph.node_count(), 2);
        assert!(graph.nodes_with_label("docker_image").next().is_none());
        let api = graph.node_by_key("api:services").unwrap().id;
        let base = graph.node_by_key("base:1.0:docker_image").unwrap().id;
        assert_eq!(graph.edges_between(api, base), 1);
    }

    #[test]
    fn excluded_entry_prunes_subtree() {
        let config = RenderConfig::default();
        let mut walker = walker(&config);
        let value = ConfigTree::ordered([("owner", ConfigTree::str("team-a"))]);
        walker
            .walk_entry("non_core_component", &value, None, 0)
            .unwrap();
        assert!(walker.finish().is_empty());
    }

    #[test]
    fn leaf_without_parent_is_dropped() {
        let config = RenderConfig::default();
        let mut walker = walker(&config);
        walker
            .walk_value(&ConfigTree::str("orphan"), None, 0)
            .unwrap();
        assert!(walker.finish().is_empty());
    }

    #[test]
    fn scalar_under_key_uses_group_suffix() {
        let config = RenderConfig::default();
        let mut walker = walker(&config);
        let value = ConfigTree::ordered([("owner", ConfigTree::str("team-a"))]);
        walker.walk_entry("api", &value, None, 0).unwrap();

        let graph = walker.finish();
        let owner = graph.node_by_key("owner:services").unwrap().id;
        let team = graph.node_by_key("team-a:services").unwrap().id;
        assert_eq!(graph.edges_between(owner, team), 1);
    }

    #[test]
    fn unordered_mapping_skips_excluded_pairs_only() {
        let config = RenderConfig::default();
        let mut walker = walker(&config);
        let value = ConfigTree::unordered([
            ("a_flag_true", ConfigTree::null()),
            ("zone", ConfigTree::null()),
        ]);
        let api = walker.resolve_node("api", 0).unwrap().unwrap();
        walker.walk_value(&value, Some(api), 0).unwrap();

        let graph = walker.finish();
        assert!(graph.node_by_key("zone:services").is_some());
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn category_with_scalar_value_is_a_violation() {
        let config = RenderConfig::default();
        let mut walker = walker(&config);
        let value = ConfigTree::ordered([("git", ConfigTree::str("git@host:api.git"))]);
        let err = walker.walk_entry("api", &value, None, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StructuralViolation);
        assert_eq!(err.context_value("depth"), Some("2"));
        assert_eq!(err.operation(), "walker::resolve_node");
        assert!(!walker.context().has_category());
    }
}

//! Top-level render orchestration.

use crate::config::RenderConfig;
use crate::graph::Graph;
use crate::tree::ConfigTree;
use crate::walker::TreeWalker;
use crate::{Error, ErrorKind, Result};

/// Renders configuration trees into graphs.
///
/// The builder only holds configuration. Node identities live in a walker
/// created per [`render`](GraphBuilder::render) call, so rendering the same
/// tree twice yields identical graphs.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: RenderConfig,
}

impl GraphBuilder {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `tree` into a graph.
    ///
    /// Each top-level entry is a group: its key becomes the group context and
    /// each entry of its mapping value is walked at depth 0 without a parent.
    /// Any structural violation aborts the whole render.
    pub fn render(&self, tree: &ConfigTree) -> Result<Graph> {
        self.config
            .validate()
            .map_err(|e| e.with_operation("builder::render"))?;

        let graph = Graph::new(self.config.style.graph.clone(), self.config.style.node.clone());
        let mut walker = TreeWalker::new(&self.config, graph);

        let groups = tree.entries().ok_or_else(|| {
            Error::new(
                ErrorKind::StructuralViolation,
                format!("root must be a mapping, found {}", tree.shape()),
            )
            .with_operation("builder::render")
        })?;

        for (group, value) in groups {
            tracing::debug!(group, "rendering group");
            walker.context_mut().set_group(group);

            if value.is_null() {
                tracing::debug!(group, "group has no entries");
                continue;
            }
            let entries = value.entries().ok_or_else(|| {
                Error::new(
                    ErrorKind::StructuralViolation,
                    format!("group value must be a mapping, found {}", value.shape()),
                )
                .with_operation("builder::render")
                .with_context("group", group)
            })?;

            for (key, value) in entries {
                walker
                    .walk_entry(key, value, None, 0)
                    .map_err(|e| e.with_operation("builder::render").with_context("group", group))?;
            }
        }

        let graph = walker.finish();
        tracing::info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "render complete"
        );
        Ok(graph)
    }
}

/// Render `tree` with the default configuration.
pub fn render(tree: &ConfigTree) -> Result<Graph> {
    GraphBuilder::default().render(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_carries_global_style() {
        let graph = render(&ConfigTree::ordered(Vec::<(&str, ConfigTree)>::new())).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.attrs().get("nodesep").map(String::as_str), Some("4"));
        assert_eq!(
            graph.node_defaults().get("style").map(String::as_str),
            Some("rounded,filled")
        );
    }

    #[test]
    fn scalar_root_is_rejected() {
        let err = render(&ConfigTree::str("just a string")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StructuralViolation);
        assert_eq!(err.operation(), "builder::render");
    }

    #[test]
    fn null_group_is_empty() {
        let tree = ConfigTree::ordered([("services", ConfigTree::null())]);
        assert!(render(&tree).unwrap().is_empty());
    }

    #[test]
    fn list_group_is_rejected() {
        let tree = ConfigTree::ordered([("services", ConfigTree::list([ConfigTree::str("api")]))]);
        let err = render(&tree).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StructuralViolation);
        assert_eq!(err.context_value("group"), Some("services"));
    }

    #[test]
    fn invalid_config_is_reported_before_walking() {
        let mut config = RenderConfig::default();
        config.depth_rule.category_depths.insert(0);
        let err = GraphBuilder::new(config)
            .render(&ConfigTree::ordered(Vec::<(&str, ConfigTree)>::new()))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}

//! Schema-specific render configuration.
//!
//! The defaults describe the component inventory this tool was written for:
//! groups of components, each with `docker_image`, `git` and
//! `docker_container` lists. Other schemas override them, usually from a TOML
//! file loaded by the CLI.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::filter::ExclusionFilter;
use crate::{Error, Result};

pub const DEFAULT_CATEGORIES: [&str; 3] = ["docker_image", "git", "docker_container"];

/// Which context slot names a node at a given depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixSource {
    Group,
    Category,
}

/// Maps recursion depth to a suffix source.
///
/// Depths outside both sets have no defined suffix; reaching one while
/// resolving a node is a structural violation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepthRule {
    pub group_depths: BTreeSet<usize>,
    pub category_depths: BTreeSet<usize>,
}

impl Default for DepthRule {
    fn default() -> Self {
        Self {
            group_depths: BTreeSet::from([0, 1]),
            category_depths: BTreeSet::from([4]),
        }
    }
}

impl DepthRule {
    pub fn suffix_source(&self, depth: usize) -> Option<SuffixSource> {
        if self.group_depths.contains(&depth) {
            Some(SuffixSource::Group)
        } else if self.category_depths.contains(&depth) {
            Some(SuffixSource::Category)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(depth) = self.group_depths.intersection(&self.category_depths).next() {
            return Err(Error::config_invalid(format!(
                "depth {depth} is mapped to both group and category"
            ))
            .with_operation("config::validate")
            .with_context("depth", depth.to_string()));
        }
        Ok(())
    }
}

/// Fixed visual attributes of the rendered graph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphStyle {
    pub graph: BTreeMap<String, String>,
    pub node: BTreeMap<String, String>,
    pub edge: BTreeMap<String, String>,
}

fn attr_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            graph: attr_map(&[
                ("nodesep", "4"),
                ("pad", "0.5"),
                ("ranksep", "0.5"),
                ("fontname", "Fira Mono"),
                ("fontsize", "11"),
            ]),
            node: attr_map(&[
                ("fontname", "Fira Mono"),
                ("fontsize", "10"),
                ("margin", "0.3,0.1"),
                ("fillcolor", "#fafafa"),
                ("shape", "box"),
                ("penwidth", "2.0"),
                ("style", "rounded,filled"),
            ]),
            edge: attr_map(&[("arrowhead", "none"), ("penwidth", "2.0")]),
        }
    }
}

/// Everything a render needs to know about the input schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Mid-level keys that are transparent in the graph and switch the suffix.
    pub categories: Vec<String>,
    pub exclusion: ExclusionFilter,
    pub depth_rule: DepthRule,
    pub style: GraphStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            exclusion: ExclusionFilter::default(),
            depth_rule: DepthRule::default(),
            style: GraphStyle::default(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_exclusion(mut self, exclusion: ExclusionFilter) -> Self {
        self.exclusion = exclusion;
        self
    }

    pub fn with_depth_rule(mut self, depth_rule: DepthRule) -> Self {
        self.depth_rule = depth_rule;
        self
    }

    pub fn is_category(&self, key: &str) -> bool {
        self.categories.iter().any(|c| c == key)
    }

    pub fn validate(&self) -> Result<()> {
        self.depth_rule.validate()?;
        if let Some(category) = self.categories.iter().find(|c| c.is_empty()) {
            return Err(Error::config_invalid("category names must not be empty")
                .with_operation("config::validate")
                .with_context("category", category.clone()));
        }
        Ok(())
    }
}

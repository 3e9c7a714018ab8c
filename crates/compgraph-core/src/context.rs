//! Naming context consulted when composite keys are built.

use crate::config::{DepthRule, SuffixSource};
use crate::{Error, Result};

/// The active group (top-level entry) and category (transparent mid-level key).
///
/// Group is overwritten once per top-level entry and never cleared. Category is
/// only set while a category subtree is being walked.
#[derive(Debug, Clone, Default)]
pub struct ContextStack {
    group: String,
    category: String,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_group(&mut self, name: impl Into<String>) {
        self.group = name.into();
    }

    pub fn set_category(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.category.is_empty() {
            tracing::warn!(
                outer = %self.category,
                inner = %name,
                "nested category replaces the active one"
            );
        }
        self.category = name;
    }

    pub fn clear_category(&mut self) {
        self.category.clear();
    }

    pub fn current_group(&self) -> &str {
        &self.group
    }

    pub fn current_category(&self) -> &str {
        &self.category
    }

    pub fn has_category(&self) -> bool {
        !self.category.is_empty()
    }

    /// Build the composite key for `label` at `depth`.
    pub fn composite_key(&self, rule: &DepthRule, label: &str, depth: usize) -> Result<String> {
        let suffix = match rule.suffix_source(depth) {
            Some(SuffixSource::Group) => self.current_group(),
            Some(SuffixSource::Category) => self.current_category(),
            None => {
                return Err(Error::structural_violation(depth, label)
                    .with_operation("context::composite_key")
                    .with_context("group", self.group.clone())
                    .with_context("category", self.category.clone()));
            }
        };
        Ok(format!("{label}:{suffix}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn category_is_scoped() {
        let mut ctx = ContextStack::new();
        ctx.set_group("services");
        ctx.set_category("git");
        assert_eq!(ctx.current_group(), "services");
        assert_eq!(ctx.current_category(), "git");
        assert!(ctx.has_category());

        ctx.clear_category();
        assert_eq!(ctx.current_category(), "");
        assert_eq!(ctx.current_group(), "services");
        assert!(!ctx.has_category());
    }

    #[test]
    fn group_is_overwritten_not_cleared() {
        let mut ctx = ContextStack::new();
        ctx.set_group("frontend");
        ctx.set_group("backend");
        assert_eq!(ctx.current_group(), "backend");
    }

    #[test]
    fn composite_key_follows_depth_rule() {
        let rule = DepthRule::default();
        let mut ctx = ContextStack::new();
        ctx.set_group("services");
        ctx.set_category("docker_image");

        assert_eq!(
            ctx.composite_key(&rule, "api", 0).unwrap(),
            "api:services"
        );
        assert_eq!(
            ctx.composite_key(&rule, "owner", 1).unwrap(),
            "owner:services"
        );
        assert_eq!(
            ctx.composite_key(&rule, "base:1.0", 4).unwrap(),
            "base:1.0:docker_image"
        );
    }

    #[test]
    fn composite_key_rejects_unmapped_depths() {
        let rule = DepthRule::default();
        let ctx = ContextStack::new();
        for depth in [2, 3, 5] {
            let err = ctx.composite_key(&rule, "x", depth).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::StructuralViolation);
            assert_eq!(err.context_value("depth"), Some(depth.to_string().as_str()));
        }
    }
}

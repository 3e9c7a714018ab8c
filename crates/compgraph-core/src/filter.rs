//! Labels that never become graph nodes.

use serde::Deserialize;

/// Sentinel labels marking structural flags rather than resources.
pub const DEFAULT_FORBIDDEN_LABELS: [&str; 3] = [
    "release_component",
    "independent_component",
    "non_core_component",
];

/// Boolean-valued leaves are not rendered.
pub const DEFAULT_FORBIDDEN_SUBSTRINGS: [&str; 2] = ["true", "false"];

/// Declarative exclusion policy.
///
/// A label is excluded when it is empty, equals one of `forbidden_labels`, or
/// contains any of `forbidden_substrings`. Substring matching is literal, so
/// `"falsehood:1.0"` is excluded just like `"false"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExclusionFilter {
    pub forbidden_labels: Vec<String>,
    pub forbidden_substrings: Vec<String>,
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self {
            forbidden_labels: DEFAULT_FORBIDDEN_LABELS.iter().map(|s| s.to_string()).collect(),
            forbidden_substrings: DEFAULT_FORBIDDEN_SUBSTRINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ExclusionFilter {
    /// A filter that only rejects the empty label.
    pub fn empty_only() -> Self {
        Self {
            forbidden_labels: Vec::new(),
            forbidden_substrings: Vec::new(),
        }
    }

    pub fn is_excluded(&self, label: &str) -> bool {
        label.is_empty()
            || self.forbidden_labels.iter().any(|l| l == label)
            || self
                .forbidden_substrings
                .iter()
                .any(|s| !s.is_empty() && label.contains(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_rejects_sentinels_and_booleans() {
        let filter = ExclusionFilter::default();
        assert!(filter.is_excluded(""));
        assert!(filter.is_excluded("release_component"));
        assert!(filter.is_excluded("independent_component"));
        assert!(filter.is_excluded("non_core_component"));
        assert!(filter.is_excluded("true"));
        assert!(filter.is_excluded("false"));
        assert!(filter.is_excluded("untrue-image:2"));
        assert!(filter.is_excluded("falsehood"));
    }

    #[test]
    fn default_filter_keeps_resources() {
        let filter = ExclusionFilter::default();
        assert!(!filter.is_excluded("base:1.0"));
        assert!(!filter.is_excluded("git@example.com:team/api.git"));
        assert!(!filter.is_excluded("release_component_v2"));
        assert!(!filter.is_excluded("True"));
    }

    #[test]
    fn empty_only_filter() {
        let filter = ExclusionFilter::empty_only();
        assert!(filter.is_excluded(""));
        assert!(!filter.is_excluded("release_component"));
        assert!(!filter.is_excluded("true"));
    }

    #[test]
    fn empty_substring_does_not_reject_everything() {
        let filter = ExclusionFilter {
            forbidden_labels: Vec::new(),
            forbidden_substrings: vec![String::new()],
        };
        assert!(!filter.is_excluded("api"));
    }
}

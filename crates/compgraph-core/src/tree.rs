//! In-memory configuration tree consumed by the walker.
//!
//! The tree is produced by an external parser (the CLI converts YAML into it).
//! Mapping keys are already strings; how a parser stringifies non-string keys
//! is its own business.

use std::collections::BTreeMap;
use std::fmt;

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Null has no label, which keeps it out of the graph.
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

/// A recursively defined configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigTree {
    /// Key/value pairs in document order.
    Ordered(Vec<(String, ConfigTree)>),
    /// Key/value pairs where order carries no meaning.
    Unordered(BTreeMap<String, ConfigTree>),
    List(Vec<ConfigTree>),
    Scalar(Scalar),
}

impl ConfigTree {
    /// Build an ordered mapping from `(key, value)` pairs.
    pub fn ordered<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ConfigTree)>,
    {
        ConfigTree::Ordered(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build an unordered mapping from `(key, value)` pairs.
    pub fn unordered<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ConfigTree)>,
    {
        ConfigTree::Unordered(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ConfigTree>,
    {
        ConfigTree::List(items.into_iter().collect())
    }

    pub fn str(value: impl Into<String>) -> Self {
        ConfigTree::Scalar(Scalar::Str(value.into()))
    }

    pub fn null() -> Self {
        ConfigTree::Scalar(Scalar::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigTree::Scalar(Scalar::Null))
    }

    /// Short name of the value's shape, for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            ConfigTree::Ordered(_) => "ordered mapping",
            ConfigTree::Unordered(_) => "unordered mapping",
            ConfigTree::List(_) => "list",
            ConfigTree::Scalar(_) => "scalar",
        }
    }

    /// Iterate mapping entries, ordered mappings in document order and
    /// unordered mappings in key order. `None` for non-mapping values.
    pub fn entries(&self) -> Option<Box<dyn Iterator<Item = (&str, &ConfigTree)> + '_>> {
        match self {
            ConfigTree::Ordered(pairs) => {
                Some(Box::new(pairs.iter().map(|(k, v)| (k.as_str(), v))))
            }
            ConfigTree::Unordered(map) => Some(Box::new(map.iter().map(|(k, v)| (k.as_str(), v)))),
            _ => None,
        }
    }
}

impl From<Scalar> for ConfigTree {
    fn from(value: Scalar) -> Self {
        ConfigTree::Scalar(value)
    }
}

impl From<&str> for ConfigTree {
    fn from(value: &str) -> Self {
        ConfigTree::str(value)
    }
}

impl From<bool> for ConfigTree {
    fn from(value: bool) -> Self {
        ConfigTree::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for ConfigTree {
    fn from(value: i64) -> Self {
        ConfigTree::Scalar(Scalar::Int(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_string_forms() {
        assert_eq!(Scalar::Null.to_string(), "");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
        assert_eq!(Scalar::Int(42).to_string(), "42");
        assert_eq!(Scalar::Float(1.5).to_string(), "1.5");
        assert_eq!(Scalar::Str("base:1.0".into()).to_string(), "base:1.0");
    }

    #[test]
    fn entries_follow_mapping_order() {
        let ordered = ConfigTree::ordered([("b", ConfigTree::null()), ("a", ConfigTree::null())]);
        let keys: Vec<_> = ordered.entries().unwrap().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);

        let unordered =
            ConfigTree::unordered([("b", ConfigTree::null()), ("a", ConfigTree::null())]);
        let keys: Vec<_> = unordered.entries().unwrap().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);

        assert!(ConfigTree::str("x").entries().is_none());
        assert!(ConfigTree::list([]).entries().is_none());
    }

    #[test]
    fn shape_names() {
        assert_eq!(ConfigTree::list([]).shape(), "list");
        assert_eq!(ConfigTree::from(true).shape(), "scalar");
        assert!(ConfigTree::null().is_null());
        assert!(!ConfigTree::from(0i64).is_null());
    }
}

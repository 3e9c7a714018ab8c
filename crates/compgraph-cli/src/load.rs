//! YAML input loading.
//!
//! `serde_yaml` mappings keep document order, so every YAML mapping becomes an
//! ordered mapping in the config tree.

use std::io::Read;
use std::path::Path;

use serde_yaml::Value;

use compgraph_core::{ConfigTree, Error, ErrorKind, Result, Scalar};

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Read the input document from `path`, or from stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map_err(|e| {
            Error::from(e)
                .with_operation("load::read_input")
                .with_context("path", "<stdin>")
        })?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|e| {
        Error::from(e)
            .with_operation("load::read_input")
            .with_context("path", path.display().to_string())
    })
}

/// Parse a YAML document into a config tree.
///
/// An empty document yields a mapping with no groups.
pub fn parse_yaml(text: &str) -> Result<ConfigTree> {
    let value: Value = serde_yaml::from_str(text).map_err(|e| {
        let mut err = Error::new(ErrorKind::DeserializationFailed, e.to_string())
            .with_operation("load::parse_yaml");
        if let Some(location) = e.location() {
            err = err
                .with_context("line", location.line().to_string())
                .with_context("column", location.column().to_string());
        }
        err.set_source(e)
    })?;
    if value.is_null() {
        return Ok(ConfigTree::Ordered(Vec::new()));
    }
    from_yaml(value)
}

/// Convert a YAML value into a config tree.
pub fn from_yaml(value: Value) -> Result<ConfigTree> {
    Ok(match value {
        Value::Null => ConfigTree::Scalar(Scalar::Null),
        Value::Bool(b) => ConfigTree::Scalar(Scalar::Bool(b)),
        Value::Number(n) => ConfigTree::Scalar(number_to_scalar(&n)),
        Value::String(s) => ConfigTree::Scalar(Scalar::Str(s)),
        Value::Sequence(items) => ConfigTree::List(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Mapping(mapping) => {
            let mut entries = Vec::with_capacity(mapping.len());
            for (key, value) in mapping {
                entries.push((key_to_string(key)?, from_yaml(value)?));
            }
            ConfigTree::Ordered(entries)
        }
        Value::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

fn number_to_scalar(n: &serde_yaml::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else if n.is_u64() {
        // Beyond i64; the text form is all the graph needs.
        Scalar::Str(n.to_string())
    } else {
        n.as_f64().map(Scalar::Float).unwrap_or_else(|| Scalar::Str(n.to_string()))
    }
}

/// Stringify a mapping key. Only scalar keys have a stable text form.
fn key_to_string(key: Value) -> Result<String> {
    match key {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(number_to_scalar(&n).to_string()),
        Value::String(s) => Ok(s),
        Value::Tagged(tagged) => key_to_string(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => {
            Err(Error::invalid_format("mapping keys must be scalars")
                .with_operation("load::key_to_string"))
        }
    }
}

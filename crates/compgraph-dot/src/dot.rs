//! DOT format utilities for graph rendering.

use std::fmt::Write;

/// DOT keywords, matched case-insensitively by Graphviz.
const KEYWORDS: &[&str] = &["graph", "digraph", "subgraph", "node", "edge", "strict"];

fn is_keyword(id: &str) -> bool {
    KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(id))
}

/// Whether `id` can be written bare: letters, digits and `_`, not starting
/// with a digit, and not a keyword.
fn is_plain_id(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with(|c: char| c.is_ascii_digit())
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_keyword(id)
}

/// Sanitize a string to be a valid DOT identifier.
/// Replaces any non-alphanumeric character with underscore.
pub fn sanitize_id(input: &str) -> String {
    let id: String = input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if id.is_empty() || id.starts_with(|c: char| c.is_ascii_digit()) || is_keyword(&id) {
        format!("_{id}")
    } else {
        id
    }
}

/// Escape special characters for DOT labels.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// Write an attribute name, quoting it unless it is a plain identifier.
fn write_attr_key(output: &mut String, key: &str) {
    if is_plain_id(key) {
        output.push_str(key);
    } else {
        let _ = write!(output, "\"{}\"", escape_label(key));
    }
}

fn write_attrs<'a>(output: &mut String, attrs: impl IntoIterator<Item = (&'a str, &'a str)>) {
    for (i, (key, value)) in attrs.into_iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        write_attr_key(output, key);
        let _ = write!(output, "=\"{}\"", escape_label(value));
    }
}

/// Whether edges are drawn with `--` (undirected) or `->` (directed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphKind {
    #[default]
    Undirected,
    Directed,
}

impl GraphKind {
    fn keyword(self) -> &'static str {
        match self {
            GraphKind::Undirected => "graph",
            GraphKind::Directed => "digraph",
        }
    }

    fn edge_op(self) -> &'static str {
        match self {
            GraphKind::Undirected => "--",
            GraphKind::Directed => "->",
        }
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
    kind: GraphKind,
}

impl DotBuilder {
    /// Create a new DOT graph of the given kind and name.
    pub fn new(kind: GraphKind, name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "{} {} {{", kind.keyword(), sanitize_id(name));
        Self {
            output,
            indent: 1,
            kind,
        }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        write_attr_key(&mut self.output, key);
        let _ = writeln!(self.output, "=\"{}\";", escape_label(value));
        self
    }

    /// Add a node style default.
    pub fn node_style<'a>(
        &mut self,
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str("node [");
        write_attrs(&mut self.output, attrs);
        self.output.push_str("];\n");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with attributes.
    pub fn node<'a>(
        &mut self,
        id: &str,
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{id} [");
        write_attrs(&mut self.output, attrs);
        self.output.push_str("];\n");
        self
    }

    /// Add an edge with attributes.
    pub fn edge<'a>(
        &mut self,
        from: &str,
        to: &str,
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{from} {} {to}", self.kind.edge_op());
        let mut attrs = attrs.into_iter().peekable();
        if attrs.peek().is_some() {
            self.output.push_str(" [");
            write_attrs(&mut self.output, attrs);
            self.output.push(']');
        }
        self.output.push_str(";\n");
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

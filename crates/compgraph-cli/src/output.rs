//! Output generation (DOT graphs).

use std::path::Path;
use std::time::Instant;

use tracing::info;

use compgraph_core::{Error, Graph, Result};
use compgraph_dot::render_dot_named;

use crate::CompgraphOptions;

/// Generate DOT output for a rendered graph.
pub fn generate_dot_output(opts: &CompgraphOptions, graph: &Graph) -> String {
    let render_start = Instant::now();
    let result = render_dot_named(graph, &opts.graph_name);
    info!(
        "DOT rendering: {:.3}s",
        render_start.elapsed().as_secs_f64()
    );
    result
}

/// Write `output` to `path`.
pub fn write_output(path: &Path, output: &str) -> Result<()> {
    std::fs::write(path, output).map_err(|e| {
        Error::from(e)
            .with_operation("output::write_output")
            .with_context("path", path.display().to_string())
    })?;
    info!(path = %path.display(), "output written");
    Ok(())
}

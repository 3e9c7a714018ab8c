//! compgraph command-line interface.
//!
pub mod config;
pub mod load;
pub mod output;

use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use compgraph_core::{GraphBuilder, Result};

pub use config::{load_config, parse_config};
pub use load::{parse_yaml, read_input};
pub use output::{generate_dot_output, write_output};

/// Options for running compgraph.
#[derive(Debug, Clone)]
pub struct CompgraphOptions {
    /// Input YAML document, `-` for stdin.
    pub input: PathBuf,
    /// Optional TOML render configuration.
    pub config: Option<PathBuf>,
    /// Name of the emitted DOT graph.
    pub graph_name: String,
}

/// Main entry point: load, render, and return the DOT text.
pub fn run_main(opts: &CompgraphOptions) -> Result<String> {
    let config = load_config(opts.config.as_deref())?;

    let parse_start = Instant::now();
    let text = read_input(&opts.input)?;
    let tree = parse_yaml(&text).map_err(|e| {
        e.with_context("path", opts.input.display().to_string())
    })?;
    info!("Parsing: {:.3}s", parse_start.elapsed().as_secs_f64());

    let render_start = Instant::now();
    let graph = GraphBuilder::new(config).render(&tree).map_err(|e| {
        e.with_context("path", opts.input.display().to_string())
    })?;
    info!(
        "Graph building: {:.3}s",
        render_start.elapsed().as_secs_f64()
    );

    Ok(generate_dot_output(opts, &graph))
}

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use compgraph::{CompgraphOptions, run_main, write_output};
use compgraph_core::Error;
use compgraph_dot::DEFAULT_GRAPH_NAME;

#[derive(Parser, Debug)]
#[command(
    name = "compgraph",
    about = "compgraph: see which components share images, repos, and containers",
    version
)]
pub struct Cli {
    /// YAML component inventory to render (`-` reads stdin)
    #[arg(value_name = "FILE", required_unless_present = "file")]
    input: Option<PathBuf>,

    /// YAML component inventory to render (alternative to the positional argument)
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "input")]
    file: Option<PathBuf>,

    /// TOML render configuration (categories, exclusions, depth rule, style)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Name of the emitted DOT graph
    #[arg(long = "name", value_name = "NAME", default_value = DEFAULT_GRAPH_NAME)]
    name: String,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

fn run(args: Cli) -> ExitCode {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let output = args.output;
    let result = args
        .file
        .or(args.input)
        .ok_or_else(|| Error::invalid_argument("no input file given"))
        .and_then(|input| {
            let opts = CompgraphOptions {
                input,
                config: args.config,
                graph_name: args.name,
            };
            run_main(&opts)
        })
        .and_then(|dot| match &output {
            Some(path) => write_output(path, &dot),
            None => {
                print!("{dot}");
                Ok(())
            }
        });

    let total_secs = total_start.elapsed().as_secs_f64();
    match result {
        Ok(()) => {
            tracing::info!(total_secs, "complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            // 2 for problems in the input document, 1 for everything else.
            if e.kind().is_input_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn main() -> ExitCode {
    run(Cli::parse())
}

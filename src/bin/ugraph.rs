//! CLI entry point for the `ugraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use undirected_graph::cli::commands;
use undirected_graph::cli::{NamedGraph, TraverseOptions};
use undirected_graph::config::{load_or_default, OutputFormat};
use undirected_graph::graph::TraversalOrder;

#[derive(Parser)]
#[command(
    name = "ugraph",
    about = "Build an undirected graph from the command line and traverse it"
)]
struct Cli {
    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file (default: $UGRAPH_CONFIG, then ./ugraph.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GraphArgs {
    /// Comma-separated vertex names (no `-`)
    #[arg(long)]
    vertices: String,
    /// Comma-separated edges, each written `a-b`
    #[arg(long)]
    edges: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Traverse the graph from a starting vertex
    Traverse {
        #[command(flatten)]
        graph: GraphArgs,
        /// Starting vertex name
        #[arg(long)]
        start: String,
        /// Order: dfs or bfs
        #[arg(long)]
        order: Option<String>,
        /// Maximum traversal depth
        #[arg(long)]
        max_depth: Option<u32>,
        /// Maximum vertices to return
        #[arg(long)]
        max_results: Option<usize>,
    },
    /// Show vertex and edge counts with each vertex's neighbors
    Info {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let format = cli.format.unwrap_or(config.format);

    let result = match cli.command {
        Commands::Traverse {
            graph,
            start,
            order,
            max_depth,
            max_results,
        } => {
            let order = match order {
                Some(name) => name.parse::<TraversalOrder>(),
                None => config.traversal_order(),
            };
            order.and_then(|order| {
                let named = NamedGraph::parse(&graph.vertices, graph.edges.as_deref())?;
                let options = TraverseOptions {
                    order,
                    max_depth: max_depth.unwrap_or(config.max_depth),
                    max_results: max_results.unwrap_or(config.max_results),
                };
                commands::cmd_traverse(&named, &start, options, format)
            })
        }
        Commands::Info { graph } => NamedGraph::parse(&graph.vertices, graph.edges.as_deref())
            .and_then(|named| commands::cmd_info(&named, format)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

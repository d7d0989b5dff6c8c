use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pathscope - single-source shortest paths over weighted directed graphs
#[derive(Debug, Parser)]
#[command(name = "pathscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run Bellman-Ford and report distances, predecessors and negative cycles.
    BellmanFord {
        /// JSON graph description. Uses the built-in sample graph when omitted.
        #[arg(short, long, value_name = "FILE")]
        graph: Option<PathBuf>,

        /// Source vertex identifier (defaults to `s` for the sample, else the first vertex).
        #[arg(short, long, value_name = "ID")]
        source: Option<String>,

        /// Print the vertex table after initialization and after every relaxation.
        #[arg(long)]
        trace: bool,
    },

    /// Run shortest paths over an acyclic graph in topological order.
    Dag {
        /// JSON graph description. Uses the built-in sample DAG when omitted.
        #[arg(short, long, value_name = "FILE")]
        graph: Option<PathBuf>,

        /// Source vertex identifier (defaults to `r` for the sample, else the first vertex).
        #[arg(short, long, value_name = "ID")]
        source: Option<String>,
    },

    /// Run a depth-first search and report discovery and finish stamps.
    Dfs {
        /// JSON graph description. Uses the built-in sample DAG when omitted.
        #[arg(short, long, value_name = "FILE")]
        graph: Option<PathBuf>,
    },
}

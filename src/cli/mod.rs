//! CLI argument parsing for routekit
//!
//! Supports global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use routekit_core::format::OutputFormat;

/// Routekit - shortest paths, spanning forests and tours over weighted graphs
#[derive(Parser, Debug)]
#[command(name = "routekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Solver configuration file (TOML)
    #[arg(long, global = true, env = "ROUTEKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human, json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest distances from one node to every other (Dijkstra)
    Paths {
        /// Graph file (.toml or .json)
        graph: PathBuf,

        /// Source node label or index
        #[arg(long)]
        from: String,
    },

    /// Distance matrix between every pair of nodes (Floyd-Warshall)
    AllPairs {
        /// Graph file (.toml or .json)
        graph: PathBuf,
    },

    /// Shortest route between two nodes, hop by hop
    Route {
        /// Graph file (.toml or .json)
        graph: PathBuf,

        /// Start node label or index
        #[arg(long)]
        from: String,

        /// End node label or index
        #[arg(long)]
        to: String,
    },

    /// Reachability matrix (Warshall transitive closure)
    Closure {
        /// Graph file (.toml or .json)
        graph: PathBuf,

        /// Treat every node as reachable from itself
        #[arg(long)]
        reflexive: bool,
    },

    /// Minimum spanning tree, or forest for disconnected graphs (Kruskal)
    Mst {
        /// Graph file (.toml or .json)
        graph: PathBuf,
    },

    /// Cheapest path visiting each node exactly once (exhaustive search)
    Hamiltonian {
        /// Graph file (.toml or .json)
        graph: PathBuf,

        /// Nodes to visit (default: all)
        #[arg(long, value_delimiter = ',')]
        nodes: Vec<String>,

        /// List every Hamiltonian path instead of the cheapest
        #[arg(long)]
        all: bool,
    },

    /// Cheapest walk visiting each node at least once (bitmask DP)
    Walk {
        /// Graph file (.toml or .json)
        graph: PathBuf,

        /// Nodes to visit (default: all)
        #[arg(long, value_delimiter = ',')]
        nodes: Vec<String>,

        /// Also print the full route including intermediate nodes
        #[arg(long)]
        expand: bool,
    },
}

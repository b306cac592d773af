//! Helper functions shared across commands

use std::path::Path;
use std::time::Instant;

use routekit_core::config::SolverConfig;
use routekit_core::error::Result;
use routekit_core::format::format_weight;
use routekit_core::graph::{Graph, GraphFile, Matrix, NodeId, Weight};
use serde_json::Value;

use crate::cli::Cli;

/// A loaded graph together with the solver configuration in effect
pub struct Session {
    pub graph: Graph,
    pub config: SolverConfig,
}

impl Session {
    /// Read the configuration (if any) and the graph file named on the command line
    pub fn load(cli: &Cli, graph_path: &Path, start: Instant) -> Result<Self> {
        let config = SolverConfig::load_or_default(cli.config.as_deref())?;
        let graph = GraphFile::load(graph_path)?.into_graph()?;

        tracing::debug!(
            path = %graph_path.display(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            elapsed = ?start.elapsed(),
            "load_graph"
        );

        Ok(Self { graph, config })
    }

    /// Resolve `--nodes` arguments; an empty list selects every node
    pub fn select_nodes(&self, names: &[String]) -> Result<Vec<NodeId>> {
        if names.is_empty() {
            return Ok(self.graph.nodes().collect());
        }
        names.iter().map(|name| self.graph.resolve(name.trim())).collect()
    }

    pub fn name(&self, node: NodeId) -> String {
        self.graph.display_name(node)
    }

    pub fn names(&self, nodes: &[NodeId]) -> Vec<String> {
        nodes.iter().map(|&n| self.name(n)).collect()
    }

    /// Human rendering of a weight using the configured precision
    pub fn weight(&self, weight: Weight) -> String {
        format_weight(weight, self.config.output.precision)
    }
}

/// JSON rendering of a weight; unreachable costs become `null`
pub fn json_weight(weight: Weight) -> Value {
    if weight.is_finite() {
        Value::from(weight)
    } else {
        Value::Null
    }
}

/// Pretty-print a JSON document to stdout
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a labelled matrix with a header row of node names
pub fn print_table<T>(
    cli: &Cli,
    session: &Session,
    matrix: &Matrix<T>,
    cell: impl Fn(&T) -> String,
) {
    let names = session.names(&session.graph.nodes().collect::<Vec<_>>());
    let width = names.iter().map(String::len).max().unwrap_or(0).max(3);

    if !cli.quiet {
        let header: Vec<String> = names.iter().map(|n| format!("{:>width$}", n)).collect();
        println!("{:width$}  {}", "", header.join("  "));
    }
    for (name, row) in names.iter().zip(matrix.rows()) {
        let cells: Vec<String> = row.iter().map(|c| format!("{:>width$}", cell(c))).collect();
        println!("{:width$}  {}", name, cells.join("  "));
    }
}

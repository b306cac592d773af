//! Graph definition files (TOML or JSON)
//!
//! ```toml
//! directed = false
//! nodes = ["CDMX", "Edomex", "Puebla"]
//!
//! [[edges]]
//! from = "CDMX"
//! to = "Edomex"
//! weight = 40
//! ```
//!
//! Unlabelled graphs omit `nodes`, reference nodes by index and may give
//! `node_count` (otherwise the highest referenced index decides).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::types::Weight;
use crate::graph::{Graph, GraphBuilder, NodeRef};

/// One weighted edge in a graph file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: NodeRef,
    pub to: NodeRef,
    pub weight: Weight,
}

/// On-disk graph description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub directed: bool,

    /// Accept negative edge weights
    #[serde(default)]
    pub allow_negative: bool,

    /// Node labels, in index order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,

    /// Node count for unlabelled graphs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_count: Option<usize>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Serialization format of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Toml,
    Json,
}

impl GraphFormat {
    /// `.json` files are JSON, everything else is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => GraphFormat::Json,
            _ => GraphFormat::Toml,
        }
    }
}

impl GraphFile {
    /// Read a graph file, choosing the format from the extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file = Self::parse(&content, GraphFormat::from_path(path))?;
        tracing::debug!(
            path = %path.display(),
            nodes = file.nodes.len(),
            edges = file.edges.len(),
            "graph_file_loaded"
        );
        Ok(file)
    }

    pub fn parse(content: &str, format: GraphFormat) -> Result<Self> {
        Ok(match format {
            GraphFormat::Toml => toml::from_str(content)?,
            GraphFormat::Json => serde_json::from_str(content)?,
        })
    }

    /// Number of nodes the file describes
    pub fn resolved_node_count(&self) -> usize {
        if !self.nodes.is_empty() {
            return self.nodes.len();
        }
        self.node_count.unwrap_or_else(|| {
            self.edges
                .iter()
                .flat_map(|e| [&e.from, &e.to])
                .filter_map(|r| match r {
                    NodeRef::Index(i) => Some(i + 1),
                    NodeRef::Label(_) => None,
                })
                .max()
                .unwrap_or(0)
        })
    }

    /// Validate and build the graph
    pub fn into_graph(self) -> Result<Graph> {
        let builder = if self.nodes.is_empty() {
            GraphBuilder::new(self.resolved_node_count())
        } else {
            GraphBuilder::labelled(self.nodes)
        };
        let builder = builder
            .directed(self.directed)
            .allow_negative_weights(self.allow_negative);

        self.edges
            .into_iter()
            .fold(builder, |builder, edge| {
                builder.edge_between(edge.from, edge.to, edge.weight)
            })
            .build()
    }
}

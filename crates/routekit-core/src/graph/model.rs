//! Weighted graph container with a stable node-index mapping

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{RouteError, Result};
use crate::graph::types::{Edge, Matrix, NodeId, Weight, INF};

/// Outgoing edge as seen from its source node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: Weight,
}

/// Immutable weighted graph
///
/// Nodes are `0..node_count()`, optionally carrying unique labels. Undirected
/// graphs keep each edge once in [`Graph::edges`] and expose it from both
/// endpoints in [`Graph::neighbors`].
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    labels: Vec<String>,
    label_index: HashMap<String, NodeId>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Neighbor>>,
}

impl Graph {
    /// Build an unlabelled graph from `(from, to, weight)` triples
    pub fn from_edges(
        node_count: usize,
        edges: &[(NodeId, NodeId, Weight)],
        directed: bool,
    ) -> Result<Self> {
        edges
            .iter()
            .fold(
                GraphBuilder::new(node_count).directed(directed),
                |builder, &(from, to, weight)| builder.edge(from, to, weight),
            )
            .build()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn nodes(&self) -> std::ops::Range<NodeId> {
        0..self.node_count()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outgoing edges of `node`; empty for an unknown node
    pub fn neighbors(&self, node: NodeId) -> &[Neighbor] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the cheapest direct edge `from -> to`, or `INF` if none
    pub fn weight(&self, from: NodeId, to: NodeId) -> Weight {
        self.neighbors(from)
            .iter()
            .filter(|n| n.node == to)
            .map(|n| n.weight)
            .fold(INF, f64::min)
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).iter().any(|n| n.node == to)
    }

    pub fn has_negative_weights(&self) -> bool {
        self.edges.iter().any(|e| e.weight < 0.0)
    }

    pub fn is_labelled(&self) -> bool {
        !self.labels.is_empty()
    }

    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.labels.get(node).map(String::as_str)
    }

    pub fn index_of(&self, label: &str) -> Option<NodeId> {
        self.label_index.get(label).copied()
    }

    /// Label of `node`, or its index for unlabelled graphs
    pub fn display_name(&self, node: NodeId) -> String {
        self.label(node)
            .map(str::to_string)
            .unwrap_or_else(|| node.to_string())
    }

    /// Resolve a user-supplied node reference: a label first, then an index
    pub fn resolve(&self, name: &str) -> Result<NodeId> {
        if let Some(id) = self.index_of(name) {
            return Ok(id);
        }
        match name.parse::<NodeId>() {
            Ok(id) if id < self.node_count() => Ok(id),
            _ => Err(RouteError::UnknownNode(name.to_string())),
        }
    }

    /// Direct-edge reachability; the diagonal is set only by self-loops
    pub fn adjacency_matrix(&self) -> Matrix<bool> {
        let mut matrix = Matrix::filled(self.node_count(), false);
        for (from, neighbors) in self.adjacency.iter().enumerate() {
            for n in neighbors {
                matrix.set(from, n.node, true);
            }
        }
        matrix
    }

    /// Cheapest direct edge per pair, `0` on the diagonal and `INF` elsewhere
    pub fn weight_matrix(&self) -> Matrix<Weight> {
        let n = self.node_count();
        let mut matrix = Matrix::filled(n, INF);
        for i in 0..n {
            matrix.set(i, i, 0.0);
        }
        for (from, neighbors) in self.adjacency.iter().enumerate() {
            for nb in neighbors {
                if nb.weight < *matrix.get(from, nb.node) {
                    matrix.set(from, nb.node, nb.weight);
                }
            }
        }
        matrix
    }
}

/// Node reference resolved when the graph is built: an index or a label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Index(NodeId),
    Label(String),
}

impl std::fmt::Display for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeRef::Index(id) => write!(f, "{}", id),
            NodeRef::Label(label) => write!(f, "{}", label),
        }
    }
}

/// Validating builder for [`Graph`]
///
/// ```
/// use routekit_core::graph::GraphBuilder;
///
/// let graph = GraphBuilder::labelled(["A", "B", "C"])
///     .directed(true)
///     .labelled_edge("A", "B", 3.0)
///     .labelled_edge("B", "C", 1.0)
///     .build()
///     .unwrap();
/// assert_eq!(graph.weight(0, 1), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    node_count: usize,
    labels: Vec<String>,
    directed: bool,
    allow_negative: bool,
    edges: Vec<(NodeRef, NodeRef, Weight)>,
}

impl GraphBuilder {
    /// Builder for an unlabelled graph with nodes `0..node_count`
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            labels: Vec::new(),
            directed: false,
            allow_negative: false,
            edges: Vec::new(),
        }
    }

    /// Builder for a graph whose nodes are the given labels, in order
    pub fn labelled<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        Self {
            node_count: labels.len(),
            labels,
            ..Self::new(0)
        }
    }

    /// Directed graphs keep edges one-way (default: undirected)
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Accept negative weights instead of rejecting them as invalid edges
    pub fn allow_negative_weights(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    pub fn edge(self, from: NodeId, to: NodeId, weight: Weight) -> Self {
        self.edge_between(NodeRef::Index(from), NodeRef::Index(to), weight)
    }

    pub fn labelled_edge(self, from: &str, to: &str, weight: Weight) -> Self {
        self.edge_between(
            NodeRef::Label(from.to_string()),
            NodeRef::Label(to.to_string()),
            weight,
        )
    }

    pub fn edge_between(mut self, from: NodeRef, to: NodeRef, weight: Weight) -> Self {
        self.edges.push((from, to, weight));
        self
    }

    #[tracing::instrument(skip(self), fields(nodes = self.node_count, edges = self.edges.len(), directed = self.directed))]
    pub fn build(self) -> Result<Graph> {
        let mut label_index = HashMap::with_capacity(self.labels.len());
        for (id, label) in self.labels.iter().enumerate() {
            if label_index.insert(label.clone(), id).is_some() {
                crate::bail_invalid!("node label", format!("{} (duplicate)", label));
            }
        }

        let resolve = |endpoint: &NodeRef| -> Option<NodeId> {
            match endpoint {
                NodeRef::Index(id) if *id < self.node_count => Some(*id),
                NodeRef::Index(_) => None,
                NodeRef::Label(label) => label_index.get(label).copied(),
            }
        };

        let mut edges = Vec::with_capacity(self.edges.len());
        let mut adjacency = vec![Vec::new(); self.node_count];
        for (from, to, weight) in &self.edges {
            let (Some(u), Some(v)) = (resolve(from), resolve(to)) else {
                return Err(RouteError::invalid_edge(from, to, "unknown node"));
            };
            if !weight.is_finite() {
                return Err(RouteError::invalid_edge(
                    from,
                    to,
                    format!("weight {} is not finite", weight),
                ));
            }
            if *weight < 0.0 && !self.allow_negative {
                return Err(RouteError::invalid_edge(
                    from,
                    to,
                    format!("negative weight {} not allowed", weight),
                ));
            }

            edges.push(Edge::new(u, v, *weight));
            adjacency[u].push(Neighbor {
                node: v,
                weight: *weight,
            });
            if !self.directed && u != v {
                adjacency[v].push(Neighbor {
                    node: u,
                    weight: *weight,
                });
            }
        }

        tracing::debug!("graph_built");

        Ok(Graph {
            directed: self.directed,
            labels: self.labels,
            label_index,
            edges,
            adjacency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states() -> Graph {
        GraphBuilder::labelled(["CDMX", "Edomex", "Puebla"])
            .labelled_edge("CDMX", "Edomex", 40.0)
            .labelled_edge("Edomex", "Puebla", 110.0)
            .labelled_edge("CDMX", "Puebla", 130.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_undirected_edges_are_symmetric() {
        let graph = states();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.weight(0, 1), 40.0);
        assert_eq!(graph.weight(1, 0), 40.0);
        assert_eq!(graph.neighbors(2).len(), 2);
    }

    #[test]
    fn test_directed_edges_are_one_way() {
        let graph = Graph::from_edges(2, &[(0, 1, 5.0)], true).unwrap();
        assert_eq!(graph.weight(0, 1), 5.0);
        assert_eq!(graph.weight(1, 0), INF);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
    }

    #[test]
    fn test_parallel_edges_report_cheapest() {
        let graph = Graph::from_edges(2, &[(0, 1, 7.0), (0, 1, 2.0)], true).unwrap();
        assert_eq!(graph.weight(0, 1), 2.0);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_missing_edge_is_inf() {
        let graph = Graph::from_edges(3, &[(0, 1, 1.0)], false).unwrap();
        assert_eq!(graph.weight(0, 2), INF);
        assert_eq!(graph.weight(0, 0), INF);
        assert!(graph.neighbors(99).is_empty());
    }

    #[test]
    fn test_unknown_index_is_invalid_edge() {
        let err = Graph::from_edges(2, &[(0, 2, 1.0)], false).unwrap_err();
        assert!(matches!(err, RouteError::InvalidEdge { .. }));
    }

    #[test]
    fn test_unknown_label_is_invalid_edge() {
        let err = GraphBuilder::labelled(["A"])
            .labelled_edge("A", "Z", 1.0)
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid edge A -> Z: unknown node");
    }

    #[test]
    fn test_negative_weight_rejected_by_default() {
        let err = Graph::from_edges(2, &[(0, 1, -1.0)], true).unwrap_err();
        assert!(matches!(err, RouteError::InvalidEdge { .. }));
    }

    #[test]
    fn test_negative_weight_allowed_on_request() {
        let graph = GraphBuilder::new(2)
            .directed(true)
            .allow_negative_weights(true)
            .edge(0, 1, -1.0)
            .build()
            .unwrap();
        assert!(graph.has_negative_weights());
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let err = Graph::from_edges(2, &[(0, 1, f64::NAN)], true).unwrap_err();
        assert!(matches!(err, RouteError::InvalidEdge { .. }));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = GraphBuilder::labelled(["A", "A"]).build().unwrap_err();
        assert!(matches!(err, RouteError::InvalidValue { .. }));
    }

    #[test]
    fn test_resolve_label_then_index() {
        let graph = states();
        assert_eq!(graph.resolve("Puebla").unwrap(), 2);
        assert_eq!(graph.resolve("1").unwrap(), 1);
        assert!(matches!(
            graph.resolve("Oaxaca"),
            Err(RouteError::UnknownNode(_))
        ));
        assert!(graph.resolve("3").is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(states().display_name(1), "Edomex");
        let plain = Graph::from_edges(2, &[], false).unwrap();
        assert_eq!(plain.display_name(1), "1");
    }

    #[test]
    fn test_weight_matrix_has_zero_diagonal() {
        let m = states().weight_matrix();
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(0, 2)], 130.0);
        assert_eq!(m[(2, 1)], 110.0);
    }

    #[test]
    fn test_adjacency_matrix_diagonal_only_from_self_loops() {
        let graph = Graph::from_edges(2, &[(0, 0, 1.0), (0, 1, 1.0)], true).unwrap();
        let m = graph.adjacency_matrix();
        assert!(m[(0, 0)]);
        assert!(!m[(1, 1)]);
        assert!(m[(0, 1)]);
        assert!(!m[(1, 0)]);
    }
}

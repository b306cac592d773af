//! Minimum spanning forest via Kruskal's algorithm
//!
//! Edges are read as undirected regardless of the graph's orientation.

use crate::graph::types::SpanningForest;
use crate::graph::union_find::DisjointSet;
use crate::graph::Graph;

/// Kruskal's minimum spanning forest
///
/// Ties between equal weights keep insertion order, so the output is
/// deterministic. A disconnected graph yields one tree per component
/// (`node_count - components` edges in total).
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn minimum_spanning_forest(graph: &Graph) -> SpanningForest {
    let mut edges = graph.edges().to_vec();
    // sort_by is stable: equal weights stay in insertion order
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets = DisjointSet::new(graph.node_count());
    let mut selected = Vec::with_capacity(graph.node_count().saturating_sub(1));
    let mut total_weight = 0.0;

    for edge in edges {
        if sets.union(edge.from, edge.to) {
            total_weight += edge.weight;
            selected.push(edge);
        }
    }

    let components = sets.set_count();
    tracing::debug!(
        selected = selected.len(),
        components,
        total_weight,
        "kruskal_complete"
    );

    SpanningForest {
        edges: selected,
        total_weight,
        components,
    }
}

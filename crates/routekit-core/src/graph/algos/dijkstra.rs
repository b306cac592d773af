use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::error::{RouteError, Result};
use crate::graph::types::{NodeId, ShortestPaths, Weight, INF};
use crate::graph::Graph;
use crate::trace_time;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: NodeId,
    pub distance: Weight,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Single-source shortest paths from `source`
///
/// Requires non-negative weights: a negative edge anywhere in the graph is
/// reported as `NegativeWeight` before any work is done, since the algorithm
/// would otherwise return wrong distances silently.
///
/// Time: O((V + E) log V)
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn shortest_paths_from(graph: &Graph, source: NodeId) -> Result<ShortestPaths> {
    let start = Instant::now();

    if graph.node_count() == 0 {
        return Err(RouteError::empty("dijkstra"));
    }
    if source >= graph.node_count() {
        return Err(RouteError::UnknownNode(source.to_string()));
    }
    if let Some(edge) = graph.edges().iter().find(|e| e.weight < 0.0) {
        return Err(RouteError::NegativeWeight {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        });
    }

    let mut distances = vec![INF; graph.node_count()];
    let mut heap = BinaryHeap::new();
    let mut stale = 0usize;

    distances[source] = 0.0;
    heap.push(Reverse(HeapEntry {
        node: source,
        distance: 0.0,
    }));

    while let Some(Reverse(HeapEntry { node, distance })) = heap.pop() {
        // Duplicate entry superseded by a later, shorter push
        if distance > distances[node] {
            stale += 1;
            continue;
        }

        for neighbor in graph.neighbors(node) {
            let candidate = distance + neighbor.weight;
            if candidate < distances[neighbor.node] {
                distances[neighbor.node] = candidate;
                heap.push(Reverse(HeapEntry {
                    node: neighbor.node,
                    distance: candidate,
                }));
            }
        }
    }

    let result = ShortestPaths { source, distances };
    tracing::debug!(
        reachable = result.reachable_count(),
        stale_entries = stale,
        "dijkstra_complete"
    );
    trace_time!(start, "dijkstra");

    Ok(result)
}

#[cfg(test)]
mod tests;

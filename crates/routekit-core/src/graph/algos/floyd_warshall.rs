//! All-pairs shortest paths with next-hop reconstruction

use std::time::Instant;

use crate::error::{RouteError, Result};
use crate::graph::algos::closure::{close, MinPlus};
use crate::graph::types::{AllPairs, Matrix, NextHop, NodeId, Weight, INF};
use crate::graph::Graph;
use crate::trace_time;

/// Floyd-Warshall over a graph's direct edges
///
/// Time: O(V^3), Memory: O(V^2)
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn all_pairs_shortest_paths(graph: &Graph) -> AllPairs {
    let start = Instant::now();
    let result = solve(graph.weight_matrix());
    trace_time!(start, "floyd_warshall");
    result
}

impl AllPairs {
    /// Floyd-Warshall over a raw weight matrix
    ///
    /// Non-finite entries mean "no edge"; the diagonal is forced to `0`.
    pub fn from_weights(weights: &Matrix<Weight>) -> Result<Self> {
        let n = weights.size();
        let mut seeded = Matrix::filled(n, INF);
        for i in 0..n {
            for j in 0..n {
                let w = *weights.get(i, j);
                if i == j {
                    seeded.set(i, j, 0.0);
                } else if w.is_finite() {
                    seeded.set(i, j, w);
                } else if w.is_nan() {
                    return Err(RouteError::invalid_edge(i, j, "weight is NaN"));
                }
            }
        }
        Ok(solve(seeded))
    }

    /// Node sequence of a shortest `from -> to` path; see [`reconstruct_path`]
    pub fn path(&self, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
        reconstruct_path(&self.next_hop, from, to)
    }
}

/// Run the closure on a seeded distance matrix (diagonal `0`, `INF` = no edge)
fn solve(mut distances: Matrix<Weight>) -> AllPairs {
    let n = distances.size();
    let mut next_hop: NextHop = Matrix::filled(n, None);
    for i in 0..n {
        for j in 0..n {
            if i == j || distances.get(i, j).is_finite() {
                next_hop.set(i, j, Some(j));
            }
        }
    }

    let mut updates = 0usize;
    close::<MinPlus, _>(&mut distances, |i, j, k| {
        // Head towards the pivot, not to the pivot itself
        let hop = *next_hop.get(i, k);
        next_hop.set(i, j, hop);
        updates += 1;
    });
    tracing::debug!(nodes = n, updates, "all_pairs_complete");

    AllPairs {
        distances,
        next_hop,
    }
}

/// Recover the node sequence of a shortest `from -> to` path
///
/// Returns `[from]` when `from == to` and an empty sequence when `to` is
/// unreachable. A table that needs more than `n` hops, or that is missing a
/// hop mid-path, is inconsistent and yields `PathReconstruction`.
pub fn reconstruct_path(next_hop: &NextHop, from: NodeId, to: NodeId) -> Result<Vec<NodeId>> {
    let n = next_hop.size();
    for node in [from, to] {
        if node >= n {
            return Err(RouteError::UnknownNode(node.to_string()));
        }
    }

    if from == to {
        return Ok(vec![from]);
    }
    if next_hop.get(from, to).is_none() {
        return Ok(Vec::new());
    }

    let mut path = vec![from];
    let mut current = from;
    while current != to {
        if path.len() > n {
            return Err(RouteError::PathReconstruction {
                from,
                to,
                reason: format!("exceeded {} hops", n),
            });
        }
        current = match *next_hop.get(current, to) {
            Some(hop) if hop < n => hop,
            _ => {
                return Err(RouteError::PathReconstruction {
                    from,
                    to,
                    reason: format!("no next hop at node {}", current),
                })
            }
        };
        path.push(current);
    }

    Ok(path)
}

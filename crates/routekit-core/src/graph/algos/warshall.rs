//! Transitive closure (Warshall)

use crate::graph::algos::closure::{close, Reachability};
use crate::graph::types::Matrix;

/// Reachability closure of a boolean adjacency matrix
///
/// `result[i][j]` is true iff a path `i -> j` exists. The diagonal is true
/// only where the input seeds it (or where `i` lies on a cycle).
#[tracing::instrument(skip(adjacency), fields(nodes = adjacency.size()))]
pub fn transitive_closure(adjacency: &Matrix<bool>) -> Matrix<bool> {
    let mut reach = adjacency.clone();
    let mut added = 0usize;
    close::<Reachability, _>(&mut reach, |_, _, _| added += 1);
    tracing::debug!(added, "closure_complete");
    reach
}

/// Copy of `adjacency` with every node reachable from itself
pub fn reflexive(adjacency: &Matrix<bool>) -> Matrix<bool> {
    let mut seeded = adjacency.clone();
    for i in 0..seeded.size() {
        seeded.set(i, i, true);
    }
    seeded
}

//! Optimal bounded walk (Held-Karp style bitmask DP)
//!
//! Finds the cheapest walk that visits every requested node at least once.
//! Costs come from a completed all-pairs distance matrix, so consecutive
//! stops may be joined through intermediate nodes, which is how revisits
//! enter the walk.

use std::time::Instant;

use crate::config::{Limits, WALK_NODE_CEILING};
use crate::error::{RouteError, Result};
use crate::graph::algos::floyd_warshall::reconstruct_path;
use crate::graph::algos::shared::check_tour_nodes;
use crate::graph::types::{DistanceMatrix, NextHop, NodeId, Tour, Weight, INF};
use crate::trace_time;

const OPERATION: &str = "bounded walk";

/// No predecessor recorded (only singleton states)
const NO_PARENT: u8 = u8::MAX;

/// Cheapest order in which to visit `nodes`, with its cost
///
/// `DP[mask][last]` holds the cheapest walk that has visited exactly the
/// positions in `mask` and stands on `last`. Returns `None` when some node
/// cannot be reached from the others.
///
/// Time: O(N^2 * 2^N), Memory: O(N * 2^N)
#[tracing::instrument(skip(nodes, distances, limits), fields(nodes = nodes.len()))]
pub fn best_bounded_walk(
    nodes: &[NodeId],
    distances: &DistanceMatrix,
    limits: &Limits,
) -> Result<Option<Tour>> {
    let start = Instant::now();
    let limit = limits.max_walk_nodes.min(WALK_NODE_CEILING);
    check_tour_nodes(OPERATION, nodes, distances.size(), limit)?;

    let k = nodes.len();
    let states = 1usize << k;
    let full = states - 1;
    let index = |mask: usize, last: usize| mask * k + last;

    let mut cost = vec![INF; states * k];
    let mut parent = vec![NO_PARENT; states * k];
    for i in 0..k {
        cost[index(1 << i, i)] = 0.0;
    }

    for mask in 1..states {
        for last in 0..k {
            let here = cost[index(mask, last)];
            if !here.is_finite() {
                continue;
            }
            for next in 0..k {
                if mask & (1 << next) != 0 {
                    continue;
                }
                let candidate = here + *distances.get(nodes[last], nodes[next]);
                let slot = index(mask | (1 << next), next);
                if candidate < cost[slot] {
                    cost[slot] = candidate;
                    // k <= WALK_NODE_CEILING, so positions fit in a u8
                    parent[slot] = last as u8;
                }
            }
        }
    }

    let mut best: Option<(usize, Weight)> = None;
    for last in 0..k {
        let total = cost[index(full, last)];
        if total.is_finite() && best.map_or(true, |(_, b)| total < b) {
            best = Some((last, total));
        }
    }
    let Some((end, total)) = best else {
        tracing::debug!("bounded_walk_unreachable");
        return Ok(None);
    };

    // Walk predecessors back to the singleton state; the previous mask is
    // always the current one without the current position
    let mut positions = Vec::with_capacity(k);
    let mut mask = full;
    let mut current = end;
    loop {
        positions.push(current);
        let prev = parent[index(mask, current)];
        if prev == NO_PARENT {
            break;
        }
        mask &= !(1 << current);
        current = prev as usize;
    }
    positions.reverse();

    tracing::debug!(cost = total, states, "bounded_walk_complete");
    trace_time!(start, "bounded_walk");

    Ok(Some(Tour {
        cost: total,
        order: positions.into_iter().map(|p| nodes[p]).collect(),
    }))
}

/// Expand a visiting order into the concrete node-by-node route
///
/// Each consecutive pair is joined by its shortest path from `next_hop`, so
/// intermediate and repeated nodes become explicit.
pub fn expand_walk(order: &[NodeId], next_hop: &NextHop) -> Result<Vec<NodeId>> {
    let Some(&first) = order.first() else {
        return Ok(Vec::new());
    };

    let mut route = vec![first];
    for pair in order.windows(2) {
        let segment = reconstruct_path(next_hop, pair[0], pair[1])?;
        if segment.is_empty() {
            return Err(RouteError::PathReconstruction {
                from: pair[0],
                to: pair[1],
                reason: "stops are not connected".to_string(),
            });
        }
        route.extend_from_slice(&segment[1..]);
    }
    Ok(route)
}

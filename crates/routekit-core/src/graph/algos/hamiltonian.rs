//! Exhaustive Hamiltonian path search
//!
//! Enumerates permutations of the requested nodes, so the cost is O(N!) in the
//! worst case. Inputs above `Limits::max_permutation_nodes` are refused before
//! any search starts.

use std::time::Instant;

use crate::config::{Limits, PERMUTATION_NODE_CEILING};
use crate::error::Result;
use crate::graph::algos::shared::check_tour_nodes;
use crate::graph::types::{NodeId, Tour, Weight};
use crate::graph::Graph;
use crate::trace_time;

const OPERATION: &str = "hamiltonian search";

/// Every Hamiltonian path over `nodes`, in lexicographic order of positions
/// within `nodes`
#[tracing::instrument(skip(nodes, graph, limits), fields(nodes = nodes.len()))]
pub fn hamiltonian_paths(nodes: &[NodeId], graph: &Graph, limits: &Limits) -> Result<Vec<Tour>> {
    check_tour_nodes(OPERATION, nodes, graph.node_count(), permutation_limit(limits))?;

    let mut paths = Vec::new();
    Search::new(nodes, graph).run(&mut |order: &[NodeId], cost: Weight| {
        paths.push(Tour {
            cost,
            order: order.to_vec(),
        })
    });
    tracing::debug!(found = paths.len(), "hamiltonian_paths_complete");
    Ok(paths)
}

/// Cheapest Hamiltonian path over `nodes`, or `None` if no ordering has an
/// edge between every consecutive pair
///
/// Among equal-cost paths the first in enumeration order wins.
#[tracing::instrument(skip(nodes, graph, limits), fields(nodes = nodes.len()))]
pub fn best_hamiltonian_order(
    nodes: &[NodeId],
    graph: &Graph,
    limits: &Limits,
) -> Result<Option<Tour>> {
    let start = Instant::now();
    check_tour_nodes(OPERATION, nodes, graph.node_count(), permutation_limit(limits))?;

    let mut best: Option<Tour> = None;
    let mut complete = 0usize;
    Search::new(nodes, graph).run(&mut |order: &[NodeId], cost: Weight| {
        complete += 1;
        if best.as_ref().map_or(true, |b| cost < b.cost) {
            best = Some(Tour {
                cost,
                order: order.to_vec(),
            });
        }
    });

    tracing::debug!(
        complete,
        best_cost = best.as_ref().map(|b| b.cost),
        "hamiltonian_search_complete"
    );
    trace_time!(start, "hamiltonian_search");
    Ok(best)
}

fn permutation_limit(limits: &Limits) -> usize {
    limits.max_permutation_nodes.min(PERMUTATION_NODE_CEILING)
}

/// Depth-first permutation enumeration with prefix pruning
struct Search<'a> {
    nodes: &'a [NodeId],
    graph: &'a Graph,
    used: Vec<bool>,
    order: Vec<NodeId>,
}

impl<'a> Search<'a> {
    fn new(nodes: &'a [NodeId], graph: &'a Graph) -> Self {
        Self {
            nodes,
            graph,
            used: vec![false; nodes.len()],
            order: Vec::with_capacity(nodes.len()),
        }
    }

    fn run(mut self, visit: &mut dyn FnMut(&[NodeId], Weight)) {
        self.extend(0.0, visit);
    }

    fn extend(&mut self, cost: Weight, visit: &mut dyn FnMut(&[NodeId], Weight)) {
        if self.order.len() == self.nodes.len() {
            visit(&self.order, cost);
            return;
        }

        for position in 0..self.nodes.len() {
            if self.used[position] {
                continue;
            }
            let node = self.nodes[position];
            let step = match self.order.last() {
                Some(&last) => self.graph.weight(last, node),
                None => 0.0,
            };
            // Missing edge: no permutation with this prefix is valid
            if !step.is_finite() {
                continue;
            }

            self.used[position] = true;
            self.order.push(node);
            self.extend(cost + step, visit);
            self.order.pop();
            self.used[position] = false;
        }
    }
}

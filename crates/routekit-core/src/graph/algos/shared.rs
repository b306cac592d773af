//! Input checks shared by the exponential tour algorithms

use std::collections::HashSet;

use crate::error::{RouteError, Result};
use crate::graph::types::NodeId;

/// Validate a tour's node list before any exponential work starts
///
/// Rejects, in order: an empty list, a list longer than `limit`, a node
/// outside `0..node_count`, and a repeated node.
pub fn check_tour_nodes(
    operation: &str,
    nodes: &[NodeId],
    node_count: usize,
    limit: usize,
) -> Result<()> {
    if nodes.is_empty() {
        return Err(RouteError::empty(operation));
    }
    if nodes.len() > limit {
        crate::bail_too_large!(operation, nodes.len(), limit);
    }

    let mut seen = HashSet::with_capacity(nodes.len());
    for &node in nodes {
        if node >= node_count {
            return Err(RouteError::UnknownNode(node.to_string()));
        }
        if !seen.insert(node) {
            crate::bail_invalid!("tour node list", format!("node {} repeated", node));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_distinct_nodes() {
        assert!(check_tour_nodes("walk", &[2, 0, 1], 3, 3).is_ok());
    }

    #[test]
    fn test_rejection_order() {
        assert!(matches!(
            check_tour_nodes("walk", &[], 3, 3),
            Err(RouteError::EmptyGraph { .. })
        ));
        // Too large wins over the bad index
        assert!(matches!(
            check_tour_nodes("walk", &[0, 1, 9], 3, 2),
            Err(RouteError::StateSpaceTooLarge { .. })
        ));
        assert!(matches!(
            check_tour_nodes("walk", &[0, 9], 3, 3),
            Err(RouteError::UnknownNode(_))
        ));
        assert!(matches!(
            check_tour_nodes("walk", &[1, 1], 3, 3),
            Err(RouteError::InvalidValue { .. })
        ));
    }
}

//! Disjoint-set forest with path compression

use crate::graph::types::NodeId;

/// Partition of `0..n` into disjoint sets
///
/// `union(a, b)` always hangs `b`'s root under `a`'s root, so the
/// representative of a merged set is the representative of its first argument.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<NodeId>,
    sets: usize,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of `x`'s set; re-points every node on the way at the root
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets of `a` and `b`; `false` if they were already joined
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        self.parent[root_b] = root_a;
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }
}

use serde::ser::{Serialize, Serializer};

use crate::error::{RouteError, Result};

/// Index of a node, stable for the lifetime of a [`Graph`](super::Graph)
pub type NodeId = usize;

/// Edge weight / path cost
pub type Weight = f64;

/// Sentinel for "no path": larger than any real path cost
pub const INF: Weight = f64::INFINITY;

/// A weighted edge as supplied to the graph builder
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

/// Dense square matrix stored row-major
///
/// Backs the distance, next-hop and reachability tables. Serializes as a list
/// of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Create a `size × size` matrix with every cell set to `value`
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Build a matrix from rows; fails unless every row has `rows.len()` cells
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(RouteError::invalid_value(
                    "matrix",
                    format!("row {} has {} columns, expected {}", i, row.len(), size),
                ));
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }
}

impl<T> Matrix<T> {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.cells[i * self.size + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.cells[i * self.size + j] = value;
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.size.max(1))
    }
}

impl<T> std::ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        self.get(i, j)
    }
}

impl<T: Serialize> Serialize for Matrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// Shortest-path distances; `INF` marks unreachable pairs
pub type DistanceMatrix = Matrix<Weight>;

/// First hop on a shortest path; `None` marks unreachable pairs
pub type NextHop = Matrix<Option<NodeId>>;

/// Result of a single-source shortest path query
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ShortestPaths {
    pub source: NodeId,
    /// Distance to each node, indexed by [`NodeId`]; `INF` when unreached
    pub distances: Vec<Weight>,
}

impl ShortestPaths {
    pub fn distance(&self, node: NodeId) -> Weight {
        self.distances.get(node).copied().unwrap_or(INF)
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_finite()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}

/// Distance matrix plus next-hop table from an all-pairs computation
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AllPairs {
    pub distances: DistanceMatrix,
    pub next_hop: NextHop,
}

impl AllPairs {
    pub fn node_count(&self) -> usize {
        self.distances.size()
    }

    pub fn distance(&self, from: NodeId, to: NodeId) -> Weight {
        *self.distances.get(from, to)
    }
}

/// Minimum spanning forest produced by Kruskal
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SpanningForest {
    /// Selected edges in acceptance order
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
    /// Number of connected components (1 for a spanning tree)
    pub components: usize,
}

impl SpanningForest {
    pub fn is_tree(&self) -> bool {
        self.components <= 1
    }
}

/// A visiting order over nodes with its total cost
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Tour {
    pub cost: Weight,
    pub order: Vec<NodeId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_from_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.size(), 2);
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(m.row(0), &[1, 2]);
    }

    #[test]
    fn test_matrix_rejects_ragged_rows() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidValue { .. }));
    }

    #[test]
    fn test_empty_matrix_has_no_rows() {
        let m: Matrix<bool> = Matrix::filled(0, false);
        assert_eq!(m.rows().count(), 0);
    }

    #[test]
    fn test_matrix_serializes_as_rows() {
        let mut m = Matrix::filled(2, 0.0);
        m.set(0, 1, INF);
        let json = serde_json::to_value(&m).unwrap();
        // serde_json has no infinity; unreachable cells come out as null
        assert_eq!(json, serde_json::json!([[0.0, null], [0.0, 0.0]]));
    }

    #[test]
    fn test_shortest_paths_out_of_range_is_unreachable() {
        let paths = ShortestPaths {
            source: 0,
            distances: vec![0.0, INF],
        };
        assert!(paths.is_reachable(0));
        assert!(!paths.is_reachable(1));
        assert!(!paths.is_reachable(7));
        assert_eq!(paths.reachable_count(), 1);
    }
}

//! Weighted graphs and the algorithms that run over them
//!
//! - [`Graph`] / [`GraphBuilder`]: validated, immutable graph model
//! - [`DisjointSet`]: union-find used by Kruskal
//! - [`algos`]: Dijkstra, Floyd-Warshall, Warshall, Kruskal, Hamiltonian
//!   search and the bounded walk solver
//! - [`GraphFile`]: TOML/JSON graph definitions

pub mod algos;
pub mod file;
pub mod model;
pub mod types;
pub mod union_find;

pub use algos::{
    all_pairs_shortest_paths, best_bounded_walk, best_hamiltonian_order, expand_walk,
    hamiltonian_paths, minimum_spanning_forest, reconstruct_path, reflexive, shortest_paths_from,
    transitive_closure,
};
pub use file::{EdgeSpec, GraphFile, GraphFormat};
pub use model::{Graph, GraphBuilder, Neighbor, NodeRef};
pub use types::{
    AllPairs, DistanceMatrix, Edge, Matrix, NextHop, NodeId, ShortestPaths, SpanningForest, Tour,
    Weight, INF,
};
pub use union_find::DisjointSet;

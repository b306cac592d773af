//! Graph algorithm implementations
//!
//! - `closure`: pivot loop shared by Floyd-Warshall and Warshall
//! - `dijkstra`: single-source shortest paths
//! - `floyd_warshall`: all-pairs shortest paths and path reconstruction
//! - `warshall`: transitive closure
//! - `kruskal`: minimum spanning forest
//! - `hamiltonian`: exhaustive Hamiltonian path search
//! - `walk`: bitmask DP for the cheapest walk covering a node set
//! - `shared`: input checks for the exponential algorithms

pub mod closure;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod hamiltonian;
pub mod kruskal;
pub mod shared;
pub mod walk;
pub mod warshall;

pub use dijkstra::shortest_paths_from;
pub use floyd_warshall::{all_pairs_shortest_paths, reconstruct_path};
pub use hamiltonian::{best_hamiltonian_order, hamiltonian_paths};
pub use kruskal::minimum_spanning_forest;
pub use walk::{best_bounded_walk, expand_walk};
pub use warshall::{reflexive, transitive_closure};

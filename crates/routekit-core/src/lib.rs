//! Routekit Core Library
//!
//! Graph algorithms over static weighted graphs: single-source and all-pairs
//! shortest paths, transitive closure, minimum spanning forests, exhaustive
//! Hamiltonian search and an optimal bounded walk solver.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

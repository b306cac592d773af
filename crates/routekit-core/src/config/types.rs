//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Hard ceiling for permutation search, regardless of configuration (12! paths)
pub const PERMUTATION_NODE_CEILING: usize = 12;

/// Hard ceiling for the bitmask walk solver, regardless of configuration
///
/// The DP table holds N·2^N costs plus one parent byte per entry: about
/// 190 MB at 20 nodes, doubling (and then some) with every node beyond.
pub const WALK_NODE_CEILING: usize = 20;

/// Solver configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Node bounds for the exponential algorithms
    #[serde(default)]
    pub limits: Limits,

    /// Human output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Upper bounds on input size for the exponential-cost algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum nodes for exhaustive Hamiltonian search (N! permutations)
    #[serde(default = "default_max_permutation_nodes")]
    pub max_permutation_nodes: usize,

    /// Maximum nodes for the bounded walk solver (N·2^N states)
    #[serde(default = "default_max_walk_nodes")]
    pub max_walk_nodes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_permutation_nodes: default_max_permutation_nodes(),
            max_walk_nodes: default_max_walk_nodes(),
        }
    }
}

fn default_max_permutation_nodes() -> usize {
    10
}

fn default_max_walk_nodes() -> usize {
    20
}

/// Configuration for human-readable output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places when printing weights
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    2
}

//! Error types and exit codes for routekit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, inputs beyond configured limits)
//! - 3: Data error (malformed graph, unknown nodes, invalid weights)

mod macros;

use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes for the routekit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during routekit operations
#[derive(Error, Debug)]
pub enum RouteError {
    // Data errors (exit code 3)
    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("{operation} requires at least one node")]
    EmptyGraph { operation: String },

    // Usage errors (exit code 2)
    #[error("{operation} supports at most {limit} nodes, got {nodes}")]
    StateSpaceTooLarge {
        operation: String,
        nodes: usize,
        limit: usize,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("cannot reconstruct path {from} -> {to}: {reason}")]
    PathReconstruction {
        from: NodeId,
        to: NodeId,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl RouteError {
    /// Create an error for an edge that cannot be part of a graph
    pub fn invalid_edge(
        from: impl std::fmt::Display,
        to: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        RouteError::InvalidEdge {
            from: from.to_string(),
            to: to.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an input beyond an exponential algorithm's bound
    pub fn too_large(operation: &str, nodes: usize, limit: usize) -> Self {
        RouteError::StateSpaceTooLarge {
            operation: operation.to_string(),
            nodes,
            limit,
        }
    }

    /// Create an error for an operation that received no nodes
    pub fn empty(operation: &str) -> Self {
        RouteError::EmptyGraph {
            operation: operation.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::InvalidEdge { .. }
            | RouteError::NegativeWeight { .. }
            | RouteError::UnknownNode(_)
            | RouteError::EmptyGraph { .. } => ExitCode::Data,

            RouteError::StateSpaceTooLarge { .. }
            | RouteError::InvalidValue { .. }
            | RouteError::UsageError(_) => ExitCode::Usage,

            RouteError::PathReconstruction { .. }
            | RouteError::Io(_)
            | RouteError::Json(_)
            | RouteError::Toml(_)
            | RouteError::TomlSer(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::InvalidEdge { .. } => "invalid_edge",
            RouteError::NegativeWeight { .. } => "negative_weight",
            RouteError::UnknownNode(_) => "unknown_node",
            RouteError::EmptyGraph { .. } => "empty_graph",
            RouteError::StateSpaceTooLarge { .. } => "state_space_too_large",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::UsageError(_) => "usage_error",
            RouteError::PathReconstruction { .. } => "path_reconstruction",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) | RouteError::TomlSer(_) => "toml_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for routekit operations
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(RouteError::empty("dijkstra").exit_code(), ExitCode::Data);
        assert_eq!(
            RouteError::too_large("walk", 30, 20).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            RouteError::PathReconstruction {
                from: 0,
                to: 1,
                reason: "cycle".to_string()
            }
            .exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_state_space_message() {
        let err = RouteError::too_large("hamiltonian search", 11, 10);
        assert_eq!(
            err.to_string(),
            "hamiltonian search supports at most 10 nodes, got 11"
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = RouteError::UnknownNode("Yucatan".to_string());
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "unknown_node");
        assert_eq!(json["error"]["message"], "unknown node: Yucatan");
    }
}

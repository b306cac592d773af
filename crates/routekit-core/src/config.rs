//! Solver configuration for routekit
//!
//! Configuration is read from a TOML file passed with `--config`; every key is
//! optional and falls back to its default.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::Result;

pub use types::{
    Limits, OutputConfig, SolverConfig, PERMUTATION_NODE_CEILING, WALK_NODE_CEILING,
};

impl SolverConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SolverConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), limits = ?config.limits, "config_loaded");
        Ok(config)
    }

    /// Load configuration from a file if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check the limits against the hard ceilings
    pub fn validate(&self) -> Result<()> {
        let limits = &self.limits;
        if limits.max_permutation_nodes > PERMUTATION_NODE_CEILING {
            crate::bail_invalid!(
                "limits.max_permutation_nodes",
                format!(
                    "{} (ceiling is {})",
                    limits.max_permutation_nodes, PERMUTATION_NODE_CEILING
                )
            );
        }
        if limits.max_walk_nodes > WALK_NODE_CEILING {
            crate::bail_invalid!(
                "limits.max_walk_nodes",
                format!("{} (ceiling is {})", limits.max_walk_nodes, WALK_NODE_CEILING)
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.limits.max_permutation_nodes, 10);
        assert_eq!(config.limits.max_walk_nodes, 20);
        assert_eq!(config.output.precision, 2);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routekit.toml");
        fs::write(&path, "[limits]\nmax_walk_nodes = 12\n").unwrap();

        let config = SolverConfig::load(&path).unwrap();
        assert_eq!(config.limits.max_walk_nodes, 12);
        assert_eq!(config.limits.max_permutation_nodes, 10);
        assert_eq!(config.output.precision, 2);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routekit.toml");
        let mut config = SolverConfig::default();
        config.output.precision = 0;
        config.limits.max_permutation_nodes = 8;
        config.save(&path).unwrap();

        assert_eq!(SolverConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_limit_above_ceiling_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routekit.toml");
        fs::write(&path, "[limits]\nmax_walk_nodes = 40\n").unwrap();

        let err = SolverConfig::load(&path).unwrap_err();
        assert!(matches!(err, RouteError::InvalidValue { .. }));
    }

    #[test]
    fn test_walk_ceiling_is_inclusive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routekit.toml");

        fs::write(&path, "[limits]\nmax_walk_nodes = 20\n").unwrap();
        assert_eq!(SolverConfig::load(&path).unwrap().limits.max_walk_nodes, 20);

        fs::write(&path, "[limits]\nmax_walk_nodes = 21\n").unwrap();
        assert!(matches!(
            SolverConfig::load(&path),
            Err(RouteError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routekit.toml");
        fs::write(&path, "[limits\n").unwrap();

        assert!(matches!(
            SolverConfig::load(&path),
            Err(RouteError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_path_uses_defaults() {
        let config = SolverConfig::load_or_default(None).unwrap();
        assert_eq!(config, SolverConfig::default());
    }
}

//! Output format handling for routekit
//!
//! Supports two output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;
use crate::graph::Weight;

/// Output format for routekit commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(RouteError::invalid_value(
                "format",
                format!("{} (expected: human or json)", other),
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a weight for human output; unreachable costs print as `inf`
///
/// Whole numbers drop their decimals so integer road distances stay clean.
pub fn format_weight(weight: Weight, precision: usize) -> String {
    if !weight.is_finite() {
        return "inf".to_string();
    }
    if weight.fract() == 0.0 {
        format!("{}", weight)
    } else {
        format!("{:.*}", precision, weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::INF;

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!("records".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(1750.0, 2), "1750");
        assert_eq!(format_weight(2.126, 2), "2.13");
        assert_eq!(format_weight(0.5, 3), "0.500");
        assert_eq!(format_weight(INF, 2), "inf");
    }
}

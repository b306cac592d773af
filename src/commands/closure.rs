//! `routekit closure` - reachability matrix via Warshall's algorithm
//!
//! Without `--reflexive` a node reaches itself only through a cycle or a
//! self-loop.

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{print_json, print_table, Session};
use routekit_core::error::Result;
use routekit_core::graph::{reflexive, transitive_closure};

/// Execute the closure command
pub fn execute(cli: &Cli, session: &Session, reflexive_closure: bool) -> Result<()> {
    let adjacency = session.graph.adjacency_matrix();
    let seeded = if reflexive_closure {
        reflexive(&adjacency)
    } else {
        adjacency
    };
    let closure = transitive_closure(&seeded);

    match cli.format {
        OutputFormat::Json => {
            let nodes = session.names(&session.graph.nodes().collect::<Vec<_>>());
            print_json(&json!({
                "nodes": nodes,
                "reflexive": reflexive_closure,
                "reachable": closure,
            }))?;
        }
        OutputFormat::Human => {
            print_table(cli, session, &closure, |&r| {
                if r { "1".to_string() } else { "0".to_string() }
            });
        }
    }

    Ok(())
}

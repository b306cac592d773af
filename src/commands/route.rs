//! `routekit route` - cheapest route between two nodes
//!
//! Uses the Floyd-Warshall next-hop table so the printed route lists every
//! intermediate node.

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{json_weight, print_json, Session};
use routekit_core::error::Result;
use routekit_core::graph::all_pairs_shortest_paths;

/// Execute the route command
pub fn execute(cli: &Cli, session: &Session, from: &str, to: &str) -> Result<()> {
    let from = session.graph.resolve(from)?;
    let to = session.graph.resolve(to)?;

    let all_pairs = all_pairs_shortest_paths(&session.graph);
    let path = all_pairs.path(from, to)?;
    let cost = all_pairs.distance(from, to);

    match cli.format {
        OutputFormat::Json => {
            print_json(&json!({
                "from": session.name(from),
                "to": session.name(to),
                "reachable": !path.is_empty(),
                "cost": json_weight(cost),
                "path": session.names(&path),
            }))?;
        }
        OutputFormat::Human => {
            if path.is_empty() {
                println!(
                    "No route from {} to {}",
                    session.name(from),
                    session.name(to)
                );
            } else {
                println!("{}", session.names(&path).join(" -> "));
                if !cli.quiet {
                    println!("cost: {}", session.weight(cost));
                }
            }
        }
    }

    Ok(())
}

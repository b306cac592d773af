//! `routekit paths` and `routekit all-pairs` - shortest distances
//!
//! `paths` runs Dijkstra from one source; negative weights are rejected.
//! `all-pairs` runs Floyd-Warshall and prints the full distance matrix.

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{json_weight, print_json, print_table, Session};
use routekit_core::error::Result;
use routekit_core::graph::{all_pairs_shortest_paths, shortest_paths_from};

/// Execute the paths command
pub fn execute(cli: &Cli, session: &Session, from: &str) -> Result<()> {
    let source = session.graph.resolve(from)?;
    let result = shortest_paths_from(&session.graph, source)?;

    match cli.format {
        OutputFormat::Json => {
            let distances: Vec<_> = result
                .distances
                .iter()
                .enumerate()
                .map(|(node, &distance)| {
                    json!({
                        "node": session.name(node),
                        "distance": json_weight(distance),
                    })
                })
                .collect();
            print_json(&json!({
                "source": session.name(source),
                "reachable": result.reachable_count(),
                "distances": distances,
            }))?;
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Shortest distances from {}:", session.name(source));
            }
            for (node, &distance) in result.distances.iter().enumerate() {
                println!("  {}: {}", session.name(node), session.weight(distance));
            }
        }
    }

    Ok(())
}

/// Execute the all-pairs command
pub fn execute_all_pairs(cli: &Cli, session: &Session) -> Result<()> {
    let result = all_pairs_shortest_paths(&session.graph);

    match cli.format {
        OutputFormat::Json => {
            let nodes = session.names(&session.graph.nodes().collect::<Vec<_>>());
            print_json(&json!({
                "nodes": nodes,
                "distances": result.distances,
            }))?;
        }
        OutputFormat::Human => {
            print_table(cli, session, &result.distances, |&d| session.weight(d));
        }
    }

    Ok(())
}

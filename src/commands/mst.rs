//! `routekit mst` - minimum spanning tree (or forest) via Kruskal
//!
//! Directed edges are treated as undirected.

use serde_json::json;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{print_json, Session};
use routekit_core::error::Result;
use routekit_core::graph::minimum_spanning_forest;

/// Execute the mst command
pub fn execute(cli: &Cli, session: &Session) -> Result<()> {
    let forest = minimum_spanning_forest(&session.graph);

    match cli.format {
        OutputFormat::Json => {
            let edges: Vec<_> = forest
                .edges
                .iter()
                .map(|e| {
                    json!({
                        "from": session.name(e.from),
                        "to": session.name(e.to),
                        "weight": e.weight,
                    })
                })
                .collect();
            print_json(&json!({
                "edges": edges,
                "total_weight": forest.total_weight,
                "components": forest.components,
                "spanning_tree": forest.is_tree(),
            }))?;
        }
        OutputFormat::Human => {
            for edge in &forest.edges {
                println!(
                    "{} - {}: {}",
                    session.name(edge.from),
                    session.name(edge.to),
                    session.weight(edge.weight)
                );
            }
            if !cli.quiet {
                println!("total: {}", session.weight(forest.total_weight));
                if !forest.is_tree() {
                    println!("components: {}", forest.components);
                }
            }
        }
    }

    Ok(())
}

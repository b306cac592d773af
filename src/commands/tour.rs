//! `routekit hamiltonian` and `routekit walk` - visiting every node
//!
//! `hamiltonian` searches every permutation and requires a direct edge
//! between consecutive nodes. `walk` runs the bitmask DP over shortest-path
//! distances, so nodes may be passed through more than once.

use serde_json::{json, Value};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{print_json, Session};
use routekit_core::error::Result;
use routekit_core::graph::{
    all_pairs_shortest_paths, best_bounded_walk, best_hamiltonian_order, expand_walk,
    hamiltonian_paths, NodeId, Tour,
};

/// Execute the hamiltonian command
pub fn execute_hamiltonian(
    cli: &Cli,
    session: &Session,
    nodes: &[String],
    all: bool,
) -> Result<()> {
    let nodes = session.select_nodes(nodes)?;
    let limits = &session.config.limits;

    if all {
        let paths = hamiltonian_paths(&nodes, &session.graph, limits)?;
        match cli.format {
            OutputFormat::Json => {
                let paths: Vec<Value> = paths.iter().map(|t| tour_json(session, t)).collect();
                print_json(&json!({
                    "count": paths.len(),
                    "paths": paths,
                }))?;
            }
            OutputFormat::Human => {
                for tour in &paths {
                    println!(
                        "{} ({})",
                        session.names(&tour.order).join(" -> "),
                        session.weight(tour.cost)
                    );
                }
                if !cli.quiet {
                    println!("{} Hamiltonian path(s)", paths.len());
                }
            }
        }
        return Ok(());
    }

    let best = best_hamiltonian_order(&nodes, &session.graph, limits)?;
    output_tour(cli, session, best.as_ref(), None, "No Hamiltonian path exists")
}

/// Execute the walk command
pub fn execute_walk(cli: &Cli, session: &Session, nodes: &[String], expand: bool) -> Result<()> {
    let nodes = session.select_nodes(nodes)?;
    let all_pairs = all_pairs_shortest_paths(&session.graph);

    let best = best_bounded_walk(&nodes, &all_pairs.distances, &session.config.limits)?;
    let route = match (&best, expand) {
        (Some(tour), true) => Some(expand_walk(&tour.order, &all_pairs.next_hop)?),
        _ => None,
    };

    output_tour(
        cli,
        session,
        best.as_ref(),
        route.as_deref(),
        "Some nodes cannot be reached from the others",
    )
}

fn output_tour(
    cli: &Cli,
    session: &Session,
    tour: Option<&Tour>,
    route: Option<&[NodeId]>,
    missing: &str,
) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let mut value = json!({ "found": tour.is_some() });
            if let Some(tour) = tour {
                value["order"] = json!(session.names(&tour.order));
                value["cost"] = json!(tour.cost);
            }
            if let Some(route) = route {
                value["route"] = json!(session.names(route));
            }
            print_json(&value)?;
        }
        OutputFormat::Human => match tour {
            Some(tour) => {
                println!("{}", session.names(&tour.order).join(" -> "));
                if let Some(route) = route {
                    println!("route: {}", session.names(route).join(" -> "));
                }
                if !cli.quiet {
                    println!("cost: {}", session.weight(tour.cost));
                }
            }
            None => println!("{}", missing),
        },
    }

    Ok(())
}

fn tour_json(session: &Session, tour: &Tour) -> Value {
    json!({
        "order": session.names(&tour.order),
        "cost": tour.cost,
    })
}

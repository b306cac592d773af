//! Command dispatch logic for routekit
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::helpers::Session;
use routekit_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        Commands::Paths { graph, from } => {
            let session = Session::load(cli, graph, start)?;
            commands::paths::execute(cli, &session, from)
        }

        Commands::AllPairs { graph } => {
            let session = Session::load(cli, graph, start)?;
            commands::paths::execute_all_pairs(cli, &session)
        }

        Commands::Route { graph, from, to } => {
            let session = Session::load(cli, graph, start)?;
            commands::route::execute(cli, &session, from, to)
        }

        Commands::Closure { graph, reflexive } => {
            let session = Session::load(cli, graph, start)?;
            commands::closure::execute(cli, &session, *reflexive)
        }

        Commands::Mst { graph } => {
            let session = Session::load(cli, graph, start)?;
            commands::mst::execute(cli, &session)
        }

        Commands::Hamiltonian { graph, nodes, all } => {
            let session = Session::load(cli, graph, start)?;
            commands::tour::execute_hamiltonian(cli, &session, nodes, *all)
        }

        Commands::Walk {
            graph,
            nodes,
            expand,
        } => {
            let session = Session::load(cli, graph, start)?;
            commands::tour::execute_walk(cli, &session, nodes, *expand)
        }
    }
}

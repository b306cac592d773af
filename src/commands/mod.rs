//! CLI commands for routekit

pub mod closure;
pub mod dispatch;
pub mod helpers;
pub mod mst;
pub mod paths;
pub mod route;
pub mod tour;

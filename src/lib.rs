#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod routing;

pub use error::{GraphError, RouteError};
pub use graph::path::{is_path_connected, path_weight};
pub use graph::{DirectedGraph, WeightedGraph};
pub use model::Weight;
pub use routing::route::{Path, Route, RouteTable, reconstruct};
pub use routing::{
    SolverConfig, shortest_path, shortest_path_with_config, solve, solve_with_config,
};

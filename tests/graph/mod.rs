mod generated;
mod scenarios;

pub use generated::{GeneratedGraph, minimum_distances};
pub use scenarios::{DISCONNECTED_GRAPH, SCENARIO_1_GRAPH, SCENARIO_2_GRAPH, SINGLE_NODE_GRAPH};

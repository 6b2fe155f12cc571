use std::collections::HashMap;

use dijkstra_route::{DirectedGraph, WeightedGraph};
use rand::prelude::*;

/// Pseudo-random graph with integer weights, reproducible from its seed.
pub struct GeneratedGraph {
    pub graph: WeightedGraph<u32>,
    pub edges: Vec<(u32, u32, f64)>,
    pub size: u32,
}

impl GeneratedGraph {
    pub fn new(seed: u64, size: u32, edges_count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let edges: Vec<_> = (0..edges_count)
            .map(|_| {
                let from = rng.gen_range(0..size);
                let to = rng.gen_range(0..size);
                let weight = f64::from(rng.gen_range(0..10u32));
                (from, to, weight)
            })
            .collect();

        let mut graph = WeightedGraph::new();
        for vertex in 0..size {
            graph.add_node(vertex);
        }
        for &(from, to, weight) in &edges {
            // keep the cheapest of parallel edges
            let weight = match graph.edge_weight(&from, &to) {
                Some(existing) => existing.value().min(weight),
                None => weight,
            };
            graph.add_edge(from, to, weight).unwrap();
        }

        Self { graph, edges, size }
    }
}

/// Minimum distance from origin to every reachable vertex, relaxing all the edges until no
/// distance can be improved.
pub fn minimum_distances(edges: &[(u32, u32, f64)], origin: u32) -> HashMap<u32, f64> {
    let mut distances = HashMap::from([(origin, 0.0)]);

    loop {
        let mut improved = false;
        for &(from, to, weight) in edges {
            let Some(&distance) = distances.get(&from) else {
                continue;
            };
            let candidate = distance + weight;
            if distances.get(&to).is_none_or(|&current| candidate < current) {
                distances.insert(to, candidate);
                improved = true;
            }
        }

        if !improved {
            return distances;
        }
    }
}
